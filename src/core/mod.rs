pub mod calendar;
pub mod cell;
pub mod salary;
pub mod table;

pub use calendar::Period;
pub use cell::{Attendance, AttendanceCell, BulkMark};
pub use salary::{RowSummary, compute_row};
pub use table::{EmployeeRow, HeaderDay, SalarySheet};
