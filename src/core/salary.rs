use crate::core::cell::Attendance;
use crate::core::table::EmployeeRow;

/// Derived columns of a row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RowSummary {
    pub present: u32,
    pub absent: u32,
    pub half: u32,
    pub adjusted_salary: f64,
}

/// Tally the row's cells and pro-rate its full salary.
///
/// The divisor is the number of cells, rest days included. Half days
/// weigh 0.5, absences 0. An empty row yields a zero salary.
pub fn compute_row(row: &EmployeeRow) -> RowSummary {
    let mut summary = RowSummary::default();

    for cell in &row.cells {
        match cell.state() {
            Attendance::Present => summary.present += 1,
            Attendance::Absent => summary.absent += 1,
            Attendance::Half => summary.half += 1,
            Attendance::Empty => {}
        }
    }

    let total = row.cells.len();
    if total > 0 {
        let worked = summary.present as f64 + summary.half as f64 * 0.5;
        summary.adjusted_salary = round2(row.full_salary / total as f64 * worked);
    }

    summary
}

/// Parse a salary input; anything unparseable, non-finite or negative is 0.
pub fn parse_salary(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
