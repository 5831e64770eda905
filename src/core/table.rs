//! Sheet structure: header, employee rows and the operations applied to them.

use crate::core::calendar::Period;
use crate::core::cell::{Attendance, AttendanceCell, BulkMark};
use crate::core::salary::{RowSummary, compute_row, parse_salary};
use crate::errors::{AppError, AppResult};

pub const DEFAULT_NAME: &str = "Employee";
pub const DEFAULT_DESIGNATION: &str = "Designation";
pub const DEFAULT_ROWS: usize = 5;

/// One column of the day header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderDay {
    pub day: u32,
    pub is_rest_day: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRow {
    pub name: String,
    pub designation: String,
    pub full_salary: f64,
    pub cells: Vec<AttendanceCell>,
    /// Last values stored by [`SalarySheet::recompute`].
    pub summary: RowSummary,
}

impl EmployeeRow {
    pub fn cell(&self, day: u32) -> Option<&AttendanceCell> {
        day.checked_sub(1).and_then(|i| self.cells.get(i as usize))
    }
}

pub fn build_header(period: &Period) -> Vec<HeaderDay> {
    let rest = period.rest_days();
    (1..=period.days())
        .map(|day| HeaderDay {
            day,
            is_rest_day: rest.contains(&day),
        })
        .collect()
}

pub fn build_row(period: &Period) -> EmployeeRow {
    let rest = period.rest_days();
    EmployeeRow {
        name: DEFAULT_NAME.to_string(),
        designation: DEFAULT_DESIGNATION.to_string(),
        full_salary: 0.0,
        cells: (1..=period.days())
            .map(|d| AttendanceCell::new(rest.contains(&d)))
            .collect(),
        summary: RowSummary::default(),
    }
}

/// Force every non-rest-day cell of `row` to the target state.
pub fn bulk_mark(row: &mut EmployeeRow, target: BulkMark) {
    for cell in row.cells.iter_mut().filter(|c| !c.is_rest_day()) {
        cell.force(target.state());
    }
}

/// Fresh sheet for `period` with `row_count` default rows.
pub fn regenerate_table(period: Period, row_count: usize) -> SalarySheet {
    SalarySheet {
        period,
        header: build_header(&period),
        rows: (0..row_count).map(|_| build_row(&period)).collect(),
    }
}

/// The whole application state: one period, one table.
#[derive(Debug, Clone, PartialEq)]
pub struct SalarySheet {
    period: Period,
    header: Vec<HeaderDay>,
    rows: Vec<EmployeeRow>,
}

impl SalarySheet {
    pub fn new(period: Period) -> Self {
        regenerate_table(period, DEFAULT_ROWS)
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn header(&self) -> &[HeaderDay] {
        &self.header
    }

    pub fn rows(&self) -> &[EmployeeRow] {
        &self.rows
    }

    /// Switch to `period`, discarding every row.
    pub fn regenerate(&mut self, period: Period, row_count: usize) {
        *self = regenerate_table(period, row_count);
    }

    /// Switch to `period` keeping identity, salary and the marks of days
    /// that exist in both months. Rest-day flags follow the new calendar.
    pub fn resize(&mut self, period: Period) {
        let header = build_header(&period);

        for row in &mut self.rows {
            let old = std::mem::take(&mut row.cells);
            row.cells = header
                .iter()
                .map(|h| {
                    let mut cell = AttendanceCell::new(h.is_rest_day);
                    if let Some(prev) = old.get(h.day as usize - 1) {
                        cell.force(prev.state());
                    }
                    cell
                })
                .collect();
            row.summary = RowSummary::default();
        }

        self.period = period;
        self.header = header;
    }

    pub fn add_row(&mut self) -> usize {
        self.rows.push(build_row(&self.period));
        self.rows.len()
    }

    /// Remove row `index` (1-based).
    pub fn remove_row(&mut self, index: usize) -> AppResult<EmployeeRow> {
        self.check_row(index)?;
        Ok(self.rows.remove(index - 1))
    }

    pub fn row(&self, index: usize) -> AppResult<&EmployeeRow> {
        self.check_row(index)?;
        Ok(&self.rows[index - 1])
    }

    fn row_mut(&mut self, index: usize) -> AppResult<&mut EmployeeRow> {
        self.check_row(index)?;
        Ok(&mut self.rows[index - 1])
    }

    fn check_row(&self, index: usize) -> AppResult<()> {
        if index == 0 || index > self.rows.len() {
            return Err(AppError::RowOutOfRange {
                index,
                rows: self.rows.len(),
            });
        }
        Ok(())
    }

    pub fn set_name(&mut self, index: usize, name: &str) -> AppResult<()> {
        self.row_mut(index)?.name = name.to_string();
        Ok(())
    }

    pub fn set_designation(&mut self, index: usize, designation: &str) -> AppResult<()> {
        self.row_mut(index)?.designation = designation.to_string();
        Ok(())
    }

    /// Store the salary typed by the user; unparseable input becomes 0.
    pub fn set_salary(&mut self, index: usize, input: &str) -> AppResult<f64> {
        let value = parse_salary(input);
        self.row_mut(index)?.full_salary = value;
        Ok(value)
    }

    /// Cycle the cell of `day` (1-based) in row `index`.
    pub fn toggle(&mut self, index: usize, day: u32) -> AppResult<Attendance> {
        let days = self.period.days();
        let row = self.row_mut(index)?;
        let cell = day
            .checked_sub(1)
            .and_then(|i| row.cells.get_mut(i as usize))
            .ok_or(AppError::DayOutOfRange { day, days })?;
        Ok(cell.toggle())
    }

    /// Cycle several days of row `index`. Every day is checked first, so
    /// an out-of-range day leaves the row untouched.
    pub fn toggle_many(&mut self, index: usize, days: &[u32]) -> AppResult<Vec<Attendance>> {
        let total = self.period.days();
        self.check_row(index)?;
        if let Some(&day) = days.iter().find(|&&d| d == 0 || d > total) {
            return Err(AppError::DayOutOfRange { day, days: total });
        }

        days.iter().map(|&day| self.toggle(index, day)).collect()
    }

    pub fn bulk_mark(&mut self, index: usize, target: BulkMark) -> AppResult<()> {
        bulk_mark(self.row_mut(index)?, target);
        Ok(())
    }

    /// Refresh the derived columns of every row.
    pub fn recompute(&mut self) {
        for row in &mut self.rows {
            row.summary = compute_row(row);
        }
    }
}
