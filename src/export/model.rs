// src/export/model.rs

use crate::core::calendar::REST_DAY;
use crate::core::table::{EmployeeRow, SalarySheet};
use crate::utils::money;
use chrono::Weekday;
use serde::Serialize;

/// Identity and computed columns preceding the day columns.
pub(crate) const FIXED_HEADERS: [&str; 7] = [
    "Employee Name",
    "Designation",
    "Full Salary",
    "Present",
    "Absent",
    "Half Day",
    "Adjusted Salary",
];

/// Columns of `FIXED_HEADERS` holding numbers: salary, counts, adjusted salary.
pub(crate) const NUMERIC_COLUMNS: std::ops::RangeInclusive<usize> = 2..=6;

pub(crate) fn is_numeric_column(col: usize) -> bool {
    NUMERIC_COLUMNS.contains(&col)
}

/// Flat, fully computed copy of the sheet handed to every exporter.
#[derive(Serialize, Clone, Debug)]
pub struct SheetSnapshot {
    pub title: String,
    pub period: String,
    pub headers: Vec<String>,
    /// One flag per header: true on rest-day columns.
    pub rest_columns: Vec<bool>,
    pub rows: Vec<Vec<String>>,
}

impl SheetSnapshot {
    /// Build the snapshot. Callers must have run `recompute` first.
    pub fn from_sheet(sheet: &SalarySheet, title: &str) -> Self {
        let mut headers: Vec<String> = FIXED_HEADERS.iter().map(|h| h.to_string()).collect();
        let mut rest_columns = vec![false; FIXED_HEADERS.len()];

        for h in sheet.header() {
            if h.is_rest_day {
                headers.push(format!("{} {}", h.day, weekday_name(REST_DAY)));
            } else {
                headers.push(h.day.to_string());
            }
            rest_columns.push(h.is_rest_day);
        }

        Self {
            title: format!("{} - {}", title, sheet.period().label()),
            period: sheet.period().to_string(),
            headers,
            rest_columns,
            rows: sheet.rows().iter().map(row_to_cells).collect(),
        }
    }

    pub fn day_columns(&self) -> std::ops::Range<usize> {
        FIXED_HEADERS.len()..self.headers.len()
    }
}

/// Full English weekday name, as shown under rest-day headers.
pub(crate) fn weekday_name(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub(crate) fn row_to_cells(row: &EmployeeRow) -> Vec<String> {
    let mut out = vec![
        row.name.clone(),
        row.designation.clone(),
        money(row.full_salary),
        row.summary.present.to_string(),
        row.summary.absent.to_string(),
        row.summary.half.to_string(),
        money(row.summary.adjusted_salary),
    ];
    out.extend(row.cells.iter().map(|c| c.glyph().to_string()));
    out
}
