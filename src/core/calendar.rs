//! Calendar arithmetic for a month of the attendance sheet.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Local, Month, NaiveDate, Weekday};
use std::collections::BTreeSet;
use std::fmt;

/// Weekday marked as rest day in every sheet.
pub const REST_DAY: Weekday = Weekday::Sun;

/// Years offered by the period selector.
pub const YEAR_MIN: i32 = 2025;
pub const YEAR_MAX: i32 = 2050;

/// Number of days in `month` of `year`, leap years included.
///
/// Returns 0 for years chrono cannot represent.
pub fn days_in_month(year: i32, month: Month) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1);
    let next = match month {
        Month::December => year
            .checked_add(1)
            .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)),
        m => NaiveDate::from_ymd_opt(year, m.number_from_month() + 1, 1),
    };

    match (first, next) {
        (Some(a), Some(b)) => (b - a).num_days() as u32,
        _ => 0,
    }
}

/// Day numbers of `month` falling on [`REST_DAY`].
pub fn rest_days(year: i32, month: Month) -> BTreeSet<u32> {
    (1..=days_in_month(year, month))
        .filter(|&d| {
            NaiveDate::from_ymd_opt(year, month.number_from_month(), d)
                .is_some_and(|date| date.weekday() == REST_DAY)
        })
        .collect()
}

/// The (year, month) pair driving the sheet layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub month: Month,
}

impl Period {
    /// Build a period, rejecting years outside the selector range.
    pub fn new(year: i32, month: Month) -> AppResult<Self> {
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(AppError::InvalidPeriod(format!(
                "year {year} outside {YEAR_MIN}..={YEAR_MAX}"
            )));
        }
        Ok(Self { year, month })
    }

    /// Current month, with the year clamped into the selector range.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        let month = Month::try_from(today.month() as u8).unwrap_or(Month::January);
        Self {
            year: today.year().clamp(YEAR_MIN, YEAR_MAX),
            month,
        }
    }

    /// Parse `YYYY-MM` or `YYYY-<month name>` (e.g. `2025-04`, `2025-april`).
    pub fn parse(s: &str) -> AppResult<Self> {
        let invalid = || AppError::InvalidPeriod(s.to_string());

        let (year_raw, month_raw) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year_raw.trim().parse().map_err(|_| invalid())?;

        let month_raw = month_raw.trim();
        let month = match month_raw.parse::<u8>() {
            Ok(n) => Month::try_from(n).map_err(|_| invalid())?,
            Err(_) => month_raw.parse::<Month>().map_err(|_| invalid())?,
        };

        Self::new(year, month)
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn rest_days(&self) -> BTreeSet<u32> {
        rest_days(self.year, self.month)
    }

    pub fn weekday_of(&self, day: u32) -> Option<Weekday> {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), day)
            .map(|d| d.weekday())
    }

    /// Human label, e.g. "April 2025".
    pub fn label(&self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month.number_from_month())
    }
}
