pub mod calendar;
pub mod config;
pub mod export;
pub mod init;
pub mod sheet;

use crate::core::calendar::Period;
use crate::errors::AppResult;

/// Period given with `--period`, or the current month.
pub(crate) fn resolve_period(period: &Option<String>) -> AppResult<Period> {
    match period {
        Some(p) => Period::parse(p),
        None => Ok(Period::current()),
    }
}
