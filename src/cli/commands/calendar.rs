use crate::cli::commands::resolve_period;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::render::render_calendar;

/// Handle the `calendar` command: print days and rest days of a month.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Calendar { period } = cmd {
        let period = resolve_period(period)?;
        print!("{}", render_calendar(&period));
    }
    Ok(())
}
