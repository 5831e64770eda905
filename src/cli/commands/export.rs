use crate::cli::commands::resolve_period;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::table::regenerate_table;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::shell::Shell;
use std::fs::File;
use std::io::{self, BufReader};

/// Handle the `export` command: build the sheet, replay the script, export.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        period,
        rows,
        script,
        force,
    } = cmd
    {
        let period = resolve_period(period)?;
        let row_count = rows.unwrap_or(cfg.default_rows);

        let mut shell = Shell::new(
            regenerate_table(period, row_count),
            cfg.output_path(),
            &cfg.sheet_title,
            cfg.default_rows,
        )
        .strict(true)
        .confirm_from_stdin(true);

        if let Some(file) = script {
            let mut reader = BufReader::new(File::open(file)?);
            shell.run(&mut reader)?;
        }

        ExportLogic::export(
            shell.sheet_mut(),
            *format,
            &cfg.output_path(),
            &cfg.sheet_title,
            *force,
            &mut io::stdin().lock(),
        )?;
    }
    Ok(())
}
