use crate::cli::commands::resolve_period;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::table::regenerate_table;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::ui::render::describe_period;
use crate::ui::shell::Shell;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

/// Handle the `sheet` command: an interactive shell over a fresh sheet.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sheet {
        period,
        rows,
        script,
    } = cmd
    {
        let period = resolve_period(period)?;
        let row_count = rows.unwrap_or(cfg.default_rows);
        let sheet = regenerate_table(period, row_count);

        header(&cfg.sheet_title);
        info(describe_period(&period));

        let shell = Shell::new(sheet, cfg.output_path(), &cfg.sheet_title, cfg.default_rows);

        match script {
            Some(file) => {
                let mut reader = BufReader::new(File::open(file)?);
                shell.strict(true).confirm_from_stdin(true).run(&mut reader)?;
            }
            None => {
                let stdin = io::stdin();
                let interactive = stdin.is_terminal();
                if interactive {
                    info("Type `help` for the list of commands.");
                }
                shell.prompt(interactive).run(&mut stdin.lock())?;
            }
        }
    }
    Ok(())
}
