use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory and a configuration file with defaults.
/// With `--test` nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing salarysheet…");

    let cfg = Config::init_all(cli.test)?;

    if !cli.test {
        success(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Export dir  : {}", cfg.output_dir));
    info(format!("Default rows: {}", cfg.default_rows));

    success("salarysheet initialization completed!");
    Ok(())
}
