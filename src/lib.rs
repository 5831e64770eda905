//! salarysheet library root.
//! Exposes the CLI parser, the high-level run() function and the sheet model.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command),
        Commands::Sheet { .. } => cli::commands::sheet::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once; `init` must work even when the file is broken.
    let mut cfg = match &cli.command {
        Commands::Init => Config::default(),
        _ => Config::load()?,
    };

    if let Some(dir) = &cli.out_dir {
        cfg.output_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}
