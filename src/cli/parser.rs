use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for salarysheet
#[derive(Parser)]
#[command(
    name = "salarysheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Monthly attendance and salary sheet: mark attendance, pro-rate salaries, export XLSX/PDF/DOC",
    long_about = None
)]
pub struct Cli {
    /// Override the export directory (must be absolute)
    #[arg(global = true, long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the days and rest days of a month
    Calendar {
        #[arg(long, short, help = "Month as YYYY-MM (default: current month)")]
        period: Option<String>,
    },

    /// Open an attendance sheet and edit it with shell commands
    Sheet {
        #[arg(long, short, help = "Month as YYYY-MM (default: current month)")]
        period: Option<String>,

        #[arg(long, help = "Number of employee rows (default from config)")]
        rows: Option<usize>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Read commands from FILE instead of stdin"
        )]
        script: Option<String>,
    },

    /// Build a sheet, replay an optional command script and export it
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, short, help = "Month as YYYY-MM (default: current month)")]
        period: Option<String>,

        #[arg(long, help = "Number of employee rows (default from config)")]
        rows: Option<usize>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Shell commands applied before exporting"
        )]
        script: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite existing files without asking")]
        force: bool,
    },
}
