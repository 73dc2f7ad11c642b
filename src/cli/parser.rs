use crate::export::ExportFormat;
use crate::models::grouping::Grouping;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftboard
#[derive(Parser)]
#[command(
    name = "shiftboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A read-only shift dashboard: occupancy and needed/worked/overbooked hours per angel type and shift type",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database schema and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print recent rows of the log_entries table
    Log {
        #[arg(long = "print", help = "Print rows from the log_entries table")]
        print: bool,

        #[arg(long = "limit", default_value_t = 20, help = "Number of rows to print")]
        limit: usize,
    },

    /// List shifts with their occupancy per angel type
    Shifts {
        #[arg(long = "ongoing", help = "Only shifts that have not ended yet")]
        ongoing: bool,

        #[arg(
            long = "shift-type",
            value_name = "ID",
            help = "Only shifts of this shift type (repeatable)"
        )]
        shift_types: Vec<i64>,

        #[arg(long = "date", value_name = "YYYY-MM-DD", help = "Only shifts starting on this day")]
        date: Option<String>,
    },

    /// Needed, worked and overbooked hours per category
    Stats {
        #[arg(long = "ongoing", help = "Only shifts that have not ended yet")]
        ongoing: bool,

        #[arg(long = "by", value_enum, default_value = "all")]
        by: Grouping,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },

    /// Re-render the stats whenever the schedule changes
    Watch {
        #[arg(long = "ongoing", help = "Only shifts that have not ended yet")]
        ongoing: bool,

        #[arg(long = "by", value_enum, default_value = "all")]
        by: Grouping,

        #[arg(
            long = "interval",
            value_name = "SECS",
            help = "Polling interval (default: refresh_interval_secs from config)"
        )]
        interval: Option<u64>,

        /// Stop after this many polls
        #[arg(long = "iterations", hide = true)]
        iterations: Option<u64>,
    },

    /// Export the stats report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "ongoing", help = "Only shifts that have not ended yet")]
        ongoing: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
