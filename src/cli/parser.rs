use crate::export::ExportFormat;
use crate::models::day_type::{DayType, GroupBy};
use clap::{Parser, Subcommand};

/// Command-line interface definition for trackpie
/// CLI application to break down tracked time by project and tag
#[derive(Parser)]
#[command(
    name = "trackpie",
    version = env!("CARGO_PKG_VERSION"),
    about = "Normalize time-tracking exports (xlsx/csv/pdf) and break down hours by project and tag",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Suppress informational messages
    #[arg(global = true, long, short = 'q')]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
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

    /// Convert a PDF report into the flat 8-column table
    Convert {
        /// PDF report to read
        input: String,

        #[arg(long, value_name = "FILE", help = "Output file")]
        file: String,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Show the hour breakdown of an export (the dashboard pies)
    Summary {
        /// Export to read (xlsx/xls/ods/csv/pdf); defaults to the first .xlsx in `source_dir`
        source: Option<String>,

        /// Date range to include.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-09")
        /// - YYYY-MM-DD           → specific day  (e.g. "2025-09-05")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY-MM:YYYY-MM      → month range   (e.g. "2025-08:2025-09")
        /// - YYYY-MM-DD:YYYY-MM-DD→ day range     (e.g. "2025-08-28:2025-09-15")
        ///
        /// Special value:
        /// - all                   → no date filtering (undated rows included)
        ///
        /// If omitted, the full span of dated rows is used.
        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, value_enum, default_value = "project", help = "Main distribution")]
        by: GroupBy,

        #[arg(long, help = "Project for the tags pie (default: first project)")]
        project: Option<String>,

        #[arg(long, help = "Show the projects pie for this tag")]
        tag: Option<String>,

        #[arg(long = "day-type", value_enum, default_value = "both")]
        day_type: DayType,

        #[arg(long, help = "Show hours per day instead of total hours")]
        average: bool,

        #[arg(long, help = "Print the pie series as JSON")]
        json: bool,
    },
}
