use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for trackerpane
/// Drives the issue/activity pane against a workbook store
#[derive(Parser)]
#[command(
    name = "trackerpane",
    version = env!("CARGO_PKG_VERSION"),
    about = "Issue tracker companion pane: show and log activity for the selected tracker row",
    long_about = None
)]
pub struct Cli {
    /// Override workbook store path (useful for tests or a second workbook)
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
    /// Create the workbook store and the configuration file
    Init {
        /// Value stored in the `Report` property (marks the workbook as a tracker)
        #[arg(long)]
        report: Option<String>,
    },

    /// Print the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Replace the contents of a sheet with a CSV file
    Import {
        /// Sheet name, e.g. "IT Tracker" or "Activity"
        #[arg(long)]
        sheet: String,

        /// CSV file; every line is a sheet row starting at row 1
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Show or set a custom document property
    Property {
        #[arg(long)]
        name: String,

        /// New value; omit to print the current one
        #[arg(long)]
        value: Option<String>,
    },

    /// Select a row (1-based, as shown by the spreadsheet) and show the pane
    Select {
        #[arg(long)]
        row: usize,

        /// Sheet to activate; defaults to the tracker sheet
        #[arg(long)]
        sheet: Option<String>,
    },

    /// Show the pane for the current selection
    Show,

    /// Log a new activity for the selected issue
    Add {
        /// What was done
        #[arg(long = "desc")]
        description: String,

        /// Activity date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Export the selected issue's activity
    Export {
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
