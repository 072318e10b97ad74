use crate::export::ExportFormat;
use crate::models::hours::HoursEntry;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPayroll
#[derive(Parser)]
#[command(
    name = "rpayroll",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small payroll CLI: employees, overtime, FICA withholding and printable time cards",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a separate payroll)
    #[arg(global = true, long = "data", value_name = "DIR")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_hours_arg(s: &str) -> Result<HoursEntry, String> {
    HoursEntry::parse(s).map_err(|e| e.to_string())
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory, stores and configuration
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

    /// Add an employee to the directory
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Hourly wage (default: `default_hourly_wage` from the config)
        #[arg(long)]
        wage: Option<f64>,
    },

    /// Change name, e-mail or wage of an employee
    Edit {
        id: u32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        wage: Option<f64>,
    },

    /// Remove an employee (ledger records are kept)
    Del { id: u32 },

    /// List employees
    List,

    /// Calculate payroll for an employee
    Run {
        id: u32,

        /// Hours entry, repeatable; without it the hours are asked interactively
        #[arg(
            long = "hours",
            value_name = "H",
            value_parser = parse_hours_arg,
            allow_negative_numbers = true
        )]
        hours: Vec<HoursEntry>,

        /// Pay date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Save the summary to the ledger without asking
        #[arg(long)]
        save: bool,

        /// Also write the time card as PDF
        #[arg(long, value_name = "FILE")]
        timecard: Option<String>,

        /// Overwrite the time card file without asking
        #[arg(long)]
        force: bool,
    },

    /// List saved payroll summaries
    History {
        #[arg(long, short = 'e', value_name = "ID")]
        employee: Option<u32>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (A:B)"
        )]
        range: Option<String>,
    },

    /// Print or save the time card of a ledger record
    Timecard {
        /// Record number as shown by `history`
        index: usize,

        /// Write a PDF instead of printing text
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long)]
        force: bool,
    },

    /// Export payroll records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'e', value_name = "ID")]
        employee: Option<u32>,

        #[arg(long)]
        force: bool,
    },

    /// Archive the data files into a zip
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print the internal audit log")]
        print: bool,
    },
}
