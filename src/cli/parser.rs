use crate::export::ExportFormat;
use crate::models::record::RecordState;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rAttend
/// QR attendance kiosk: marks entry/exit on a shared roster sheet
#[derive(Parser)]
#[command(
    name = "rattend",
    version = env!("CARGO_PKG_VERSION"),
    about = "A QR attendance kiosk: scan student codes and mark entry/exit on a CSV or SQLite roster",
    long_about = None
)]
pub struct Cli {
    /// Override roster path (.csv sheet or SQLite database)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Roster state filter for `list` and `export`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StateFilter {
    Unprocessed,
    Entered,
    Completed,
}

impl From<StateFilter> for RecordState {
    fn from(f: StateFilter) -> Self {
        match f {
            StateFilter::Unprocessed => RecordState::Unprocessed,
            StateFilter::Entered => RecordState::Entered,
            StateFilter::Completed => RecordState::Completed,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty roster
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Scan a QR code from an image and mark entry/exit
    Scan {
        /// Image file (png, jpg, ...) containing the student's QR code
        #[arg(long, value_name = "FILE", conflicts_with = "stdin", required_unless_present = "stdin")]
        image: Option<String>,

        /// Read the encoded image from standard input
        #[arg(long)]
        stdin: bool,
    },

    /// Mark entry/exit for a typed student ID (manual entry)
    Mark {
        /// Student ID exactly as printed on the QR code or ID card
        id: String,
    },

    /// Run the kiosk loop: one student ID or image path per line, until EOF or `quit`
    Kiosk,

    /// List the roster with its attendance state
    List {
        #[arg(long, value_enum, help = "Show only records in this state")]
        state: Option<StateFilter>,
    },

    /// Show today's entries, people present and exits
    Stats,

    /// Export the roster as an attendance report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, help = "Export only records in this state")]
        state: Option<StateFilter>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the roster
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup into a .zip archive
        #[arg(long)]
        compress: bool,

        /// Overwrite the destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log (SQLite rosters)
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Maintain a SQLite roster (migrations, integrity checks, ...)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity and roster consistency")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
