use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftdesk
/// Terminal admin console for workforce time tracking and shift scheduling
#[derive(Parser)]
#[command(
    name = "shiftdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Workforce time tracking and shift scheduling console for the shiftdesk REST API",
    long_about = None
)]
pub struct Cli {
    /// Override the backend base URL
    #[arg(global = true, long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the session token file
    #[arg(global = true, long = "token-file", value_name = "PATH")]
    pub token_file: Option<String>,

    /// Use another configuration file
    #[arg(global = true, long = "config", value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summary cards and the workers currently clocked in
    Dashboard,

    /// Manage workers
    Workers {
        #[command(subcommand)]
        action: WorkerCmd,
    },

    /// List, plan and edit shifts
    Shifts {
        #[command(subcommand)]
        action: ShiftCmd,
    },

    /// Clock in/out and breaks
    Track {
        #[command(subcommand)]
        action: TrackCmd,
    },

    /// Spreadsheet export/import and CSV transfer
    Reports {
        #[command(subcommand)]
        action: ReportCmd,
    },

    /// Export time records to a local file
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

        #[arg(long, value_name = "WORKER_ID")]
        worker: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the stored session token
    Auth {
        #[command(subcommand)]
        action: AuthCmd,
    },

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
}

#[derive(Subcommand)]
pub enum WorkerCmd {
    /// List workers (active only unless --all)
    List {
        #[arg(long)]
        all: bool,
    },

    Show {
        id: i64,
    },

    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        position: Option<String>,

        #[arg(long = "rate", help = "Hourly rate")]
        rate: Option<f64>,
    },

    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        position: Option<String>,

        #[arg(long = "rate")]
        rate: Option<f64>,

        #[arg(long, value_name = "BOOL")]
        active: Option<bool>,
    },

    /// Deactivate a worker
    Del {
        id: i64,
    },

    /// Weekly and monthly totals
    Stats {
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ShiftCmd {
    List {
        #[arg(long, value_name = "WORKER_ID")]
        worker: Option<i64>,

        #[arg(long, help = "scheduled | completed | cancelled")]
        status: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        from: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        to: Option<String>,
    },

    Show {
        id: i64,
    },

    /// Shifts scheduled for today
    Today,

    /// Next shifts of one worker
    Upcoming {
        worker: i64,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// Month calendar (Sunday-first)
    Calendar {
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,

        #[arg(long, value_name = "WORKER_ID")]
        worker: Option<i64>,

        #[arg(long)]
        status: Option<String>,
    },

    Add {
        #[arg(long, value_name = "WORKER_ID")]
        worker: i64,

        #[arg(long, value_name = "YYYY-MM-DD")]
        date: String,

        #[arg(long, value_name = "HH:MM")]
        start: String,

        #[arg(long, value_name = "HH:MM")]
        end: String,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long, value_name = "PATTERN", help = "daily | weekly | monthly")]
        recurring: Option<String>,

        #[arg(long, help = "Ask before submitting")]
        confirm: bool,
    },

    Edit {
        id: i64,

        #[arg(long, value_name = "WORKER_ID")]
        worker: Option<i64>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,

        #[arg(long, value_name = "HH:MM")]
        start: Option<String>,

        #[arg(long, value_name = "HH:MM")]
        end: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long, value_name = "PATTERN")]
        recurring: Option<String>,

        #[arg(long, conflicts_with = "recurring", help = "Make the shift a one-off")]
        no_recurring: bool,

        #[arg(long, help = "Ask before submitting")]
        confirm: bool,
    },

    Del {
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum TrackCmd {
    /// Workers currently clocked in
    Status,

    ClockIn {
        worker: i64,
    },

    ClockOut {
        record: i64,
    },

    /// Start the break, or end it if one is running
    Break {
        record: i64,
    },

    Records {
        #[arg(long, value_name = "WORKER_ID")]
        worker: Option<i64>,

        #[arg(long)]
        skip: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// Open record of one worker
    Worker {
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ReportCmd {
    /// Push shift data to a spreadsheet
    SheetsExport {
        #[arg(long, help = "Leave empty to create a new spreadsheet")]
        spreadsheet_id: Option<String>,

        #[arg(long)]
        sheet_name: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        from: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        to: Option<String>,

        #[arg(long = "worker", value_name = "WORKER_ID")]
        workers: Vec<i64>,
    },

    /// Pull shifts from a spreadsheet
    SheetsImport {
        #[arg(long)]
        spreadsheet_id: String,

        #[arg(long)]
        sheet_name: Option<String>,

        #[arg(long = "range", value_name = "A1_RANGE")]
        range: Option<String>,
    },

    /// Download the server CSV export
    Csv {
        #[arg(long, default_value = ".")]
        dir: String,

        #[arg(long, value_name = "WORKER_ID")]
        worker: Option<i64>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        from: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        to: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Upload a CSV file for import
    Upload {
        file: String,
    },
}

#[derive(Subcommand)]
pub enum AuthCmd {
    /// Store a bearer token
    SetToken {
        token: String,
    },

    /// Forget the stored token
    Clear,

    Status,
}
