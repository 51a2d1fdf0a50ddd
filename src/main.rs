use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_ledger::cli::{
    handle_add_command, handle_export_command, handle_new_command, handle_open_command,
    handle_salary_command, handle_show_command, handle_status_command, handle_summary_command,
    ExportFormat, SalaryCommands,
};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Month-grouped personal expense ledger backed by a plain CSV file",
    long_about = "Records dated expenses in a CSV file you choose, shows them grouped \
                  by month with a running balance against your monthly salary, and \
                  exports them to a spreadsheet."
)]
struct Cli {
    /// Log level; RUST_LOG overrides it
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    /// Use this CSV file instead of the bound one
    #[arg(short, long, global = true, env = "EXPENSE_LEDGER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new CSV file and bind it
    #[command(alias = "create")]
    New {
        /// Path of the new file (prompted for when omitted)
        path: Option<PathBuf>,
        /// Overwrite an existing file without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Open an existing CSV file and bind it
    #[command(alias = "sync")]
    Open {
        /// Path of the file (prompted for when omitted)
        path: Option<PathBuf>,
    },

    /// Record an expense
    Add {
        /// Expense date (YYYY-MM-DD), not after today
        date: String,
        /// Amount (e.g., "100" or "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Monthly salary commands
    #[command(subcommand)]
    Salary(SalaryCommands),

    /// Show expenses grouped by month
    Show {
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// One line per month: salary, spent, remaining
    Summary,

    /// Export expenses to a spreadsheet or JSON
    Export {
        /// Output file path (defaults to expenses_report.xlsx)
        output: Option<PathBuf>,

        /// Export format
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show configuration paths and the bound file
    Status,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = LedgerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let file = cli.file.as_deref();

    match cli.command {
        Some(Commands::New { path, yes }) => {
            handle_new_command(&paths, &mut settings, path, yes)?;
        }
        Some(Commands::Open { path }) => {
            handle_open_command(&paths, &mut settings, path)?;
        }
        Some(Commands::Add { date, amount }) => {
            handle_add_command(&settings, file, &date, &amount)?;
        }
        Some(Commands::Salary(cmd)) => {
            handle_salary_command(&settings, file, cmd)?;
        }
        Some(Commands::Show { month }) => {
            handle_show_command(&settings, file, month.as_deref())?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&settings, file)?;
        }
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => {
            handle_export_command(&settings, file, output, format, pretty)?;
        }
        Some(Commands::Status) => {
            handle_status_command(&paths, &settings, file)?;
        }
        None => {
            println!("expenses - month-grouped expense ledger");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses new' to create a CSV file.");
        }
    }

    Ok(())
}

/// Log to stderr at `level` for this crate, unless RUST_LOG is set
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "expense_ledger={},{}={}",
            level,
            env!("CARGO_CRATE_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
