use anyhow::Result;
use clap::{Parser, Subcommand};

use penny_cli::cli::{
    handle_generate, handle_report_command, handle_transaction_command, parse_range,
    ReportCommands, TransactionCommands,
};
use penny_cli::config::{PennyPaths, Settings};
use penny_cli::reports::filter_by_range;
use penny_cli::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "penny",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "penny tracks income and expense transactions in a plain CSV \
                  ledger, summarizes them by date range, and renders charts in \
                  the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive chart dashboard
    #[command(alias = "ui")]
    Tui {
        /// Start date (dd-mm-yyyy)
        #[arg(long)]
        from: Option<String>,
        /// End date (dd-mm-yyyy)
        #[arg(long)]
        to: Option<String>,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Report commands (summary, monthly, breakdown)
    #[command(subcommand)]
    Report(ReportCommands),

    /// Generate a sample ledger for demos
    Generate {
        /// Number of months of data to generate
        #[arg(short, long)]
        months: Option<u32>,
        /// Replace an existing ledger
        #[arg(long)]
        force: bool,
    },

    /// Initialize the ledger and settings files
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PennyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = LedgerStore::new(paths.ledger_file());

    match cli.command {
        Some(Commands::Tui { from, to }) => {
            let ledger = store.load()?;
            if ledger.skipped_rows > 0 {
                eprintln!("Warning: skipped {} malformed row(s)", ledger.skipped_rows);
            }
            let (start, end) = parse_range(from.as_deref(), to.as_deref())?;
            let filtered = filter_by_range(&ledger.transactions, start, end)
                .cloned()
                .collect();
            penny_cli::tui::run(filtered)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&store, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Generate { months, force }) => {
            handle_generate(&store, &settings, months, force)?;
        }
        Some(Commands::Init) => {
            println!("Initializing penny at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            store.initialize()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Ledger file: {}", store.path().display());
            println!("Run 'penny txn add 1000 income -m salary' to record a transaction.");
        }
        Some(Commands::Config) => {
            println!("penny configuration");
            println!("===================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!(
                "  Default generate months: {}",
                settings.default_generate_months
            );
        }
        None => {
            println!("penny - Terminal-based personal finance tracker");
            println!();
            println!("Run 'penny --help' for usage information.");
            println!("Run 'penny tui' to launch the chart dashboard.");
        }
    }

    Ok(())
}
