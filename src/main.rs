use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_balance_command, handle_category_command, handle_data_command, handle_init_command,
    handle_prefs_command, handle_report_command, handle_transaction_command,
};
use fintrack::config::{paths::TrackerPaths, settings::Settings};
use fintrack::services::LedgerStore;
use fintrack::storage::JsonFileStorage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Track income and expenses by category",
    long_about = "fintrack records income and expense transactions against categories, \
                  keeps a running balance, and reports where the money goes."
)]
struct Cli {
    /// Data directory (overrides FINTRACK_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the starting balance of a new ledger
    Init {
        /// Starting balance (e.g., "1000" or "1000.00")
        amount: String,
        /// Overwrite the balance even if the ledger is already initialized
        #[arg(long)]
        force: bool,
    },

    /// Show or set the balance
    Balance {
        #[command(subcommand)]
        command: Option<fintrack::cli::BalanceCommands>,
    },

    /// Transaction management commands
    #[command(subcommand, name = "txn", alias = "transaction")]
    Transaction(fintrack::cli::TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(fintrack::cli::CategoryCommands),

    /// Reports and analytics
    #[command(subcommand)]
    Report(fintrack::cli::ReportCommands),

    /// Export, import and maintenance of ledger data
    #[command(subcommand)]
    Data(fintrack::cli::DataCommands),

    /// User preferences
    #[command(subcommand)]
    Prefs(fintrack::cli::PrefsCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    fintrack::init_tracing();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    // Open the ledger
    let storage = JsonFileStorage::new(paths.clone())?;
    let mut store = LedgerStore::open(storage)?;

    match cli.command {
        Some(Commands::Init { amount, force }) => {
            handle_init_command(&mut store, &amount, force)?;
            settings.save(&paths)?;
        }
        Some(Commands::Balance { command }) => {
            handle_balance_command(&mut store, command)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut store, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Data(cmd)) => {
            handle_data_command(&mut store, &paths, &settings, cmd)?;
        }
        Some(Commands::Prefs(cmd)) => {
            handle_prefs_command(&mut store, cmd)?;
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data file:        {}", paths.store_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Page size:     {}", settings.page_size);
            println!("  Date format:   {}", settings.date_format);
            println!("  Pretty export: {}", settings.pretty_export);
        }
        None => {
            println!("fintrack - income and expense tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            if !store.balance().is_initialized {
                println!("Run 'fintrack init <amount>' to set your starting balance.");
            }
        }
    }

    Ok(())
}
