use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use thuchi::audit::AuditLogger;
use thuchi::cli::{
    handle_budget_command, handle_categories_command, handle_config_command,
    handle_history_command, handle_report_command, handle_shortcut_command,
    handle_storage_command, handle_transaction_command, BudgetCommands, ConfigUpdate,
    ReportCommands, ShortcutCommands, TransactionCommands,
};
use thuchi::config::{paths::LedgerPaths, settings::Settings};
use thuchi::events::{EventBus, EventListener};
use thuchi::storage::Storage;

/// Environment variable holding the log filter
const LOG_ENV: &str = "THUCHI_LOG";

#[derive(Parser)]
#[command(
    name = "thuchi",
    author = "Kaylee Beyene",
    version,
    about = "Quick-entry income and expense tracker",
    long_about = "thuchi records income and expenses from short free-text lines \
                  such as \"Cơm trưa. 35k\", guesses the category from the note, \
                  and reports spending per category and against a daily food limit."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Report(ReportCommands),

    #[command(flatten)]
    Budget(BudgetCommands),

    /// Shortcut management commands
    #[command(subcommand, alias = "sc")]
    Shortcut(ShortcutCommands),

    /// List the available categories
    Categories,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths, or change settings
    Config {
        /// Separator between note and amount in quick entry
        #[arg(long)]
        separator: Option<char>,
        /// First day of the week (0 = Sunday ... 6 = Saturday)
        #[arg(long)]
        first_day_of_week: Option<u8>,
        /// Date display format (strftime)
        #[arg(long)]
        date_format: Option<String>,
    },

    /// Show stored data size per key
    Storage {
        /// Reset the daily limit and currency to their defaults
        #[arg(long)]
        reset_preferences: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::open(&paths)?;

    let listeners: Vec<Box<dyn EventListener>> = vec![Box::new(AuditLogger::new(paths.audit_log()))];
    let events = EventBus::spawn(listeners)?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &events, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &events, cmd)?;
        }
        Some(Commands::Shortcut(cmd)) => {
            handle_shortcut_command(&storage, &events, &settings, cmd)?;
        }
        Some(Commands::Categories) => handle_categories_command()?,
        Some(Commands::History { count }) => handle_history_command(&paths, count)?,
        Some(Commands::Config {
            separator,
            first_day_of_week,
            date_format,
        }) => {
            let update = ConfigUpdate {
                separator,
                first_day_of_week,
                date_format,
            };
            handle_config_command(&paths, &settings, update)?;
        }
        Some(Commands::Storage { reset_preferences }) => {
            handle_storage_command(&storage, reset_preferences)?;
        }
        None => {
            println!("thuchi - quick-entry income and expense tracker");
            println!();
            println!("Run 'thuchi add \"Cơm trưa. 35k\"' to record an expense.");
            println!("Run 'thuchi --help' for usage information.");
        }
    }

    Ok(())
}
