//! Shortcut CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_shortcut_list;
use crate::error::LedgerResult;
use crate::events::EventBus;
use crate::services::{ShortcutService, TransactionService};
use crate::storage::Storage;

use super::{kind_from_flag, parse_amount_arg, parse_date_arg};

/// Shortcut subcommands
#[derive(Subcommand)]
pub enum ShortcutCommands {
    /// List saved shortcuts
    List,
    /// Save a new shortcut
    Add {
        /// Shortcut name, used as the note of recorded transactions
        name: String,
        /// Amount in whole currency units
        amount: String,
        /// Category id
        #[arg(short, long)]
        category: String,
        /// Record as income instead of expense
        #[arg(short, long)]
        income: bool,
    },
    /// Record a transaction from a shortcut
    Use {
        /// Shortcut ID, ID prefix or name
        shortcut: String,
        /// Transaction date (YYYY-MM-DD or RFC 3339), defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a shortcut
    Delete {
        /// Shortcut ID, ID prefix or name
        shortcut: String,
    },
}

/// Handle a shortcut command
pub fn handle_shortcut_command(
    storage: &Storage,
    events: &EventBus,
    settings: &Settings,
    cmd: ShortcutCommands,
) -> LedgerResult<()> {
    let service = ShortcutService::new(storage, events);
    let currency = storage.preferences.currency()?;

    match cmd {
        ShortcutCommands::List => {
            print!("{}", format_shortcut_list(&service.list()?, currency));
        }

        ShortcutCommands::Add {
            name,
            amount,
            category,
            income,
        } => {
            let amount = parse_amount_arg(&amount)?;
            let shortcut = service.create(
                &name,
                amount,
                &category.trim().to_lowercase(),
                kind_from_flag(income),
            )?;
            println!(
                "Created shortcut: {} ({}) {}",
                shortcut.name,
                shortcut.id.short(),
                currency.format(shortcut.amount)
            );
        }

        ShortcutCommands::Use { shortcut, date } => {
            let shortcut = service.get(&shortcut)?;
            let date = date.as_deref().map(parse_date_arg).transpose()?;

            let txn = TransactionService::new(storage, events).create_from_shortcut(&shortcut, date)?;
            println!(
                "Recorded {}: {} on {}",
                shortcut.name,
                currency.format(txn.amount),
                txn.date.format(&settings.date_format)
            );
        }

        ShortcutCommands::Delete { shortcut } => {
            let deleted = service.delete(&shortcut)?;
            println!("Deleted shortcut: {}", deleted.name);
        }
    }

    Ok(())
}
