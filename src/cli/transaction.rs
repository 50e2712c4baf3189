//! Transaction CLI commands
//!
//! Quick entry (`add`, `bulk`), listing and single-record edits.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{LedgerError, LedgerResult};
use crate::events::EventBus;
use crate::models::TransactionType;
use crate::parser::LineParser;
use crate::services::{TransactionEdit, TransactionService};
use crate::storage::Storage;

use super::{
    kind_from_flag, parse_amount_arg, parse_category_arg, parse_date_arg, PeriodArgs,
};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction from a quick-entry line, e.g. "Cơm trưa. 35k"
    Add {
        /// Note followed by the amount
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Record as income instead of expense
        #[arg(short, long)]
        income: bool,
        /// Category used when no keyword in the note matches
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD or RFC 3339), defaults to now
        #[arg(short, long)]
        date: Option<String>,
        /// Separator between note and amount
        #[arg(short, long)]
        separator: Option<char>,
    },
    /// Record one transaction per line, read from a file or stdin
    Bulk {
        /// Read lines from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Record as income instead of expense
        #[arg(short, long)]
        income: bool,
        /// Category used when no keyword in a note matches
        #[arg(short, long)]
        category: Option<String>,
        /// Separator between note and amount
        #[arg(short, long)]
        separator: Option<char>,
    },
    /// List transactions, newest entry first
    List {
        #[command(flatten)]
        period: PeriodArgs,
        /// Only this category id
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID or ID prefix
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID or ID prefix
        id: String,
        /// New note
        #[arg(short, long)]
        note: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category id
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD or RFC 3339)
        #[arg(short, long)]
        date: Option<String>,
        /// New type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID or ID prefix
        id: String,
    },
    /// Delete every transaction
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    events: &EventBus,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let service = TransactionService::new(storage, events);
    let currency = storage.preferences.currency()?;

    match cmd {
        TransactionCommands::Add {
            text,
            income,
            category,
            date,
            separator,
        } => {
            let parser = LineParser::new(separator.unwrap_or(settings.separator));
            let kind = kind_from_flag(income);
            let current = category.as_deref().map(parse_category_arg).transpose()?;
            let date = date.as_deref().map(parse_date_arg).transpose()?;

            let txn = service.create_from_line(&parser, &text.join(" "), kind, current, date)?;

            println!("Created transaction:");
            println!("  ID:       {}", txn.id);
            println!("  Date:     {}", txn.date.format(&settings.date_format));
            println!("  Amount:   {}", currency.format(txn.amount));
            println!("  Category: {}", txn.category().name());
            if !txn.note.is_empty() {
                println!("  Note:     {}", txn.note);
            }
        }

        TransactionCommands::Bulk {
            file,
            income,
            category,
            separator,
        } => {
            let text = match file {
                Some(path) => fs::read_to_string(&path).map_err(|e| {
                    LedgerError::Io(format!("Failed to read {}: {}", path.display(), e))
                })?,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .map_err(|e| LedgerError::Io(format!("Failed to read stdin: {}", e)))?;
                    buf
                }
            };

            let parser = LineParser::new(separator.unwrap_or(settings.separator));
            let current = category.as_deref().map(parse_category_arg).transpose()?;
            let outcome = service.create_bulk(&parser, &text, kind_from_flag(income), current)?;

            for txn in &outcome.created {
                println!(
                    "  + {:<24} {:>16}  {}",
                    txn.note,
                    currency.format(txn.amount),
                    txn.category().name()
                );
            }
            println!(
                "Created {} transaction(s), skipped {} line(s) without an amount",
                outcome.created.len(),
                outcome.skipped
            );
        }

        TransactionCommands::List {
            period,
            category,
            limit,
        } => {
            let filter = period.to_filter()?;
            let now = Local::now().fixed_offset();
            let mut transactions = service.list(&filter, &now, settings.week_start())?;

            if let Some(cat) = &category {
                let cat = parse_category_arg(cat)?;
                transactions.retain(|t| t.category == cat.id());
            }
            let total = transactions.len();
            transactions.truncate(limit);

            print!(
                "{}",
                format_transaction_list(&transactions, currency, &settings.date_format)
            );
            println!("\nShowing {} of {} transactions ({})", transactions.len(), total, filter);
        }

        TransactionCommands::Show { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| LedgerError::transaction_not_found(&id))?;
            print!("{}", format_transaction_details(&txn, currency));
        }

        TransactionCommands::Edit {
            id,
            note,
            amount,
            category,
            date,
            kind,
        } => {
            let edit = TransactionEdit {
                note,
                amount: amount.as_deref().map(parse_amount_arg).transpose()?,
                category: category.map(|c| c.trim().to_lowercase()),
                date: date.as_deref().map(parse_date_arg).transpose()?,
                kind,
            };
            if edit.is_empty() {
                return Err(LedgerError::Validation(
                    "Nothing to change. Pass --note, --amount, --category, --date or --type".into(),
                ));
            }

            let updated = service.edit(&id, edit)?;
            println!("Updated transaction: {}", updated.id);
            print!("{}", format_transaction_details(&updated, currency));
        }

        TransactionCommands::Delete { id } => {
            let deleted = service.delete(&id)?;
            println!(
                "Deleted transaction: {} ({} {})",
                deleted.id.short(),
                deleted.day(),
                currency.format(deleted.amount)
            );
        }

        TransactionCommands::Clear { force } => {
            let count = storage.transactions.count()?;
            if !force {
                println!("About to delete all {} transaction(s).", count);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let removed = service.clear()?;
            println!("Deleted {} transaction(s)", removed);
        }
    }

    Ok(())
}
