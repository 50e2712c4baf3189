//! Budget CLI commands
//!
//! Daily food limit, currency and the food budget views.

use chrono::Local;
use clap::Subcommand;

use crate::display::{format_food_cumulative, format_food_history, format_food_today};
use crate::error::{LedgerError, LedgerResult};
use crate::events::EventBus;
use crate::models::Currency;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Today's food spending against the daily limit
    Food {
        /// Show spending and savings per day
        #[arg(long)]
        history: bool,
        /// Show totals over every tracked day
        #[arg(long)]
        total: bool,
    },
    /// Show or set the daily food limit
    Limit {
        /// New limit in whole currency units (0 disables the limit)
        value: Option<String>,
    },
    /// Show or set the display currency
    Currency {
        /// Currency code (VND, USD, IDR, KRW)
        code: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    events: &EventBus,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let service = BudgetService::new(storage, events);

    match cmd {
        BudgetCommands::Food { history, total } => {
            let currency = service.currency()?;
            if history {
                print!("{}", format_food_history(&service.food_history()?, currency));
            } else if total {
                print!("{}", format_food_cumulative(&service.food_cumulative()?, currency));
            } else {
                let today = Local::now().date_naive();
                let stats = service.food_today(today)?;
                print!("{}", format_food_today(&stats, service.daily_limit()?, currency));
                println!("{} transaction(s) recorded today", service.activity_on(today)?);
            }
        }

        BudgetCommands::Limit { value } => {
            let currency = service.currency()?;
            match value {
                None => {
                    let limit = service.daily_limit()?;
                    if limit.is_zero() {
                        println!("No daily food limit set");
                    } else {
                        println!("Daily food limit: {}", currency.format(limit));
                    }
                }
                Some(raw) => {
                    let limit = service.set_daily_limit_from_str(&raw)?;
                    println!("Daily food limit set to {}", currency.format(limit));
                }
            }
        }

        BudgetCommands::Currency { code } => match code {
            None => {
                let current = service.currency()?;
                println!("Currency: {}", current);
                let available: Vec<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
                println!("Available: {}", available.join(", "));
            }
            Some(code) => {
                let currency: Currency = code.parse().map_err(LedgerError::Validation)?;
                service.set_currency(currency)?;
                println!("Currency set to {}", currency);
            }
        },
    }

    Ok(())
}
