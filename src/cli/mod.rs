//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod category;
pub mod data;
pub mod report;
pub mod shortcut;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::handle_categories_command;
pub use data::{
    handle_config_command, handle_history_command, handle_storage_command, ConfigUpdate,
};
pub use report::{handle_report_command, PeriodArgs, ReportCommands};
pub use shortcut::{handle_shortcut_command, ShortcutCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{DateTime, FixedOffset, Local, NaiveDate};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money, TransactionType};

/// Parse a `--date` argument.
///
/// Accepts a full RFC 3339 timestamp, or `YYYY-MM-DD` which keeps the
/// current local time of day.
pub(crate) fn parse_date_arg(input: &str) -> LedgerResult<DateTime<FixedOffset>> {
    let input = input.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(input) {
        return Ok(at);
    }

    let day = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            input
        ))
    })?;

    let now = Local::now().fixed_offset();
    day.and_time(now.time())
        .and_local_timezone(*now.offset())
        .single()
        .ok_or_else(|| LedgerError::Validation(format!("Invalid date: '{}'", input)))
}

pub(crate) fn parse_day_arg(input: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            input
        ))
    })
}

pub(crate) fn parse_amount_arg(input: &str) -> LedgerResult<Money> {
    Money::parse(input).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount format: '{}'. Use a number like '35000' or '12.50'. Error: {}",
            input, e
        ))
    })
}

/// Look up a category id, rejecting unknown ids
pub(crate) fn parse_category_arg(input: &str) -> LedgerResult<Category> {
    let id = input.trim().to_lowercase();
    Category::from_id(&id).ok_or_else(|| LedgerError::category_not_found(input))
}

pub(crate) fn kind_from_flag(income: bool) -> TransactionType {
    if income {
        TransactionType::Income
    } else {
        TransactionType::Expense
    }
}
