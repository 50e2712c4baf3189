//! Display formatting for terminal output
//!
//! Plain-text tables for transactions, shortcuts, categories and reports.
//! Amounts are always rendered through the selected [`Currency`](crate::models::Currency).

pub mod report;
pub mod shortcut;
pub mod transaction;

pub use report::{
    format_food_cumulative, format_food_history, format_food_today, format_spending_report,
    BudgetBand,
};
pub use shortcut::{format_category_table, format_shortcut_list};
pub use transaction::{format_transaction_details, format_transaction_list, format_transaction_row};
