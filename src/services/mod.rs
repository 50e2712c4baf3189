//! Service layer for thuchi
//!
//! Services sit on top of storage: they validate input, write changes back,
//! and publish an event once the write has succeeded.

pub mod budget;
pub mod shortcut;
pub mod transaction;

pub use budget::BudgetService;
pub use shortcut::ShortcutService;
pub use transaction::{BulkOutcome, CreateTransactionInput, TransactionEdit, TransactionService};
