//! Core data models for thuchi
//!
//! Transactions, shortcuts, the fixed category table and the money and
//! currency types they are expressed in.

pub mod category;
pub mod currency;
pub mod ids;
pub mod money;
pub mod shortcut;
pub mod transaction;

pub use category::{Category, CategoryInfo, CategoryScope};
pub use currency::Currency;
pub use ids::{ShortcutId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use shortcut::{Shortcut, ShortcutValidationError};
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
