//! Shortcut model
//!
//! A shortcut is a transaction template without a date. Using one creates a
//! transaction dated at the moment of use, with the shortcut name as note.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ShortcutId;
use super::money::Money;
use super::transaction::{Transaction, TransactionType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortcut {
    pub id: ShortcutId,
    pub name: String,
    pub amount: Money,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Shortcut {
    /// Create a shortcut with a fresh id
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        kind: TransactionType,
    ) -> Self {
        Self {
            id: ShortcutId::new(),
            name: name.into(),
            amount,
            category: category.into(),
            kind,
        }
    }

    /// Shortcuts offered before the user has saved any
    pub fn defaults() -> Vec<Shortcut> {
        vec![
            Self::seeded("1", "Cafe sáng", 35_000, Category::Food, TransactionType::Expense),
            Self::seeded("2", "Gửi xe", 5_000, Category::Transport, TransactionType::Expense),
            Self::seeded("3", "Nhận lương", 15_000_000, Category::Salary, TransactionType::Income),
        ]
    }

    fn seeded(id: &str, name: &str, amount: i64, category: Category, kind: TransactionType) -> Self {
        Self {
            id: ShortcutId::from_raw(id),
            name: name.to_string(),
            amount: Money::from_major(amount),
            category: category.id().to_string(),
            kind,
        }
    }

    /// The category, with unknown ids resolved to `Other`
    pub fn category(&self) -> Category {
        Category::resolve(&self.category)
    }

    /// Build the transaction this shortcut stands for, dated `at`
    pub fn instantiate(&self, at: DateTime<FixedOffset>) -> Transaction {
        Transaction::new(self.amount, self.kind, self.category.clone(), at, self.name.clone())
    }

    /// Validate the shortcut
    pub fn validate(&self) -> Result<(), ShortcutValidationError> {
        if self.name.trim().is_empty() {
            return Err(ShortcutValidationError::EmptyName);
        }
        if !self.amount.is_positive() {
            return Err(ShortcutValidationError::NonPositiveAmount(self.amount));
        }
        match Category::from_id(&self.category) {
            None => Err(ShortcutValidationError::UnknownCategory(self.category.clone())),
            Some(category) if !category.applies_to(self.kind) => {
                Err(ShortcutValidationError::CategoryTypeMismatch {
                    category: self.category.clone(),
                    kind: self.kind,
                })
            }
            Some(_) => Ok(()),
        }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.kind, self.amount)
    }
}

/// Validation errors for shortcuts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutValidationError {
    EmptyName,
    NonPositiveAmount(Money),
    UnknownCategory(String),
    CategoryTypeMismatch {
        category: String,
        kind: TransactionType,
    },
}

impl fmt::Display for ShortcutValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Shortcut name cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Shortcut amount must be greater than zero (got {})", amount)
            }
            Self::UnknownCategory(id) => write!(f, "Unknown category: {}", id),
            Self::CategoryTypeMismatch { category, kind } => {
                write!(f, "Category '{}' cannot be used for {}", category, kind)
            }
        }
    }
}

impl std::error::Error for ShortcutValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let defaults = Shortcut::defaults();
        assert_eq!(defaults.len(), 3);
        for shortcut in &defaults {
            assert!(shortcut.validate().is_ok(), "{} should be valid", shortcut.name);
        }
        assert_eq!(defaults[2].kind, TransactionType::Income);
    }

    #[test]
    fn test_instantiate_copies_template() {
        let shortcut = Shortcut::new("Gửi xe", Money::from_major(5_000), "transport", TransactionType::Expense);
        let at = DateTime::parse_from_rfc3339("2025-02-01T07:45:00+07:00").unwrap();

        let txn = shortcut.instantiate(at);
        assert_eq!(txn.amount, shortcut.amount);
        assert_eq!(txn.kind, shortcut.kind);
        assert_eq!(txn.category, "transport");
        assert_eq!(txn.note, "Gửi xe");
        assert_eq!(txn.date, at);
    }

    #[test]
    fn test_validation() {
        let mut shortcut = Shortcut::new("  ", Money::from_major(1), "food", TransactionType::Expense);
        assert_eq!(shortcut.validate(), Err(ShortcutValidationError::EmptyName));

        shortcut.name = "Tea".into();
        shortcut.amount = Money::zero();
        assert!(matches!(
            shortcut.validate(),
            Err(ShortcutValidationError::NonPositiveAmount(_))
        ));

        shortcut.amount = Money::from_major(1);
        shortcut.category = "pets".into();
        assert!(matches!(
            shortcut.validate(),
            Err(ShortcutValidationError::UnknownCategory(_))
        ));

        shortcut.category = "salary".into();
        assert!(matches!(
            shortcut.validate(),
            Err(ShortcutValidationError::CategoryTypeMismatch { .. })
        ));
    }
}
