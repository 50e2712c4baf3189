//! Transaction model
//!
//! A transaction is a single income or expense event. Records are replaced
//! wholesale on edit; the stored shape is
//! `{ id, amount, type, category, date, note }`.

use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Always positive; the direction lives in `kind`
    pub amount: Money,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Raw category id; may name a category that no longer exists
    pub category: String,

    /// When the transaction happened, with the offset it was recorded in
    pub date: DateTime<FixedOffset>,

    #[serde(default)]
    pub note: String,
}

impl Transaction {
    /// Create a transaction with a fresh id
    pub fn new(
        amount: Money,
        kind: TransactionType,
        category: impl Into<String>,
        date: DateTime<FixedOffset>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            kind,
            category: category.into(),
            date,
            note: note.into(),
        }
    }

    /// Create a transaction dated now in local time
    pub fn now(
        amount: Money,
        kind: TransactionType,
        category: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self::new(amount, kind, category, Local::now().fixed_offset(), note)
    }

    /// The category, with unknown ids resolved to `Other`
    pub fn category(&self) -> Category {
        Category::resolve(&self.category)
    }

    /// Calendar day of the transaction in the offset it was recorded in
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Expense booked under the food category
    pub fn is_food_expense(&self) -> bool {
        self.is_expense() && self.category == Category::Food.id()
    }

    /// Amount with sign applied (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.note,
            self.signed_amount()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
