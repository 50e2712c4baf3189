//! Income / expense totals

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Money, Transaction, TransactionType};

/// Totals over a list of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    /// `income - expense`
    pub balance: Money,
}

/// Sum income and expense amounts. An empty list gives all zeros.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = Money::zero();
    let mut expense = Money::zero();

    for txn in transactions {
        match txn.kind {
            TransactionType::Income => income += txn.amount,
            TransactionType::Expense => expense += txn.amount,
        }
    }

    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Number of transactions recorded on `day`
pub fn activity_on(transactions: &[Transaction], day: NaiveDate) -> usize {
    transactions.iter().filter(|t| t.day() == day).count()
}
