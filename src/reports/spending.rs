//! Spending Report
//!
//! Expense totals grouped by category, largest first, with each category's
//! share of total spending.

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Category, Money, Transaction};

use super::summary::{totals, Totals};

/// Spending for one category id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    /// Raw category id as stored on the transactions
    pub category_id: String,
    /// Resolved category (unknown ids resolve to `Other`)
    #[serde(skip)]
    pub category: Category,
    pub total: Money,
    pub transaction_count: usize,
    /// Fraction of total spending, `0.0` when nothing was spent
    pub share: f64,
}

/// Group expense amounts by category id.
///
/// Categories whose total is zero are dropped. Sorting is by total,
/// descending; equal totals keep first-seen order.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySpending> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<CategorySpending> = Vec::new();
    let mut total_expense = Money::zero();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        total_expense += txn.amount;

        let slot = *index.entry(txn.category.as_str()).or_insert_with(|| {
            rows.push(CategorySpending {
                category_id: txn.category.clone(),
                category: txn.category(),
                total: Money::zero(),
                transaction_count: 0,
                share: 0.0,
            });
            rows.len() - 1
        });

        rows[slot].total += txn.amount;
        rows[slot].transaction_count += 1;
    }

    rows.retain(|row| !row.total.is_zero());
    for row in &mut rows {
        row.share = row.total.ratio_of(total_expense);
    }

    // Stable sort keeps first-seen order for ties
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}

/// Totals and category breakdown for one list of transactions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingReport {
    pub totals: Totals,
    pub categories: Vec<CategorySpending>,
    pub transaction_count: usize,
}

impl SpendingReport {
    /// Generate the report over an already-filtered list
    pub fn generate(transactions: &[Transaction]) -> Self {
        Self {
            totals: totals(transactions),
            categories: category_breakdown(transactions),
            transaction_count: transactions.len(),
        }
    }

    /// Only the `n` largest categories
    pub fn top(&self, n: usize) -> &[CategorySpending] {
        &self.categories[..n.min(self.categories.len())]
    }
}
