//! Daily food budget views
//!
//! Only expenses in the `food` category count. A transaction's day is the
//! date part of its stored timestamp.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Money, Transaction};

/// Today's food spending against the daily limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyFoodStats {
    pub spent_today: Money,
    /// `limit - spent_today`, negative when over budget
    pub remaining: Money,
    /// Spent as a percentage of the limit, capped at 100; `0` when the
    /// limit is zero
    pub percentage: f64,
}

pub fn daily_food_stats(transactions: &[Transaction], limit: Money, today: NaiveDate) -> DailyFoodStats {
    let spent_today: Money = transactions
        .iter()
        .filter(|t| t.is_food_expense() && t.day() == today)
        .map(|t| t.amount)
        .sum();

    let percentage = if limit.is_positive() {
        (spent_today.ratio_of(limit) * 100.0).min(100.0)
    } else {
        0.0
    };

    DailyFoodStats {
        spent_today,
        remaining: limit - spent_today,
        percentage,
    }
}

/// Food spending on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodDay {
    pub date: NaiveDate,
    /// Newest first
    pub items: Vec<Transaction>,
    pub total_spent: Money,
    /// `limit - total_spent`
    pub savings: Money,
}

/// Food expenses grouped by day, most recent day first
pub fn daily_food_history(transactions: &[Transaction], limit: Money) -> Vec<FoodDay> {
    let mut by_day: BTreeMap<NaiveDate, Vec<Transaction>> = BTreeMap::new();
    for txn in transactions.iter().filter(|t| t.is_food_expense()) {
        by_day.entry(txn.day()).or_default().push(txn.clone());
    }

    by_day
        .into_iter()
        .rev()
        .map(|(date, mut items)| {
            items.sort_by(|a, b| b.date.cmp(&a.date));
            let total_spent: Money = items.iter().map(|t| t.amount).sum();
            FoodDay {
                date,
                items,
                total_spent,
                savings: limit - total_spent,
            }
        })
        .collect()
}

/// Budget projection over every day with recorded food spending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CumulativeFoodStats {
    /// Distinct days with at least one food expense
    pub days_count: usize,
    pub total_spent: Money,
    /// `days_count * limit`
    pub total_expected_budget: Money,
    /// `total_expected_budget - total_spent`
    pub total_saved: Money,
}

pub fn cumulative_food_stats(transactions: &[Transaction], limit: Money) -> CumulativeFoodStats {
    let mut days: Vec<NaiveDate> = Vec::new();
    let mut total_spent = Money::zero();

    for txn in transactions.iter().filter(|t| t.is_food_expense()) {
        total_spent += txn.amount;
        days.push(txn.day());
    }
    days.sort_unstable();
    days.dedup();

    let total_expected_budget = limit.times(days.len());
    CumulativeFoodStats {
        days_count: days.len(),
        total_spent,
        total_expected_budget,
        total_saved: total_expected_budget - total_spent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Shortcut, TransactionType};
    use crate::reports::totals;
    use chrono::DateTime;

    fn txn(kind: TransactionType, category: &str, amount: i64, date: &str) -> Transaction {
        Transaction::new(
            Money::from_major(amount),
            kind,
            category,
            DateTime::parse_from_rfc3339(date).unwrap(),
            "",
        )
    }

    fn food(amount: i64, date: &str) -> Transaction {
        txn(TransactionType::Expense, "food", amount, date)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_to_end_same_day() {
        let list = vec![
            food(50_000, "2025-04-10T08:00:00+07:00"),
            food(30_000, "2025-04-10T12:30:00+07:00"),
            txn(TransactionType::Income, "salary", 1_000_000, "2025-04-10T09:00:00+07:00"),
        ];

        let t = totals(&list);
        assert_eq!(t.income, Money::from_major(1_000_000));
        assert_eq!(t.expense, Money::from_major(80_000));
        assert_eq!(t.balance, Money::from_major(920_000));

        let stats = daily_food_stats(&list, Money::from_major(100_000), day(2025, 4, 10));
        assert_eq!(stats.spent_today, Money::from_major(80_000));
        assert_eq!(stats.remaining, Money::from_major(20_000));
        assert_eq!(stats.percentage, 80.0);
    }

    #[test]
    fn test_zero_limit_gives_zero_percentage() {
        let list = vec![food(50_000, "2025-04-10T08:00:00+07:00")];
        let stats = daily_food_stats(&list, Money::zero(), day(2025, 4, 10));
        assert_eq!(stats.percentage, 0.0);
        assert_eq!(stats.remaining, Money::from_major(-50_000));
    }

    #[test]
    fn test_percentage_caps_at_hundred() {
        let list = vec![food(150_000, "2025-04-10T08:00:00+07:00")];
        let stats = daily_food_stats(&list, Money::from_major(100_000), day(2025, 4, 10));
        assert_eq!(stats.percentage, 100.0);

        let list = vec![food(99_999, "2025-04-10T08:00:00+07:00")];
        let stats = daily_food_stats(&list, Money::from_major(100_000), day(2025, 4, 10));
        assert!(stats.percentage < 100.0);
        assert!((stats.percentage - 99.999).abs() < 1e-9);
    }

    #[test]
    fn test_only_todays_food_expenses_count() {
        let list = vec![
            food(10_000, "2025-04-09T23:59:00+07:00"),
            food(20_000, "2025-04-10T00:01:00+07:00"),
            txn(TransactionType::Expense, "transport", 5_000, "2025-04-10T08:00:00+07:00"),
            txn(TransactionType::Income, "food", 7_000, "2025-04-10T08:00:00+07:00"),
        ];
        let stats = daily_food_stats(&list, Money::from_major(100_000), day(2025, 4, 10));
        assert_eq!(stats.spent_today, Money::from_major(20_000));
    }

    #[test]
    fn test_day_uses_stored_offset() {
        // 17:30Z on the 9th is the 10th at +07:00
        let list = vec![food(10_000, "2025-04-10T00:30:00+07:00")];
        let stats = daily_food_stats(&list, Money::from_major(100_000), day(2025, 4, 10));
        assert_eq!(stats.spent_today, Money::from_major(10_000));
    }

    #[test]
    fn test_history_groups_days_newest_first() {
        let list = vec![
            food(10_000, "2025-04-08T08:00:00+07:00"),
            food(20_000, "2025-04-10T08:00:00+07:00"),
            food(30_000, "2025-04-10T19:00:00+07:00"),
            txn(TransactionType::Expense, "shopping", 99_000, "2025-04-09T08:00:00+07:00"),
        ];

        let history = daily_food_history(&list, Money::from_major(40_000));
        assert_eq!(history.len(), 2);

        assert_eq!(history[0].date, day(2025, 4, 10));
        assert_eq!(history[0].total_spent, Money::from_major(50_000));
        assert_eq!(history[0].savings, Money::from_major(-10_000));
        assert_eq!(history[0].items[0].amount, Money::from_major(30_000));

        assert_eq!(history[1].date, day(2025, 4, 8));
        assert_eq!(history[1].savings, Money::from_major(30_000));
    }

    #[test]
    fn test_cumulative_counts_distinct_days_only() {
        // History spans ten days but food was recorded on two of them
        let list = vec![
            food(30_000, "2025-04-01T08:00:00+07:00"),
            food(20_000, "2025-04-01T12:00:00+07:00"),
            txn(TransactionType::Expense, "transport", 5_000, "2025-04-05T08:00:00+07:00"),
            food(60_000, "2025-04-10T08:00:00+07:00"),
        ];
        let limit = Money::from_major(100_000);

        let stats = cumulative_food_stats(&list, limit);
        assert_eq!(stats.days_count, 2);
        assert_eq!(stats.total_expected_budget, limit.times(2));
        assert_eq!(stats.total_spent, Money::from_major(110_000));
        assert_eq!(stats.total_saved, Money::from_major(90_000));
    }

    #[test]
    fn test_cumulative_of_nothing() {
        assert_eq!(
            cumulative_food_stats(&[], Money::from_major(100_000)),
            CumulativeFoodStats::default()
        );
    }

    #[test]
    fn test_shortcut_round_trip_through_totals() {
        let shortcut = Shortcut::defaults().remove(2);
        let now = DateTime::parse_from_rfc3339("2025-04-10T08:00:00+07:00").unwrap();
        let t = totals(&[shortcut.instantiate(now)]);

        assert_eq!(shortcut.kind, TransactionType::Income);
        assert_eq!(t.income, shortcut.amount);
        assert_eq!(t.expense, Money::zero());
    }
}
