//! Budget service
//!
//! The daily food limit, the display currency, and the food budget views
//! computed over the stored transactions.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::events::{EventBus, LedgerEvent};
use crate::models::{Currency, Money};
use crate::reports::{
    activity_on, cumulative_food_stats, daily_food_history, daily_food_stats, CumulativeFoodStats,
    DailyFoodStats, FoodDay,
};
use crate::storage::Storage;

/// Service for the daily food budget and display preferences
pub struct BudgetService<'a> {
    storage: &'a Storage,
    events: &'a EventBus,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage, events: &'a EventBus) -> Self {
        Self { storage, events }
    }

    pub fn daily_limit(&self) -> LedgerResult<Money> {
        self.storage.preferences.daily_limit()
    }

    /// Set the daily food limit. Negative values are rejected and the
    /// previous limit is kept.
    pub fn set_daily_limit(&self, limit: Money) -> LedgerResult<Money> {
        if limit.is_negative() {
            return Err(LedgerError::Validation(format!(
                "Daily limit cannot be negative (got {})",
                limit
            )));
        }

        let before = self.storage.preferences.daily_limit()?;
        self.storage.preferences.set_daily_limit(limit)?;
        self.storage.preferences.save()?;
        debug!(before = %before, after = %limit, "daily limit set");

        if before != limit {
            self.events.publish(LedgerEvent::DailyLimitChanged { before, after: limit });
        }
        Ok(limit)
    }

    /// Parse and set the daily limit from user input such as `"100000"`
    pub fn set_daily_limit_from_str(&self, input: &str) -> LedgerResult<Money> {
        let limit = Money::parse(input)
            .map_err(|e| LedgerError::Validation(format!("Invalid daily limit: {}", e)))?;
        self.set_daily_limit(limit)
    }

    pub fn currency(&self) -> LedgerResult<Currency> {
        self.storage.preferences.currency()
    }

    pub fn set_currency(&self, currency: Currency) -> LedgerResult<Currency> {
        let before = self.storage.preferences.currency()?;
        self.storage.preferences.set_currency(currency)?;
        self.storage.preferences.save()?;

        if before != currency {
            self.events.publish(LedgerEvent::CurrencyChanged {
                before,
                after: currency,
            });
        }
        Ok(currency)
    }

    /// Food spending on `today` against the current limit
    pub fn food_today(&self, today: NaiveDate) -> LedgerResult<DailyFoodStats> {
        let transactions = self.storage.transactions.get_all()?;
        Ok(daily_food_stats(&transactions, self.daily_limit()?, today))
    }

    /// Per-day food spending, most recent first
    pub fn food_history(&self) -> LedgerResult<Vec<FoodDay>> {
        let transactions = self.storage.transactions.get_all()?;
        Ok(daily_food_history(&transactions, self.daily_limit()?))
    }

    /// Number of transactions of any type recorded on `day`
    pub fn activity_on(&self, day: NaiveDate) -> LedgerResult<usize> {
        let transactions = self.storage.transactions.get_all()?;
        Ok(activity_on(&transactions, day))
    }

    pub fn food_cumulative(&self) -> LedgerResult<CumulativeFoodStats> {
        let transactions = self.storage.transactions.get_all()?;
        Ok(cumulative_food_stats(&transactions, self.daily_limit()?))
    }
}
