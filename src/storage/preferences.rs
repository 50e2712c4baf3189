//! Daily food limit and display currency

use std::sync::{Arc, RwLock};

use super::kv::{keys, load_json, save_json, KeyValueStore};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Currency, Money};

pub struct PreferenceRepository {
    store: Arc<dyn KeyValueStore>,
    daily_limit: RwLock<Money>,
    currency: RwLock<Currency>,
}

impl PreferenceRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            daily_limit: RwLock::new(Money::zero()),
            currency: RwLock::new(Currency::default()),
        }
    }

    pub fn load(&self) -> LedgerResult<()> {
        let limit: Money = load_json(self.store.as_ref(), keys::DAILY_FOOD_LIMIT)?.unwrap_or_default();
        let currency = self.load_currency()?;

        *self
            .daily_limit
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))? = limit;
        *self
            .currency
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))? = currency;
        Ok(())
    }

    // Accepts both a JSON string and a bare code such as `USD`
    fn load_currency(&self) -> LedgerResult<Currency> {
        let raw = match self.store.get(keys::CURRENCY)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(Currency::default()),
        };

        serde_json::from_str::<Currency>(&raw)
            .or_else(|_| raw.trim().parse::<Currency>())
            .map_err(|e| LedgerError::Storage(format!("Failed to parse {}: {}", keys::CURRENCY, e)))
    }

    pub fn save(&self) -> LedgerResult<()> {
        save_json(self.store.as_ref(), keys::DAILY_FOOD_LIMIT, &self.daily_limit()?)?;
        save_json(self.store.as_ref(), keys::CURRENCY, &self.currency()?)
    }

    pub fn daily_limit(&self) -> LedgerResult<Money> {
        self.daily_limit
            .read()
            .map(|limit| *limit)
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    pub fn set_daily_limit(&self, limit: Money) -> LedgerResult<()> {
        *self
            .daily_limit
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))? = limit;
        Ok(())
    }

    pub fn currency(&self) -> LedgerResult<Currency> {
        self.currency
            .read()
            .map(|currency| *currency)
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    pub fn set_currency(&self, currency: Currency) -> LedgerResult<()> {
        *self
            .currency
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))? = currency;
        Ok(())
    }

    /// Forget both values and their stored copies
    pub fn reset(&self) -> LedgerResult<()> {
        self.store.remove(keys::DAILY_FOOD_LIMIT)?;
        self.store.remove(keys::CURRENCY)?;
        self.set_daily_limit(Money::zero())?;
        self.set_currency(Currency::default())
    }
}
