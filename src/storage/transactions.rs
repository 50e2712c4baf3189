//! Transaction repository
//!
//! Keeps the transaction list in memory, newest first, and writes the whole
//! list back under the `transactions` key on save.

use std::sync::{Arc, RwLock};

use tracing::debug;

use super::kv::{keys, load_json, save_json, KeyValueStore};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Transaction, TransactionId};

/// Repository for transaction persistence
pub struct TransactionRepository {
    store: Arc<dyn KeyValueStore>,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load the list from the store; absent or blank storage is an empty list
    pub fn load(&self) -> LedgerResult<()> {
        let loaded: Vec<Transaction> =
            load_json(self.store.as_ref(), keys::TRANSACTIONS)?.unwrap_or_default();

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        debug!(count = loaded.len(), "loaded transactions");
        *data = loaded;
        Ok(())
    }

    /// Write the list back in its current order
    pub fn save(&self) -> LedgerResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        save_json(self.store.as_ref(), keys::TRANSACTIONS, data.as_slice())
    }

    /// All transactions in list order (newest entry first)
    pub fn get_all(&self) -> LedgerResult<Vec<Transaction>> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    pub fn get(&self, id: &TransactionId) -> LedgerResult<Option<Transaction>> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.iter().find(|t| &t.id == id).cloned())
    }

    /// Find by full id or unique id prefix
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Transaction>> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        if let Some(exact) = data.iter().find(|t| t.id.as_str() == identifier) {
            return Ok(Some(exact.clone()));
        }

        let mut matches = data.iter().filter(|t| t.id.matches_prefix(identifier));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Ok(Some(only.clone())),
            (Some(_), Some(_)) => Err(LedgerError::Validation(format!(
                "Ambiguous transaction id '{}'",
                identifier
            ))),
            _ => Ok(None),
        }
    }

    /// Insert at the head of the list
    pub fn insert_front(&self, txn: Transaction) -> LedgerResult<()> {
        self.insert_many_front(vec![txn])
    }

    /// Insert a block at the head of the list, keeping the block's order
    pub fn insert_many_front(&self, txns: Vec<Transaction>) -> LedgerResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let rest = std::mem::replace(&mut *data, txns);
        data.extend(rest);
        Ok(())
    }

    /// Replace the entry with the same id in place; returns the old value
    pub fn replace(&self, txn: Transaction) -> LedgerResult<Option<Transaction>> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(data
            .iter_mut()
            .find(|t| t.id == txn.id)
            .map(|slot| std::mem::replace(slot, txn)))
    }

    pub fn remove(&self, id: &TransactionId) -> LedgerResult<Option<Transaction>> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let idx = data.iter().position(|t| &t.id == id);
        Ok(idx.map(|idx| data.remove(idx)))
    }

    /// Drop every transaction; returns how many were held
    pub fn clear(&self) -> LedgerResult<usize> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let count = data.len();
        data.clear();
        Ok(count)
    }

    pub fn count(&self) -> LedgerResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
