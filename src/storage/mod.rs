//! Storage layer for thuchi
//!
//! A string-valued key-value store with one repository per key. Data is
//! loaded once at startup and written back explicitly after each mutation.

pub mod file_io;
pub mod kv;
pub mod preferences;
pub mod shortcuts;
pub mod transactions;

pub use kv::{keys, FileStore, KeyValueStore, MemoryStore};
pub use preferences::PreferenceRepository;
pub use shortcuts::ShortcutRepository;
pub use transactions::TransactionRepository;

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;

/// Size of one stored value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyUsage {
    pub key: String,
    pub bytes: usize,
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    store: Arc<dyn KeyValueStore>,
    pub transactions: TransactionRepository,
    pub shortcuts: ShortcutRepository,
    pub preferences: PreferenceRepository,
}

impl Storage {
    /// Open the file store under the data directory and load everything
    pub fn open(paths: &LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;
        let storage = Self::with_store(Arc::new(FileStore::new(paths.data_dir())));
        storage.load_all()?;
        Ok(storage)
    }

    /// Empty in-memory storage
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Wrap an existing store. Nothing is loaded until `load_all`.
    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            transactions: TransactionRepository::new(store.clone()),
            shortcuts: ShortcutRepository::new(store.clone()),
            preferences: PreferenceRepository::new(store.clone()),
            store,
        }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Load all data from the store
    pub fn load_all(&self) -> LedgerResult<()> {
        self.transactions.load()?;
        self.shortcuts.load()?;
        self.preferences.load()?;
        debug!("storage loaded");
        Ok(())
    }

    /// Save all data to the store
    pub fn save_all(&self) -> LedgerResult<()> {
        self.transactions.save()?;
        self.shortcuts.save()?;
        self.preferences.save()?;
        Ok(())
    }

    /// Byte size of every stored value, in key order
    pub fn usage(&self) -> LedgerResult<Vec<KeyUsage>> {
        let mut usage = Vec::new();
        for key in self.store.keys()? {
            if let Some(value) = self.store.get(&key)? {
                usage.push(KeyUsage {
                    bytes: value.len(),
                    key,
                });
            }
        }
        Ok(usage)
    }

    /// Drop every transaction and the stored list; returns how many were held
    pub fn clear_transactions(&self) -> LedgerResult<usize> {
        let count = self.transactions.clear()?;
        self.store.remove(keys::TRANSACTIONS)?;
        Ok(count)
    }

    /// Reset the daily limit and currency to their defaults
    pub fn reset_preferences(&self) -> LedgerResult<()> {
        self.preferences.reset()
    }
}
