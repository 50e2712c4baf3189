//! String-valued key-value stores
//!
//! Every piece of ledger data lives under one key, serialized as text. The
//! file-backed store keeps one `<key>.json` file per key; the memory store
//! keeps a map and is used by tests and embedders.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::file_io::{read_text, remove_if_exists, write_text_atomic};
use crate::error::{LedgerError, LedgerResult};

/// Known store keys
pub mod keys {
    pub const TRANSACTIONS: &str = "transactions";
    pub const SHORTCUTS: &str = "shortcuts";
    pub const DAILY_FOOD_LIMIT: &str = "dailyFoodLimit";
    pub const CURRENCY: &str = "currency";

    pub const ALL: [&str; 4] = [TRANSACTIONS, SHORTCUTS, DAILY_FOOD_LIMIT, CURRENCY];
}

/// A string-valued persistent store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> LedgerResult<()>;

    /// Removing an absent key is not an error
    fn remove(&self, key: &str) -> LedgerResult<()>;

    /// Keys currently holding a value, sorted
    fn keys(&self) -> LedgerResult<Vec<String>>;
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> LedgerResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> LedgerResult<Vec<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.keys().cloned().collect())
    }
}

/// One file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path_for(&self, key: &str) -> LedgerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(LedgerError::Storage(format!("Invalid store key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        read_text(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        write_text_atomic(self.path_for(key)?, value)
    }

    fn remove(&self, key: &str) -> LedgerResult<()> {
        remove_if_exists(self.path_for(key)?)
    }

    fn keys(&self) -> LedgerResult<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(LedgerError::Storage(format!(
                    "Failed to list {}: {}",
                    self.dir.display(),
                    e
                )))
            }
        };

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name();
            if let Some(key) = name.to_str().and_then(|n| n.strip_suffix(".json")) {
                keys.push(key.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// Load a JSON value, `None` when the key is absent or blank
pub fn load_json<T, S>(store: &S, key: &str) -> LedgerResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| LedgerError::Storage(format!("Failed to parse {}: {}", key, e))),
        _ => Ok(None),
    }
}

/// Serialize and store a JSON value
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> LedgerResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)
        .map_err(|e| LedgerError::Storage(format!("Failed to serialize {}: {}", key, e)))?;
    store.set(key, &raw)
}
