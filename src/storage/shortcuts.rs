//! Shortcut repository
//!
//! When nothing has been stored under `shortcuts` yet, the seeded defaults
//! are served instead. An explicitly stored empty list stays empty.

use std::sync::{Arc, RwLock};

use tracing::debug;

use super::kv::{keys, load_json, save_json, KeyValueStore};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Shortcut, ShortcutId};

pub struct ShortcutRepository {
    store: Arc<dyn KeyValueStore>,
    data: RwLock<Vec<Shortcut>>,
}

impl ShortcutRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            data: RwLock::new(Shortcut::defaults()),
        }
    }

    pub fn load(&self) -> LedgerResult<()> {
        let loaded: Vec<Shortcut> = match load_json(self.store.as_ref(), keys::SHORTCUTS)? {
            Some(list) => list,
            None => {
                debug!("no stored shortcuts, using defaults");
                Shortcut::defaults()
            }
        };

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = loaded;
        Ok(())
    }

    pub fn save(&self) -> LedgerResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        save_json(self.store.as_ref(), keys::SHORTCUTS, data.as_slice())
    }

    pub fn get_all(&self) -> LedgerResult<Vec<Shortcut>> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    /// Find by full id, unique id prefix, or case-insensitive name
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Shortcut>> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        if let Some(exact) = data.iter().find(|s| s.id.as_str() == identifier) {
            return Ok(Some(exact.clone()));
        }

        let lowered = identifier.trim().to_lowercase();
        if let Some(named) = data.iter().find(|s| s.name.to_lowercase() == lowered) {
            return Ok(Some(named.clone()));
        }

        let mut matches = data.iter().filter(|s| s.id.matches_prefix(identifier));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Ok(Some(only.clone())),
            (Some(_), Some(_)) => Err(LedgerError::Validation(format!(
                "Ambiguous shortcut id '{}'",
                identifier
            ))),
            _ => Ok(None),
        }
    }

    /// Append to the end of the list
    pub fn push(&self, shortcut: Shortcut) -> LedgerResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.push(shortcut);
        Ok(())
    }

    pub fn remove(&self, id: &ShortcutId) -> LedgerResult<Option<Shortcut>> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let idx = data.iter().position(|s| &s.id == id);
        Ok(idx.map(|idx| data.remove(idx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use crate::storage::MemoryStore;

    fn repo() -> (Arc<MemoryStore>, ShortcutRepository) {
        let store = Arc::new(MemoryStore::new());
        let repo = ShortcutRepository::new(store.clone());
        (store, repo)
    }

    #[test]
    fn test_absent_storage_serves_defaults() {
        let (_, repo) = repo();
        repo.load().unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Cafe sáng");
        assert_eq!(all[2].id.as_str(), "3");
    }

    #[test]
    fn test_stored_empty_list_stays_empty() {
        let (store, repo) = repo();
        store.set("shortcuts", "[]").unwrap();
        repo.load().unwrap();
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_push_save_reload() {
        let (store, repo) = repo();
        repo.load().unwrap();
        repo.push(Shortcut::new("Giặt đồ", Money::from_major(40_000), "laundry", TransactionType::Expense))
            .unwrap();
        repo.save().unwrap();

        let reloaded = ShortcutRepository::new(store);
        reloaded.load().unwrap();
        let all = reloaded.get_all().unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[3].name, "Giặt đồ");
    }

    #[test]
    fn test_find_by_name_or_id() {
        let (_, repo) = repo();
        repo.load().unwrap();

        assert_eq!(repo.find("2").unwrap().unwrap().name, "Gửi xe");
        assert_eq!(repo.find("cafe SÁNG").unwrap().unwrap().id.as_str(), "1");
        assert!(repo.find("nope").unwrap().is_none());
    }

    #[test]
    fn test_remove() {
        let (_, repo) = repo();
        repo.load().unwrap();
        assert!(repo.remove(&"1".into()).unwrap().is_some());
        assert_eq!(repo.get_all().unwrap().len(), 2);
        assert!(repo.remove(&"1".into()).unwrap().is_none());
    }
}
