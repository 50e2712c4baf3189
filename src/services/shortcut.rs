//! Shortcut service

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::events::{EventBus, LedgerEvent};
use crate::models::{Money, Shortcut, TransactionType};
use crate::storage::Storage;

/// Service for shortcut management
pub struct ShortcutService<'a> {
    storage: &'a Storage,
    events: &'a EventBus,
}

impl<'a> ShortcutService<'a> {
    pub fn new(storage: &'a Storage, events: &'a EventBus) -> Self {
        Self { storage, events }
    }

    /// Create and store a new shortcut
    pub fn create(
        &self,
        name: &str,
        amount: Money,
        category: &str,
        kind: TransactionType,
    ) -> LedgerResult<Shortcut> {
        let name = name.trim();
        let lowered = name.to_lowercase();
        let existing = self.storage.shortcuts.find(name)?;
        if existing.is_some_and(|s| s.name.to_lowercase() == lowered) {
            return Err(LedgerError::Validation(format!(
                "Shortcut '{}' already exists",
                name
            )));
        }

        let shortcut = Shortcut::new(name, amount, category, kind);
        shortcut
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.shortcuts.push(shortcut.clone())?;
        self.storage.shortcuts.save()?;
        debug!(id = %shortcut.id, name = %shortcut.name, "shortcut created");

        self.events.publish(LedgerEvent::ShortcutCreated(shortcut.clone()));
        Ok(shortcut)
    }

    /// Delete the shortcut matching `identifier` (id, id prefix or name)
    pub fn delete(&self, identifier: &str) -> LedgerResult<Shortcut> {
        let shortcut = self
            .find(identifier)?
            .ok_or_else(|| LedgerError::shortcut_not_found(identifier))?;

        self.storage.shortcuts.remove(&shortcut.id)?;
        self.storage.shortcuts.save()?;
        debug!(id = %shortcut.id, "shortcut deleted");

        self.events.publish(LedgerEvent::ShortcutDeleted(shortcut.clone()));
        Ok(shortcut)
    }

    pub fn list(&self) -> LedgerResult<Vec<Shortcut>> {
        self.storage.shortcuts.get_all()
    }

    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Shortcut>> {
        self.storage.shortcuts.find(identifier.trim())
    }

    /// Like `find`, but a missing shortcut is an error
    pub fn get(&self, identifier: &str) -> LedgerResult<Shortcut> {
        self.find(identifier)?
            .ok_or_else(|| LedgerError::shortcut_not_found(identifier))
    }
}
