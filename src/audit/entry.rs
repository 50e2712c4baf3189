//! Audit entry data structures
//!
//! Defines the structure of audit log entries including operation types,
//! entity types, and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::diff::generate_diff;
use crate::events::LedgerEvent;
use crate::models::Transaction;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Shortcut,
    /// Daily limit, currency
    Preference,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::Shortcut => write!(f, "Shortcut"),
            EntityType::Preference => write!(f, "Preference"),
        }
    }
}

/// A single audit log entry
///
/// Records a single operation on an entity with optional before/after values
/// for tracking changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    pub entity_id: String,

    /// Human-readable description of the entity (e.g. the note)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Entity before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Entity after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: serde_json::to_value(entity).ok(),
            diff_summary: None,
        }
    }

    /// Update entry; the diff summary is computed from the two values
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let before = serde_json::to_value(before).ok();
        let after = serde_json::to_value(after).ok();
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before,
            after,
            diff_summary,
        }
    }

    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: serde_json::to_value(entity).ok(),
            after: None,
            diff_summary: None,
        }
    }

    /// The entry recording a ledger event
    pub fn from_event(event: &LedgerEvent) -> Self {
        match event {
            LedgerEvent::TransactionCreated(txn) => Self::create(
                EntityType::Transaction,
                txn.id.as_str(),
                Some(describe(txn)),
                txn,
            ),
            LedgerEvent::TransactionUpdated { before, after } => Self::update(
                EntityType::Transaction,
                after.id.as_str(),
                Some(describe(after)),
                before,
                after,
            ),
            LedgerEvent::TransactionDeleted(txn) => Self::delete(
                EntityType::Transaction,
                txn.id.as_str(),
                Some(describe(txn)),
                txn,
            ),
            LedgerEvent::TransactionsCleared { count } => Self::delete(
                EntityType::Transaction,
                "*",
                Some(format!("{} transactions", count)),
                &json!({ "count": count }),
            ),
            LedgerEvent::ShortcutCreated(shortcut) => Self::create(
                EntityType::Shortcut,
                shortcut.id.as_str(),
                Some(shortcut.name.clone()),
                shortcut,
            ),
            LedgerEvent::ShortcutDeleted(shortcut) => Self::delete(
                EntityType::Shortcut,
                shortcut.id.as_str(),
                Some(shortcut.name.clone()),
                shortcut,
            ),
            LedgerEvent::DailyLimitChanged { before, after } => Self::update(
                EntityType::Preference,
                "dailyFoodLimit",
                None,
                before,
                after,
            ),
            LedgerEvent::CurrencyChanged { before, after } => Self::update(
                EntityType::Preference,
                "currency",
                None,
                before,
                after,
            ),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

fn describe(txn: &Transaction) -> String {
    if txn.note.is_empty() {
        format!("{} {}", txn.day(), txn.category)
    } else {
        format!("{} {}", txn.day(), txn.note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Shortcut, TransactionType};
    use chrono::DateTime;

    fn sample() -> Transaction {
        Transaction::new(
            Money::from_major(35_000),
            TransactionType::Expense,
            "food",
            DateTime::parse_from_rfc3339("2025-04-10T08:00:00+07:00").unwrap(),
            "Cafe",
        )
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_created_event() {
        let txn = sample();
        let entry = AuditEntry::from_event(&LedgerEvent::TransactionCreated(txn.clone()));

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Transaction);
        assert_eq!(entry.entity_id, txn.id.as_str());
        assert_eq!(entry.entity_name.as_deref(), Some("2025-04-10 Cafe"));
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["amount"], 35000);
    }

    #[test]
    fn test_updated_event_has_diff() {
        let before = sample();
        let mut after = before.clone();
        after.amount = Money::from_major(40_000);

        let entry = AuditEntry::from_event(&LedgerEvent::TransactionUpdated { before, after });
        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.diff_summary.as_deref(), Some("amount: 35000 -> 40000"));
    }

    #[test]
    fn test_preference_event() {
        let entry = AuditEntry::from_event(&LedgerEvent::DailyLimitChanged {
            before: Money::zero(),
            after: Money::from_major(100_000),
        });
        assert_eq!(entry.entity_type, EntityType::Preference);
        assert_eq!(entry.entity_id, "dailyFoodLimit");
        assert_eq!(entry.diff_summary.as_deref(), Some("0 -> 100000"));
    }

    #[test]
    fn test_shortcut_deleted_event() {
        let shortcut = Shortcut::defaults().remove(0);
        let entry = AuditEntry::from_event(&LedgerEvent::ShortcutDeleted(shortcut));
        assert_eq!(entry.operation, Operation::Delete);
        assert_eq!(entry.entity_name.as_deref(), Some("Cafe sáng"));
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::from_event(&LedgerEvent::TransactionsCleared { count: 4 });

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Delete);
        assert_eq!(deserialized.entity_id, "*");
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::from_event(&LedgerEvent::TransactionCreated(sample()));

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE"));
        assert!(formatted.contains("Transaction"));
        assert!(formatted.contains("Cafe"));
    }
}
