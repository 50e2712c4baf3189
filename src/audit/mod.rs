//! Audit log for thuchi
//!
//! An append-only JSONL log of every committed change. [`AuditLogger`] is an
//! [`EventListener`](crate::events::EventListener): it runs on the event
//! worker and turns each [`LedgerEvent`](crate::events::LedgerEvent) into one
//! [`AuditEntry`]. Updates carry a short field-level diff.
//!
//! ```rust,ignore
//! let bus = EventBus::spawn(vec![Box::new(AuditLogger::new(paths.audit_log()))])?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
