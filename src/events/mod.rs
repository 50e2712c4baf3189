//! Post-commit notifications
//!
//! Services publish a [`LedgerEvent`] after a mutation has been written to
//! storage. Events are handed to a single worker thread which fans them out
//! to every registered [`EventListener`]. Publishing never blocks and a
//! failing listener never reaches the caller; its error is logged and the
//! event is dropped for that listener only.

use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Currency, Money, Shortcut, Transaction};

/// Something that changed in the ledger
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LedgerEvent {
    TransactionCreated(Transaction),
    TransactionUpdated { before: Transaction, after: Transaction },
    TransactionDeleted(Transaction),
    TransactionsCleared { count: usize },
    ShortcutCreated(Shortcut),
    ShortcutDeleted(Shortcut),
    DailyLimitChanged { before: Money, after: Money },
    CurrencyChanged { before: Currency, after: Currency },
}

impl LedgerEvent {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::TransactionCreated(_) => "transaction_created",
            Self::TransactionUpdated { .. } => "transaction_updated",
            Self::TransactionDeleted(_) => "transaction_deleted",
            Self::TransactionsCleared { .. } => "transactions_cleared",
            Self::ShortcutCreated(_) => "shortcut_created",
            Self::ShortcutDeleted(_) => "shortcut_deleted",
            Self::DailyLimitChanged { .. } => "daily_limit_changed",
            Self::CurrencyChanged { .. } => "currency_changed",
        }
    }
}

/// Receives events on the worker thread
pub trait EventListener: Send {
    fn name(&self) -> &str;

    fn handle(&mut self, event: &LedgerEvent) -> LedgerResult<()>;
}

/// One-way dispatcher to the listener thread
pub struct EventBus {
    sender: Option<Sender<LedgerEvent>>,
    worker: Option<JoinHandle<()>>,
}

impl EventBus {
    /// Start the worker thread with the given listeners
    pub fn spawn(mut listeners: Vec<Box<dyn EventListener>>) -> LedgerResult<Self> {
        let (sender, receiver) = mpsc::channel::<LedgerEvent>();

        let worker = thread::Builder::new()
            .name("thuchi-events".to_string())
            .spawn(move || {
                for event in receiver {
                    for listener in listeners.iter_mut() {
                        if let Err(e) = listener.handle(&event) {
                            warn!(
                                listener = listener.name(),
                                event = event.name(),
                                error = %e,
                                "event listener failed"
                            );
                        }
                    }
                }
                debug!("event worker stopped");
            })
            .map_err(|e| LedgerError::Io(format!("Failed to start event worker: {}", e)))?;

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// A bus that discards every event
    pub fn disabled() -> Self {
        Self {
            sender: None,
            worker: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    /// Queue an event for the listeners
    pub fn publish(&self, event: LedgerEvent) {
        let Some(sender) = &self.sender else {
            return;
        };

        let name = event.name();
        if sender.send(event).is_err() {
            warn!(event = name, "event worker is gone, dropping event");
        } else {
            debug!(event = name, "event published");
        }
    }
}

impl Drop for EventBus {
    /// Closes the channel and waits until queued events are handled
    fn drop(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("event worker panicked");
            }
        }
    }
}
