//! Append-only JSONL audit log
//!
//! One JSON object per line, appended and flushed per entry. The logger is
//! also the built-in event listener: every committed change becomes a line.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{LedgerError, LedgerResult};
use crate::events::{EventListener, LedgerEvent};
use crate::storage::file_io::read_text;

use super::entry::AuditEntry;

pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry and flush
    pub fn log(&self, entry: &AuditEntry) -> LedgerResult<()> {
        let json = serde_json::to_string(entry)
            .map_err(|e| LedgerError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| LedgerError::Io(format!("Failed to open audit log: {}", e)))?;

        writeln!(file, "{}", json)
            .and_then(|_| file.flush())
            .map_err(|e| LedgerError::Io(format!("Failed to write audit entry: {}", e)))
    }

    /// Every entry, oldest first. A missing log reads as empty.
    pub fn read_all(&self) -> LedgerResult<Vec<AuditEntry>> {
        let Some(contents) = read_text(&self.log_path)? else {
            return Ok(Vec::new());
        };

        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                serde_json::from_str(line).map_err(|e| {
                    LedgerError::Json(format!(
                        "Failed to parse audit entry at line {}: {}",
                        idx + 1,
                        e
                    ))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Number of non-blank lines in the log
    pub fn entry_count(&self) -> LedgerResult<usize> {
        Ok(read_text(&self.log_path)?
            .map(|contents| contents.lines().filter(|l| !l.trim().is_empty()).count())
            .unwrap_or(0))
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }
}

impl EventListener for AuditLogger {
    fn name(&self) -> &str {
        "audit"
    }

    fn handle(&mut self, event: &LedgerEvent) -> LedgerResult<()> {
        self.log(&AuditEntry::from_event(event))
    }
}
