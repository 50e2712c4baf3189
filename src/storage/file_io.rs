//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use tracing::debug;

use crate::error::LedgerError;

/// Read a whole file as text, `None` if it doesn't exist
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>, LedgerError> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(LedgerError::Storage(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), LedgerError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| LedgerError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        if let Err(cleanup) = fs::remove_file(&temp_path) {
            debug!(path = %temp_path.display(), error = %cleanup, "temp file cleanup failed");
        }
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Remove a file, treating "already gone" as success
pub fn remove_if_exists<P: AsRef<Path>>(path: P) -> Result<(), LedgerError> {
    let path = path.as_ref();

    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(LedgerError::Storage(format!(
            "Failed to remove {}: {}",
            path.display(),
            e
        ))),
    }
}
