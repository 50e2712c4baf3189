//! Data management commands: audit history, configuration and storage usage

use crate::audit::AuditLogger;
use crate::config::{LedgerPaths, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(paths: &LedgerPaths, count: usize) -> LedgerResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    println!("\nShowing {} of {} entries", entries.len(), logger.entry_count()?);
    Ok(())
}

/// Settings changes requested on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub separator: Option<char>,
    pub first_day_of_week: Option<u8>,
    pub date_format: Option<String>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.separator.is_none() && self.first_day_of_week.is_none() && self.date_format.is_none()
    }
}

/// Show paths and settings, applying `update` first when it is not empty
pub fn handle_config_command(
    paths: &LedgerPaths,
    settings: &Settings,
    update: ConfigUpdate,
) -> LedgerResult<()> {
    let mut settings = settings.clone();
    if !update.is_empty() {
        if let Some(separator) = update.separator {
            if separator.is_whitespace() {
                return Err(LedgerError::Validation(
                    "separator must not be a whitespace character".into(),
                ));
            }
            settings.separator = separator;
        }
        if let Some(day) = update.first_day_of_week {
            if day > 6 {
                return Err(LedgerError::Validation(format!(
                    "first day of week must be 0 (Sunday) to 6 (Saturday), got {}",
                    day
                )));
            }
            settings.first_day_of_week = day;
        }
        if let Some(format) = update.date_format {
            settings.date_format = format;
        }
        settings.save(paths)?;
        println!("Settings saved");
        println!();
    }

    println!("thuchi Configuration");
    println!("====================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Separator:         '{}'", settings.separator);
    println!("  First day of week: {:?}", settings.week_start());
    println!("  Date format:       {}", settings.date_format);
    Ok(())
}

/// Byte usage per store key, optionally resetting preferences first
pub fn handle_storage_command(storage: &Storage, reset_preferences: bool) -> LedgerResult<()> {
    if reset_preferences {
        storage.reset_preferences()?;
        println!("Daily limit and currency reset to defaults");
        println!();
    }

    let usage = storage.usage()?;
    let total: usize = usage.iter().map(|u| u.bytes).sum();

    println!("{:<16} {:>10}", "Key", "Bytes");
    println!("{}", "-".repeat(27));
    for entry in &usage {
        println!("{:<16} {:>10}", entry.key, entry.bytes);
    }
    println!("{}", "-".repeat(27));
    println!("{:<16} {:>10}", "Total", total);
    Ok(())
}
