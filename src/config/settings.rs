//! User settings for thuchi
//!
//! Settings cover how input is read and how periods are cut: the quick-entry
//! separator, the first day of the week and the date display format.
//! Ledger data (transactions, shortcuts, daily limit, currency) lives in the
//! store, not here.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// User settings for thuchi
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Character splitting a quick-entry line into note and amount
    #[serde(default = "default_separator")]
    pub separator: char,

    /// First day of week (0 = Sunday, 1 = Monday, ... 6 = Saturday)
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: u8,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_separator() -> char {
    '.'
}

fn default_first_day_of_week() -> u8 {
    0 // Sunday
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            separator: default_separator(),
            first_day_of_week: default_first_day_of_week(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// The configured week start as a chrono weekday
    ///
    /// Out-of-range values wrap modulo seven.
    pub fn week_start(&self) -> Weekday {
        match self.first_day_of_week % 7 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.separator.is_whitespace() {
                return Err(LedgerError::Config(
                    "separator must not be a whitespace character".into(),
                ));
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.separator, '.');
        assert_eq!(settings.week_start(), Weekday::Sun);
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            separator: '-',
            first_day_of_week: 1,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.separator, '-');
        assert_eq!(loaded.week_start(), Weekday::Mon);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"first_day_of_week": 6}"#).unwrap();
        assert_eq!(settings.separator, '.');
        assert_eq!(settings.week_start(), Weekday::Sat);
    }

    #[test]
    fn test_whitespace_separator_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"separator": " "}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
