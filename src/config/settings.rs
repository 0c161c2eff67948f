//! User settings for the expense tracker
//!
//! Optional `expense-tracker.json` in the working directory. Every field has a
//! default, so a missing file or a partial one is fine.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Data file, relative to the working directory unless absolute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format (strftime) used for prompts and strict date checks
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Reject dates that do not match `date_format`
    #[serde(default)]
    pub strict_dates: bool,
}

/// Newest settings layout this build understands
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SETTINGS_SCHEMA_VERSION
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_file: None,
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            strict_dates: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.schema_version > SETTINGS_SCHEMA_VERSION {
                return Err(ExpenseError::Config(format!(
                    "Settings file {} has schema_version {}, newest supported is {}",
                    settings_path.display(),
                    settings.schema_version,
                    SETTINGS_SCHEMA_VERSION
                )));
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Human-readable example of the configured date format
    pub fn date_hint(&self) -> String {
        self.date_format
            .replace("%Y", "YYYY")
            .replace("%m", "MM")
            .replace("%d", "DD")
    }
}
