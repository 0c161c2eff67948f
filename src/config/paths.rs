//! Path management for the expense tracker
//!
//! Everything lives in the working directory by default.
//!
//! ## Data File Resolution Order
//!
//! 1. `--file <PATH>` on the command line
//! 2. `data_file` in `expense-tracker.json`
//! 3. `expenses.json`
//!
//! Relative paths are resolved against the base directory.

use std::path::{Path, PathBuf};

use super::settings::Settings;
use crate::error::ExpenseError;

/// Default data file name
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Settings file name
pub const SETTINGS_FILE: &str = "expense-tracker.json";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Directory that relative paths are resolved against
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create paths rooted at the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = std::env::current_dir().map_err(|e| {
            ExpenseError::Config(format!("Could not determine working directory: {}", e))
        })?;

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    /// Get the default data file path
    pub fn default_data_file(&self) -> PathBuf {
        self.base_dir.join(DEFAULT_DATA_FILE)
    }

    /// Pick the data file from the command line, settings, or the default
    pub fn data_file(&self, cli_override: Option<&Path>, settings: &Settings) -> PathBuf {
        match cli_override.or(settings.data_file.as_deref()) {
            Some(path) => self.resolve(path),
            None => self.default_data_file(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
