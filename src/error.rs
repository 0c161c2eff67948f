//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Rejected user input (malformed amount, bad date, empty category)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Edit or delete addressed a position outside the collection
    #[error("Invalid index: {index} (collection has {len} entries)")]
    InvalidIndex { index: String, len: usize },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create an invalid-index error for a position (or raw user text)
    pub fn invalid_index(index: impl ToString, len: usize) -> Self {
        Self::InvalidIndex {
            index: index.to_string(),
            len,
        }
    }

    /// Check if this is an invalid-index error
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
