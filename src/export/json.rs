//! JSON export
//!
//! Unlike the data file, the export wraps the expenses with metadata.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::ExpenseStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of expenses
    pub expense_count: usize,

    /// Sum of all amounts
    pub total: f64,

    /// Per-category totals, first-seen order
    pub category_totals: Vec<(String, f64)>,

    /// All expenses in storage order
    pub expenses: Vec<Expense>,
}

impl ExpenseExport {
    /// Snapshot the store
    pub fn from_store(store: &ExpenseStore) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expense_count: store.len(),
            total: store.total_amount(),
            category_totals: store.category_totals(),
            expenses: store.expenses().to_vec(),
        }
    }
}

/// Export the store to JSON
pub fn export_json<W: Write>(store: &ExpenseStore, writer: W, pretty: bool) -> ExpenseResult<()> {
    let export = ExpenseExport::from_store(store);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
