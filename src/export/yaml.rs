//! YAML export

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;
use crate::storage::ExpenseStore;

/// Export the store to YAML with a short header comment
pub fn export_yaml<W: Write>(store: &ExpenseStore, mut writer: W) -> ExpenseResult<()> {
    let export = ExpenseExport::from_store(store);

    let header = format!(
        "# Expense Tracker Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
