//! CLI command handlers
//!
//! This module contains the interactive menu and the one-shot subcommands,
//! bridging user input with the service layer.

pub mod commands;
pub mod menu;

pub use commands::{handle_expense_command, ExpenseCommands, ExportFormat};
pub use menu::{MenuChoice, MenuSession};

use std::io::Write;
use std::path::Path;

use crate::error::ExpenseResult;
use crate::storage::ExpenseStore;

/// Load the data file at startup, reporting rather than failing
///
/// A missing file just means a first run. Any other failure is reported and
/// the store stays empty. Returns false when the file exists but could not
/// be loaded.
pub fn load_on_startup<W: Write>(
    store: &mut ExpenseStore,
    data_file: &Path,
    out: &mut W,
) -> ExpenseResult<bool> {
    if !data_file.exists() {
        writeln!(
            out,
            "No saved expenses at {}; starting with an empty list.",
            data_file.display()
        )?;
        return Ok(true);
    }

    match store.load(data_file) {
        Ok(report) => {
            writeln!(
                out,
                "Expenses loaded from {} ({} entries).",
                data_file.display(),
                report.loaded
            )?;
            for skipped in &report.skipped {
                writeln!(
                    out,
                    "Skipped malformed entry at position {}: {}",
                    skipped.position, skipped.reason
                )?;
            }
            Ok(true)
        }
        Err(e) => {
            writeln!(
                out,
                "Error loading expenses from {}: {}",
                data_file.display(),
                e
            )?;
            Ok(false)
        }
    }
}
