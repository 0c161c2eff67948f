//! CSV export
//!
//! One row per expense with its current index.

use std::io::Write;

use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::ExpenseStore;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Index")]
    index: usize,
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: f64,
}

/// Export all expenses to CSV
pub fn export_csv<W: Write>(store: &ExpenseStore, writer: W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    for (index, expense) in store.list_all() {
        csv_writer
            .serialize(CsvRow {
                index,
                date: &expense.date,
                category: &expense.category,
                amount: expense.amount,
            })
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    // An empty store still gets a header row
    if store.is_empty() {
        csv_writer
            .write_record(["Index", "Date", "Category", "Amount"])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
