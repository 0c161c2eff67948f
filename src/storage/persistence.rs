//! Expense file persistence
//!
//! The data file is a pretty-printed JSON array of `{date, category, amount}`
//! objects. Saving rewrites the whole file. Loading parses the array
//! generically and coerces each element into an [`Expense`]; elements that
//! cannot be coerced are skipped and reported rather than trusted.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_amount, Expense};

/// An element of the data file that was not loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Position of the element in the JSON array
    pub position: usize,
    /// Why it was rejected
    pub reason: String,
}

/// Result of reading a data file
#[derive(Debug, Clone, Default)]
pub struct LoadedExpenses {
    pub expenses: Vec<Expense>,
    pub skipped: Vec<SkippedEntry>,
}

/// Write the full collection to `path`, replacing any existing file
///
/// The array is written to a sibling temp file and renamed over the target,
/// so a failed save leaves the previous file in place.
pub fn save_expenses<P: AsRef<Path>>(path: P, expenses: &[Expense]) -> ExpenseResult<()> {
    let path = path.as_ref();
    let storage_err = |what: &str, e: &dyn std::fmt::Display| {
        ExpenseError::Storage(format!("Failed to {} {}: {}", what, path.display(), e))
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| storage_err("create directory for", &e))?;
    }

    let temp_path = staging_path(path);
    let file = File::create(&temp_path).map_err(|e| storage_err("stage", &e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, expenses)
        .map_err(|e| storage_err("serialize expenses for", &e))?;
    writer.flush().map_err(|e| storage_err("write", &e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_err("sync", &e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        storage_err("replace", &e)
    })
}

/// Temp file next to the data file so the rename stays on one filesystem
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn read_document(path: &Path) -> ExpenseResult<Value> {
    if !path.exists() {
        return Err(ExpenseError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ExpenseError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read and coerce the collection stored at `path`
///
/// Fails when the file is missing, unreadable, not JSON, or not a JSON array.
pub fn load_expenses<P: AsRef<Path>>(path: P) -> ExpenseResult<LoadedExpenses> {
    let path = path.as_ref();
    let document = read_document(path)?;

    let elements = match document {
        Value::Array(elements) => elements,
        other => {
            return Err(ExpenseError::Storage(format!(
                "Expected a JSON array in {}, found {}",
                path.display(),
                json_kind(&other)
            )))
        }
    };

    let mut loaded = LoadedExpenses::default();
    for (position, element) in elements.iter().enumerate() {
        match coerce_expense(element) {
            Ok(expense) => loaded.expenses.push(expense),
            Err(reason) => {
                tracing::warn!(position, %reason, path = %path.display(), "skipping malformed expense");
                loaded.skipped.push(SkippedEntry { position, reason });
            }
        }
    }

    Ok(loaded)
}

/// Coerce one parsed JSON element into an expense
fn coerce_expense(element: &Value) -> Result<Expense, String> {
    let fields = element
        .as_object()
        .ok_or_else(|| format!("expected an object, found {}", json_kind(element)))?;

    let date = text_field(fields, "date")?;
    let category = text_field(fields, "category")?;

    let amount = match fields.get("amount") {
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|a| a.is_finite())
            .ok_or_else(|| format!("amount {} is not a finite number", n))?,
        Some(Value::String(s)) => parse_amount(s).map_err(|e| e.to_string())?,
        Some(other) => return Err(format!("amount is {}, not a number", json_kind(other))),
        None => return Err("missing amount".to_string()),
    };

    Ok(Expense::new(date, category, amount))
}

/// Missing or null text fields become empty strings
fn text_field(fields: &Map<String, Value>, name: &str) -> Result<String, String> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(format!("{} is {}, not a string", name, json_kind(other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
