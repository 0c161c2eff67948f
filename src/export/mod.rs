//! Export module for the expense tracker
//!
//! Snapshots of the collection in other formats:
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable export with metadata
//! - YAML: human-readable export with metadata

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use self::json::{export_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;
