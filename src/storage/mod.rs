//! Storage layer for the expense tracker
//!
//! Holds the in-memory record store and the JSON file persistence behind it.

pub mod persistence;
pub mod store;

pub use persistence::{load_expenses, save_expenses, LoadedExpenses, SkippedEntry};
pub use store::{ExpenseStore, LoadReport};
