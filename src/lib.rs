//! Expense Tracker - command-line expense tracking backed by a JSON file
//!
//! This library provides the core functionality for the `expenses` binary:
//! an ordered, in-memory store of dated, categorized expenses that is loaded
//! from and saved to a single JSON file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file resolution and user settings
//! - `error`: Custom error types
//! - `models`: The expense record and amount parsing
//! - `storage`: The record store and its JSON persistence
//! - `services`: Input validation in front of the store
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML exports
//! - `cli`: Interactive menu and one-shot commands
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::storage::ExpenseStore;
//!
//! let mut store = ExpenseStore::new();
//! store.add("2024-01-01", "Food", 12.5);
//! store.add("2024-01-02", "Transport", 3.0);
//! assert_eq!(store.total_amount(), 15.5);
//! store.save("expenses.json")?;
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
