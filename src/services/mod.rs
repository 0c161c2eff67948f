//! Service layer for the expense tracker
//!
//! Turns raw user input into validated store operations.

pub mod expense;

pub use expense::ExpenseService;
