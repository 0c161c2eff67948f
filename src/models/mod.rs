//! Core data models for the expense tracker

pub mod amount;
pub mod expense;

pub use amount::{format_amount, parse_amount, AmountParseError};
pub use expense::{Expense, ExpenseValidationError};
