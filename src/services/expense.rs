//! Expense service
//!
//! Parses and validates what the user typed before it reaches the store.
//! Amounts must be finite numbers, indexes must be in range, categories must
//! be non-empty, and dates are checked only when strict dates are enabled.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_amount, Expense};
use crate::storage::ExpenseStore;

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a mut ExpenseStore,
    settings: &'a Settings,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a mut ExpenseStore, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    /// Add an expense from raw input, returning its index
    pub fn add(&mut self, date: &str, category: &str, amount: &str) -> ExpenseResult<usize> {
        let expense = self.build(date, category, amount)?;
        self.store.add(expense.date, expense.category, expense.amount);
        Ok(self.store.len() - 1)
    }

    /// Replace the expense at a raw index
    pub fn edit(
        &mut self,
        index: &str,
        date: &str,
        category: &str,
        amount: &str,
    ) -> ExpenseResult<usize> {
        let index = self.parse_index(index)?;
        let expense = self.build(date, category, amount)?;
        self.store
            .edit(index, expense.date, expense.category, expense.amount)?;
        Ok(index)
    }

    /// Delete the expense at a raw index, returning the removed entry
    pub fn delete(&mut self, index: &str) -> ExpenseResult<(usize, Expense)> {
        let index = self.parse_index(index)?;
        let removed = self.store.delete(index)?;
        Ok((index, removed))
    }

    /// Parse an index and check it against the current collection
    ///
    /// Text that is not a non-negative integer is reported as an invalid
    /// index, the same as an out-of-range number.
    pub fn parse_index(&self, input: &str) -> ExpenseResult<usize> {
        let input = input.trim();
        let len = self.store.len();

        match input.parse::<usize>() {
            Ok(index) if index < len => Ok(index),
            _ => Err(ExpenseError::invalid_index(input, len)),
        }
    }

    /// Validate raw fields into an expense
    fn build(&self, date: &str, category: &str, amount: &str) -> ExpenseResult<Expense> {
        let date = date.trim();
        self.check_date(date)?;

        let amount = parse_amount(amount).map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let expense = Expense::new(date, category.trim(), amount);
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        Ok(expense)
    }

    fn check_date(&self, date: &str) -> ExpenseResult<()> {
        if !self.settings.strict_dates {
            return Ok(());
        }

        NaiveDate::parse_from_str(date, &self.settings.date_format)
            .map(|_| ())
            .map_err(|e| {
                ExpenseError::Validation(format!(
                    "Invalid date '{}' (expected {}): {}",
                    date,
                    self.settings.date_hint(),
                    e
                ))
            })
    }
}
