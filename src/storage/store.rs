//! In-memory expense store
//!
//! An ordered collection of expenses addressed by position. Deleting an entry
//! shifts every later entry down by one, so positions are only meaningful
//! within a single run.

use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::persistence::{load_expenses, save_expenses, SkippedEntry};

/// Outcome of a successful load
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Number of expenses now in the store
    pub loaded: usize,
    /// File elements that were rejected
    pub skipped: Vec<SkippedEntry>,
}

/// The record store
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given expenses
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// Append an expense at the end
    pub fn add(&mut self, date: impl Into<String>, category: impl Into<String>, amount: f64) {
        let expense = Expense::new(date, category, amount);
        tracing::debug!(index = self.expenses.len(), %expense, "expense added");
        self.expenses.push(expense);
    }

    /// Replace the whole entry at `index`
    pub fn edit(
        &mut self,
        index: usize,
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> ExpenseResult<()> {
        let len = self.expenses.len();
        let slot = self
            .expenses
            .get_mut(index)
            .ok_or_else(|| ExpenseError::invalid_index(index, len))?;

        *slot = Expense::new(date, category, amount);
        tracing::debug!(index, expense = %slot, "expense updated");
        Ok(())
    }

    /// Remove the entry at `index`, returning it
    pub fn delete(&mut self, index: usize) -> ExpenseResult<Expense> {
        if index >= self.expenses.len() {
            return Err(ExpenseError::invalid_index(index, self.expenses.len()));
        }

        let removed = self.expenses.remove(index);
        tracing::debug!(index, expense = %removed, "expense deleted");
        Ok(removed)
    }

    /// Sum of all amounts
    pub fn total_amount(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// All expenses in a category (case-insensitive), in storage order
    pub fn by_category(&self, category: &str) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| e.matches_category(category))
            .cloned()
            .collect()
    }

    /// Per-category totals in first-seen order
    ///
    /// Categories that differ only by case are grouped under the spelling
    /// seen first.
    pub fn category_totals(&self) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> = Vec::new();

        for expense in &self.expenses {
            match totals
                .iter_mut()
                .find(|(name, _)| expense.matches_category(name))
            {
                Some((_, total)) => *total += expense.amount,
                None => totals.push((expense.category.clone(), expense.amount)),
            }
        }

        totals
    }

    /// Iterate `(index, expense)` pairs in storage order
    ///
    /// The iterator is lazy and can be cloned to enumerate again.
    pub fn list_all(&self) -> impl Iterator<Item = (usize, &Expense)> + Clone + '_ {
        self.expenses.iter().enumerate()
    }

    /// Get the expense at `index`
    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.expenses.get(index)
    }

    /// View the collection as a slice
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Save the collection to `path`, overwriting the file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ExpenseResult<()> {
        let path = path.as_ref();
        save_expenses(path, &self.expenses)?;
        tracing::info!(count = self.expenses.len(), path = %path.display(), "expenses saved");
        Ok(())
    }

    /// Replace the collection with the contents of `path`
    ///
    /// On any failure the collection is left exactly as it was.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> ExpenseResult<LoadReport> {
        let path = path.as_ref();
        let loaded = load_expenses(path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to load expenses");
            e
        })?;

        self.expenses = loaded.expenses;
        tracing::info!(
            count = self.expenses.len(),
            skipped = loaded.skipped.len(),
            path = %path.display(),
            "expenses loaded"
        );

        Ok(LoadReport {
            loaded: self.expenses.len(),
            skipped: loaded.skipped,
        })
    }
}
