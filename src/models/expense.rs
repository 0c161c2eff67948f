//! Expense model
//!
//! A single recorded transaction. Expenses carry no identifier of their own;
//! an entry is addressed by its position in the store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Caller-supplied date, free text unless strict dates are enabled
    pub date: String,

    /// Category name, matched case-insensitively
    pub category: String,

    /// Amount in the user's currency
    pub amount: f64,
}

impl Expense {
    /// Create a new expense
    pub fn new(date: impl Into<String>, category: impl Into<String>, amount: f64) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
        }
    }

    /// Normalize a category name for matching
    pub fn normalize_category(category: &str) -> String {
        category.to_lowercase()
    }

    /// Check if this expense belongs to a category (case-insensitive)
    pub fn matches_category(&self, category: &str) -> bool {
        Self::normalize_category(&self.category) == Self::normalize_category(category)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::NonFiniteAmount);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {}, Category: {}, Amount: {}",
            self.date, self.category, self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyCategory,
    NonFiniteAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::NonFiniteAmount => write!(f, "Amount must be a finite number"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new("2024-01-01", "Food", 12.5);
        assert_eq!(expense.date, "2024-01-01");
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.amount, 12.5);
    }

    #[test]
    fn test_category_matching() {
        let expense = Expense::new("2024-01-01", "Food", 12.5);
        assert!(expense.matches_category("Food"));
        assert!(expense.matches_category("FOOD"));
        assert!(expense.matches_category("food"));
        assert!(!expense.matches_category("Transport"));
        // Whitespace is significant, only case is folded
        assert!(!expense.matches_category(" food"));
    }

    #[test]
    fn test_validation() {
        let mut expense = Expense::new("2024-01-01", "Food", 1.0);
        assert!(expense.validate().is_ok());

        expense.category = "   ".into();
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::EmptyCategory)
        );

        expense.category = "Food".into();
        expense.amount = f64::NAN;
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NonFiniteAmount)
        );
    }

    #[test]
    fn test_long_categories_are_valid() {
        let ascii = Expense::new("2024-01-01", "a".repeat(500), 1.0);
        assert!(ascii.validate().is_ok());

        let cyrillic = Expense::new("2024-01-01", "е".repeat(60), 1.0);
        assert!(cyrillic.validate().is_ok());
    }

    #[test]
    fn test_display() {
        let expense = Expense::new("2024-01-02", "Transport", 3.0);
        assert_eq!(
            expense.to_string(),
            "Date: 2024-01-02, Category: Transport, Amount: 3"
        );
    }

    #[test]
    fn test_serialization_field_names() {
        let expense = Expense::new("2024-01-01", "Food", 12.5);
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"date": "2024-01-01", "category": "Food", "amount": 12.5})
        );
    }
}
