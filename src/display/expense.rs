//! Expense display formatting
//!
//! Tables for listings and category summaries, plus the one-line form used
//! for confirmations.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{format_amount, Expense};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format one expense with its index on a single line
pub fn format_expense_line(index: usize, expense: &Expense) -> String {
    format!("Index: {}, {}", index, expense)
}

/// Format `(index, expense)` pairs as a table
pub fn format_expense_table<'a, I>(entries: I, symbol: &str) -> String
where
    I: IntoIterator<Item = (usize, &'a Expense)>,
{
    let rows: Vec<ExpenseRow> = entries
        .into_iter()
        .map(|(index, expense)| ExpenseRow {
            index,
            date: expense.date.clone(),
            category: expense.category.clone(),
            amount: format_amount(expense.amount, symbol),
        })
        .collect();

    if rows.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format the grand total
pub fn format_total(total: f64, symbol: &str) -> String {
    format!("Total: {}", format_amount(total, symbol))
}

/// Format per-category totals as a table
pub fn format_category_summary(totals: &[(String, f64)], symbol: &str) -> String {
    if totals.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows: Vec<CategoryRow> = totals
        .iter()
        .map(|(category, total)| CategoryRow {
            category: category.clone(),
            total: format_amount(*total, symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}
