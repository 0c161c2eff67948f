//! Display formatting for terminal output

pub mod expense;

pub use expense::{
    format_category_summary, format_expense_line, format_expense_table, format_total,
};
