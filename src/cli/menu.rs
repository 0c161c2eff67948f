//! Interactive numbered menu
//!
//! Reads one line at a time from any `BufRead` and writes to any `Write`, so
//! the whole loop can be driven from a script of input lines.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::display::{format_expense_table, format_total};
use crate::error::ExpenseResult;
use crate::services::ExpenseService;
use crate::storage::ExpenseStore;

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Edit,
    Delete,
    List,
    Save,
    Exit,
    Total,
    FilterByCategory,
}

impl MenuChoice {
    /// All entries in menu order
    pub const ALL: [MenuChoice; 8] = [
        Self::Add,
        Self::Edit,
        Self::Delete,
        Self::List,
        Self::Save,
        Self::Exit,
        Self::Total,
        Self::FilterByCategory,
    ];

    /// Parse the number the user typed
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Edit),
            "3" => Some(Self::Delete),
            "4" => Some(Self::List),
            "5" => Some(Self::Save),
            "6" => Some(Self::Exit),
            "7" => Some(Self::Total),
            "8" => Some(Self::FilterByCategory),
            _ => None,
        }
    }

    fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).map_or(0, |i| i + 1)
    }

    fn label(self) -> &'static str {
        match self {
            Self::Add => "Add Expense",
            Self::Edit => "Edit Expense",
            Self::Delete => "Delete Expense",
            Self::List => "Print All Expenses",
            Self::Save => "Save Expenses to File",
            Self::Exit => "Exit",
            Self::Total => "Show Total",
            Self::FilterByCategory => "Filter by Category",
        }
    }
}

/// An interactive session over a store
pub struct MenuSession<'a, R, W> {
    store: &'a mut ExpenseStore,
    settings: &'a Settings,
    data_file: PathBuf,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    /// Create a session that saves to `data_file`
    pub fn new(
        store: &'a mut ExpenseStore,
        settings: &'a Settings,
        data_file: PathBuf,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            settings,
            data_file,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    ///
    /// Nothing is saved on exit; saving only happens through the menu.
    pub fn run(&mut self) -> ExpenseResult<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(
                    self.output,
                    "Invalid choice. Please enter a number between 1 and {}.",
                    MenuChoice::ALL.len()
                )?;
                continue;
            };

            tracing::debug!(?choice, "menu selection");

            let finished = match choice {
                MenuChoice::Add => self.add()?,
                MenuChoice::Edit => self.edit()?,
                MenuChoice::Delete => self.delete()?,
                MenuChoice::List => self.list()?,
                MenuChoice::Save => self.save()?,
                MenuChoice::Total => self.total()?,
                MenuChoice::FilterByCategory => self.filter()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting program.")?;
                    true
                }
            };

            if finished {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> ExpenseResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "===== Expense Tracker Menu =====")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for date, category and amount; `None` at end of input
    fn prompt_fields(&mut self, prefix: &str) -> ExpenseResult<Option<(String, String, String)>> {
        let date_prompt = format!("Enter {}date ({}): ", prefix, self.settings.date_hint());
        let Some(date) = self.prompt(&date_prompt)? else {
            return Ok(None);
        };
        let Some(category) = self.prompt(&format!("Enter {}category: ", prefix))? else {
            return Ok(None);
        };
        let Some(amount) = self.prompt(&format!("Enter {}amount: ", prefix))? else {
            return Ok(None);
        };
        Ok(Some((date, category, amount)))
    }

    // Each action returns true when input ran out and the loop should stop.

    fn add(&mut self) -> ExpenseResult<bool> {
        let Some((date, category, amount)) = self.prompt_fields("")? else {
            return Ok(true);
        };

        let result = ExpenseService::new(&mut *self.store, self.settings).add(&date, &category, &amount);
        match result {
            Ok(_) => writeln!(self.output, "Expense added successfully.")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(false)
    }

    fn edit(&mut self) -> ExpenseResult<bool> {
        let Some(index) = self.prompt("Enter index of expense to edit: ")? else {
            return Ok(true);
        };

        // Reject a bad index before asking for the new values
        if let Err(e) = ExpenseService::new(&mut *self.store, self.settings).parse_index(&index) {
            writeln!(self.output, "{}", e)?;
            return Ok(false);
        }

        let Some((date, category, amount)) = self.prompt_fields("new ")? else {
            return Ok(true);
        };

        let result =
            ExpenseService::new(&mut *self.store, self.settings).edit(&index, &date, &category, &amount);
        match result {
            Ok(index) => writeln!(self.output, "Expense at index {} updated successfully.", index)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(false)
    }

    fn delete(&mut self) -> ExpenseResult<bool> {
        let Some(index) = self.prompt("Enter index of expense to delete: ")? else {
            return Ok(true);
        };

        let result = ExpenseService::new(&mut *self.store, self.settings).delete(&index);
        match result {
            Ok((index, _)) => {
                writeln!(self.output, "Expense at index {} deleted successfully.", index)?
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(false)
    }

    fn list(&mut self) -> ExpenseResult<bool> {
        let symbol = &self.settings.currency_symbol;
        write!(
            self.output,
            "{}",
            format_expense_table(self.store.list_all(), symbol)
        )?;
        if !self.store.is_empty() {
            writeln!(self.output, "{}", format_total(self.store.total_amount(), symbol))?;
        }
        Ok(false)
    }

    fn save(&mut self) -> ExpenseResult<bool> {
        match self.store.save(&self.data_file) {
            Ok(()) => writeln!(
                self.output,
                "Expenses saved to {}.",
                self.data_file.display()
            )?,
            Err(e) => writeln!(
                self.output,
                "Error saving expenses to {}: {}",
                self.data_file.display(),
                e
            )?,
        }
        Ok(false)
    }

    fn total(&mut self) -> ExpenseResult<bool> {
        writeln!(
            self.output,
            "{}",
            format_total(self.store.total_amount(), &self.settings.currency_symbol)
        )?;
        Ok(false)
    }

    fn filter(&mut self) -> ExpenseResult<bool> {
        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(true);
        };

        let matches = self.store.by_category(&category);
        if matches.is_empty() {
            writeln!(self.output, "No expenses in category '{}'.", category)?;
            return Ok(false);
        }

        let symbol = &self.settings.currency_symbol;
        let indexed = self
            .store
            .list_all()
            .filter(|(_, e)| e.matches_category(&category));
        write!(self.output, "{}", format_expense_table(indexed, symbol))?;

        let subtotal: f64 = matches.iter().map(|e| e.amount).sum();
        writeln!(
            self.output,
            "{} expense(s) in '{}'. {}",
            matches.len(),
            category,
            format_total(subtotal, symbol)
        )?;
        Ok(false)
    }
}
