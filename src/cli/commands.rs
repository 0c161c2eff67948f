//! One-shot expense commands
//!
//! Each subcommand runs a single operation against the data file. Commands
//! that change the collection save it straight away.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::{
    format_category_summary, format_expense_line, format_expense_table, format_total,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_csv, export_json, export_yaml};
use crate::services::ExpenseService;
use crate::storage::ExpenseStore;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV rows
    Csv,
    /// JSON with metadata
    Json,
    /// YAML with metadata, human-readable
    Yaml,
}

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add an expense
    Add {
        /// Date (free text unless strict dates are enabled)
        date: String,
        /// Category name
        category: String,
        /// Amount, e.g. 12.50
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Replace the expense at an index
    Edit {
        /// Index shown by `list`
        index: String,
        /// New date
        date: String,
        /// New category
        category: String,
        /// New amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Delete the expense at an index
    Delete {
        /// Index shown by `list`
        index: String,
    },
    /// List expenses
    List {
        /// Only show this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show the total of all expenses
    Total {
        /// Break the total down per category
        #[arg(long)]
        by_category: bool,
    },
    /// Export expenses to another format
    Export {
        /// Export format (`-f` is the global data file flag)
        #[arg(short = 'F', long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &mut ExpenseStore,
    settings: &Settings,
    data_file: &Path,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            date,
            category,
            amount,
        } => {
            let index = ExpenseService::new(store, settings).add(&date, &category, &amount)?;
            store.save(data_file)?;
            if let Some(expense) = store.get(index) {
                println!("Added: {}", format_expense_line(index, expense));
            }
        }

        ExpenseCommands::Edit {
            index,
            date,
            category,
            amount,
        } => {
            let index =
                ExpenseService::new(store, settings).edit(&index, &date, &category, &amount)?;
            store.save(data_file)?;
            if let Some(expense) = store.get(index) {
                println!("Updated: {}", format_expense_line(index, expense));
            }
        }

        ExpenseCommands::Delete { index } => {
            let (index, removed) = ExpenseService::new(store, settings).delete(&index)?;
            store.save(data_file)?;
            println!("Deleted: {}", format_expense_line(index, &removed));
        }

        ExpenseCommands::List { category } => match category {
            Some(category) => {
                let subtotal: f64 = store.by_category(&category).iter().map(|e| e.amount).sum();
                let matching = store
                    .list_all()
                    .filter(|(_, e)| e.matches_category(&category));
                print!("{}", format_expense_table(matching, symbol));
                println!("{}", format_total(subtotal, symbol));
            }
            None => {
                print!("{}", format_expense_table(store.list_all(), symbol));
                println!("{}", format_total(store.total_amount(), symbol));
            }
        },

        ExpenseCommands::Total { by_category } => {
            if by_category {
                print!("{}", format_category_summary(&store.category_totals(), symbol));
            }
            println!("{}", format_total(store.total_amount(), symbol));
        }

        ExpenseCommands::Export {
            format,
            output,
            pretty,
        } => match output {
            Some(path) => {
                let file = File::create(&path).map_err(|e| {
                    ExpenseError::Export(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let mut writer = BufWriter::new(file);
                write_export(store, format, pretty, &mut writer)?;
                writer.flush()?;
                println!("Exported {} expenses to: {}", store.len(), path.display());
            }
            None => {
                let stdout = io::stdout();
                let mut writer = stdout.lock();
                write_export(store, format, pretty, &mut writer)?;
                writeln!(writer)?;
            }
        },
    }

    Ok(())
}

fn write_export<W: Write>(
    store: &ExpenseStore,
    format: ExportFormat,
    pretty: bool,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_csv(store, writer),
        ExportFormat::Json => export_json(store, writer, pretty),
        ExportFormat::Yaml => export_yaml(store, writer),
    }
}
