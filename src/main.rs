use std::io;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

use expense_tracker::cli::{handle_expense_command, load_on_startup, ExpenseCommands, MenuSession};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track dated, categorized expenses in a JSON file",
    long_about = "A small expense tracker. Run without a subcommand for the \
                  interactive menu, or use the subcommands for one-shot edits. \
                  Data lives in expenses.json in the working directory unless \
                  --file or the settings file says otherwise."
)]
struct Cli {
    /// Data file to load and save
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (the default)
    Menu,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let data_file = paths.data_file(cli.file.as_deref(), &settings);

    let mut store = ExpenseStore::new();

    match cli.command {
        None | Some(Commands::Menu) => {
            load_on_startup(&mut store, &data_file, &mut io::stdout())?;
            let stdin = io::stdin();
            MenuSession::new(
                &mut store,
                &settings,
                data_file,
                stdin.lock(),
                io::stdout(),
            )
            .run()?;
        }
        Some(Commands::Expense(cmd)) => {
            // Keep stdout clean for exports
            if !load_on_startup(&mut store, &data_file, &mut io::stderr())? {
                bail!(
                    "Refusing to run against unreadable data file {}",
                    data_file.display()
                );
            }
            handle_expense_command(&mut store, &settings, &data_file, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Working directory: {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Data file:         {}", data_file.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Strict dates:    {}", settings.strict_dates);
        }
    }

    Ok(())
}

/// Log to stderr; warnings only unless -v is given
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
