//! Expense CLI commands
//!
//! Implements the commands that read and change a user's ledger.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_category_summary, format_expense_list};
use crate::error::LedgerResult;
use crate::services::ExpenseService;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Expense date (YYYY-MM-DD)
        date: String,
        /// Category label (no commas)
        category: String,
        /// Amount (e.g. "12" or "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List expenses with their numbers
    #[command(alias = "ls")]
    List,

    /// Replace an expense by its listed number
    Edit {
        /// Number shown by 'ledger list'
        number: usize,
        /// New date (YYYY-MM-DD)
        date: String,
        /// New category label
        category: String,
        /// New amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Delete an expense by its listed number
    #[command(alias = "rm")]
    Delete {
        /// Number shown by 'ledger list'
        number: usize,
    },

    /// Show totals per category
    Summary,
}

/// Handle an expense command for an authenticated user
pub fn handle_expense_command(
    service: &mut ExpenseService,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            date,
            category,
            amount,
        } => {
            let expense = service.add(&date, &category, &amount)?;
            println!("Expense added: #{}", service.ledger().len());
            println!("  Date:     {}", expense.date());
            println!("  Category: {}", expense.category());
            println!("  Amount:   {}", expense.amount().format_with_symbol(symbol));
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_list(&service.list(), symbol));
        }

        ExpenseCommands::Edit {
            number,
            date,
            category,
            amount,
        } => {
            let previous = service.edit(number, &date, &category, &amount)?;
            println!("Updated expense #{}", number);
            println!("  Was: {}", previous.format_with_symbol(symbol));
        }

        ExpenseCommands::Delete { number } => {
            let removed = service.delete(number)?;
            println!(
                "Deleted expense #{}: {}",
                number,
                removed.format_with_symbol(symbol)
            );
        }

        ExpenseCommands::Summary => {
            print!("{}", format_category_summary(&service.summary(), symbol));
        }
    }

    Ok(())
}
