//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod user;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use user::{handle_register, login};
