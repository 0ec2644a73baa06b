//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display.

pub mod expense;

pub use expense::{format_category_summary, format_expense_list};
