//! Core data models for the expense ledger
//!
//! This module contains the value types recorded in a ledger: money amounts,
//! category labels, and the expenses that combine them.

pub mod category;
pub mod expense;
pub mod money;

pub use category::{Category, CategoryValidationError, FIELD_DELIMITER};
pub use expense::{parse_date, Expense, ExpenseValidationError, DATE_FORMAT, MAX_AMOUNT};
pub use money::{Money, MoneyParseError};
