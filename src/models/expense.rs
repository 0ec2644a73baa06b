//! Expense model
//!
//! An expense is an immutable (date, category, amount) record. Construction
//! validates every field, so an `Expense` value is always storable.

use chrono::NaiveDate;
use std::fmt;

use super::category::{Category, CategoryValidationError};
use super::money::{Money, MoneyParseError};
use crate::error::{LedgerError, LedgerResult};

/// Textual date format used on input and in the ledger file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-MM-dd` date, rejecting dates that don't exist (e.g. Feb 30)
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
}

/// Largest accepted amount (10 trillion in cents)
pub const MAX_AMOUNT: Money = Money::from_cents(1_000_000_000_000_000);

/// A single dated expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    date: NaiveDate,
    category: Category,
    amount: Money,
}

impl Expense {
    /// Create a new expense from validated parts
    ///
    /// # Errors
    ///
    /// Returns `ExpenseValidationError::NegativeAmount` for amounts below zero
    /// and `ExpenseValidationError::AmountTooLarge` above [`MAX_AMOUNT`].
    pub fn new(
        date: NaiveDate,
        category: Category,
        amount: Money,
    ) -> Result<Self, ExpenseValidationError> {
        if amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(amount));
        }
        if amount > MAX_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(amount));
        }

        Ok(Self {
            date,
            category,
            amount,
        })
    }

    /// Build an expense from raw user input
    pub fn parse(date: &str, category: &str, amount: &str) -> LedgerResult<Self> {
        let date = parse_date(date).map_err(|e| {
            LedgerError::Validation(format!(
                "Invalid date '{}': {} (expected yyyy-MM-dd)",
                date.trim(),
                e
            ))
        })?;
        let category = Category::new(category).map_err(ExpenseValidationError::from)?;
        let amount = Money::parse(amount).map_err(ExpenseValidationError::from)?;

        Ok(Self::new(date, category, amount)?)
    }

    /// Date of the expense
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Category label
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Amount spent
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Format as `date category amount` using the given currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!(
            "{} {} {}",
            self.date.format(DATE_FORMAT),
            self.category,
            self.amount.format_with_symbol(symbol)
        )
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
    InvalidAmount(MoneyParseError),
    InvalidCategory(CategoryValidationError),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative: {}", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount exceeds {}: {}", MAX_AMOUNT, amount)
            }
            Self::InvalidAmount(e) => write!(f, "{}", e),
            Self::InvalidCategory(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

impl From<MoneyParseError> for ExpenseValidationError {
    fn from(err: MoneyParseError) -> Self {
        Self::InvalidAmount(err)
    }
}

impl From<CategoryValidationError> for ExpenseValidationError {
    fn from(err: CategoryValidationError) -> Self {
        Self::InvalidCategory(err)
    }
}

impl From<ExpenseValidationError> for LedgerError {
    fn from(err: ExpenseValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
