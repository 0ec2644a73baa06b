//! Per-user expense file
//!
//! Each line holds one record as `date,category,amount`, with the amount
//! written with exactly two fractional digits. Loading is tolerant: lines
//! that can't be parsed are skipped and the rest of the file still loads.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::LedgerResult;
use crate::models::{
    parse_date, Category, Expense, ExpenseValidationError, Money, DATE_FORMAT, FIELD_DELIMITER,
};

use super::file_io::{read_text, write_text_atomic};

/// Number of fields in a well-formed line
const FIELD_COUNT: usize = 3;

/// Serialize one expense as a ledger line (without line terminator)
pub fn format_line(expense: &Expense) -> String {
    format!(
        "{}{delim}{}{delim}{}",
        expense.date().format(DATE_FORMAT),
        expense.category(),
        expense.amount().to_decimal_string(),
        delim = FIELD_DELIMITER
    )
}

/// Why a ledger line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line doesn't split into exactly three fields
    FieldCount(usize),
    InvalidDate(String),
    InvalidAmount(String),
    InvalidRecord(String),
}

impl LineError {
    /// Field-count mismatches are skipped without a diagnostic
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::FieldCount(_))
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount(n) => write!(f, "expected {} fields, found {}", FIELD_COUNT, n),
            Self::InvalidDate(s) => write!(f, "invalid date '{}'", s),
            Self::InvalidAmount(s) => write!(f, "invalid amount '{}'", s),
            Self::InvalidRecord(s) => write!(f, "invalid record: {}", s),
        }
    }
}

impl std::error::Error for LineError {}

/// Parse one ledger line
pub fn parse_line(line: &str) -> Result<Expense, LineError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(LineError::FieldCount(fields.len()));
    }

    let (date, category, amount) = (fields[0].trim(), fields[1], fields[2].trim());

    let amount = Money::parse(amount).map_err(|_| LineError::InvalidAmount(amount.to_string()))?;
    let date = parse_date(date).map_err(|_| LineError::InvalidDate(date.to_string()))?;
    let category = Category::new(category)
        .map_err(|e| LineError::InvalidRecord(ExpenseValidationError::from(e).to_string()))?;

    Expense::new(date, category, amount).map_err(|e| LineError::InvalidRecord(e.to_string()))
}

/// Backing file for one user's expenses
#[derive(Debug, Clone)]
pub struct ExpenseFile {
    path: PathBuf,
}

impl ExpenseFile {
    /// Create a handle for the expense file at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every parseable record, in file order
    ///
    /// A missing or unreadable file yields no records. Malformed lines are
    /// skipped; only lines with the right shape but bad values are reported.
    pub fn load(&self) -> Vec<Expense> {
        let contents = match read_text(&self.path) {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                debug!(path = %self.path.display(), "no expense file, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(error = %e, "could not read expense file, starting empty");
                return Vec::new();
            }
        };

        let mut expenses = Vec::new();
        for (line_num, line) in contents.lines().enumerate() {
            match parse_line(line) {
                Ok(expense) => expenses.push(expense),
                Err(e) if e.is_silent() => {}
                Err(e) => warn!(
                    path = %self.path.display(),
                    line = line_num + 1,
                    "skipping invalid expense entry: {}",
                    e
                ),
            }
        }

        debug!(path = %self.path.display(), count = expenses.len(), "loaded expenses");
        expenses
    }

    /// Replace the file contents with `expenses`, one line each
    pub fn save(&self, expenses: &[Expense]) -> LedgerResult<()> {
        let mut contents = String::new();
        for expense in expenses {
            contents.push_str(&format_line(expense));
            contents.push('\n');
        }

        write_text_atomic(&self.path, &contents)?;
        debug!(path = %self.path.display(), count = expenses.len(), "saved expenses");
        Ok(())
    }
}
