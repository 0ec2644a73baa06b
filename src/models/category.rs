//! Category label model
//!
//! A category is a free-text label on an expense. Labels are stored inside
//! comma-delimited lines, so the delimiter and line breaks are not allowed.

use std::fmt;

/// Field delimiter of the ledger file format
pub const FIELD_DELIMITER: char = ',';

/// A validated category label (trimmed, no delimiter, no line breaks)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(String);

impl Category {
    /// Create a category from a raw label
    ///
    /// Leading and trailing whitespace is stripped. An empty label is allowed.
    pub fn new(name: impl AsRef<str>) -> Result<Self, CategoryValidationError> {
        let name = name.as_ref().trim();

        if name.contains(FIELD_DELIMITER) {
            return Err(CategoryValidationError::ContainsDelimiter);
        }

        if name.contains(['\n', '\r']) {
            return Err(CategoryValidationError::ContainsLineBreak);
        }

        Ok(Self(name.to_string()))
    }

    /// Get the label
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the label is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation errors for category labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    ContainsDelimiter,
    ContainsLineBreak,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContainsDelimiter => write!(f, "Category cannot contain commas"),
            Self::ContainsLineBreak => write!(f, "Category cannot contain line breaks"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
