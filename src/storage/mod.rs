//! Storage layer for the expense ledger
//!
//! Provides flat-file storage with atomic writes: the credential store and
//! one expense file per user.

pub mod credentials;
pub mod expenses;
pub mod file_io;

pub use credentials::{validate_username, CredentialStore, FileCredentialStore};
pub use expenses::{format_line, parse_line, ExpenseFile, LineError};
pub use file_io::{append_line, read_text, write_text_atomic};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Main storage coordinator that hands out the stores for a data directory
pub struct Storage {
    paths: LedgerPaths,
    pub credentials: FileCredentialStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            credentials: FileCredentialStore::new(paths.users_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Expense file for `username`
    pub fn expense_file(&self, username: &str) -> ExpenseFile {
        ExpenseFile::new(self.paths.expenses_file(username))
    }
}
