//! Ledger engine
//!
//! Holds one user's expenses in insertion order and writes them back to the
//! user's expense file on request. Records are addressed by position
//! (0-based); an index past the end is ignored rather than treated as an
//! error, so a caller holding a stale listing can't corrupt the ledger.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::error::LedgerResult;
use crate::models::{Expense, Money};
use crate::storage::{ExpenseFile, Storage};

/// Category label → total spent
pub type CategorySummary = BTreeMap<String, Money>;

/// In-memory expense ledger bound to one user
#[derive(Debug)]
pub struct Ledger {
    username: String,
    file: ExpenseFile,
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Open the ledger for `username`, loading its existing records
    pub fn open(storage: &Storage, username: &str) -> Self {
        Self::load(username, storage.expense_file(username))
    }

    /// Build a ledger from an explicit backing file
    pub fn load(username: impl Into<String>, file: ExpenseFile) -> Self {
        let username = username.into();
        let expenses = file.load();
        info!(%username, count = expenses.len(), "opened ledger");

        Self {
            username,
            file,
            expenses,
        }
    }

    /// Owner of this ledger
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Get the record at `index`
    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.expenses.get(index)
    }

    /// Append a record
    pub fn insert(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Overwrite the record at `index`, returning the previous one
    ///
    /// Out-of-range indices leave the ledger untouched and return `None`.
    pub fn replace(&mut self, index: usize, expense: Expense) -> Option<Expense> {
        match self.expenses.get_mut(index) {
            Some(slot) => Some(std::mem::replace(slot, expense)),
            None => {
                debug!(index, len = self.expenses.len(), "replace ignored, index out of range");
                None
            }
        }
    }

    /// Delete the record at `index`, shifting later records down
    ///
    /// Out-of-range indices leave the ledger untouched and return `None`.
    pub fn remove(&mut self, index: usize) -> Option<Expense> {
        if index < self.expenses.len() {
            Some(self.expenses.remove(index))
        } else {
            debug!(index, len = self.expenses.len(), "remove ignored, index out of range");
            None
        }
    }

    /// Copy of all records in order
    pub fn list(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    /// Total amount per category, recomputed from the current records
    pub fn summarize_by_category(&self) -> CategorySummary {
        let mut summary = CategorySummary::new();
        for expense in &self.expenses {
            *summary
                .entry(expense.category().as_str().to_string())
                .or_default() += expense.amount();
        }
        summary
    }

    /// Sum of every record
    pub fn total(&self) -> Money {
        self.expenses.iter().map(Expense::amount).sum()
    }

    /// Overwrite the backing file with the current records
    ///
    /// On failure the in-memory records are left as they were.
    pub fn persist(&self) -> LedgerResult<()> {
        self.file.save(&self.expenses)
    }
}
