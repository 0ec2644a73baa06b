//! Expense service
//!
//! Validates raw user input before it reaches the ledger, translates the
//! 1-based numbers shown to users into ledger positions, and persists after
//! every confirmed change.

use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;
use crate::storage::Storage;

use super::ledger::{CategorySummary, Ledger};

/// An expense together with the number it is listed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedExpense {
    pub number: usize,
    pub expense: Expense,
}

/// Service for one user's expenses
pub struct ExpenseService {
    ledger: Ledger,
}

impl ExpenseService {
    /// Open the ledger of an authenticated user
    pub fn open(storage: &Storage, username: &str) -> Self {
        Self::new(Ledger::open(storage, username))
    }

    /// Wrap an already loaded ledger
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    /// The underlying ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Map a displayed number onto a ledger index
    fn index_for(&self, number: usize) -> LedgerResult<usize> {
        if number == 0 || number > self.ledger.len() {
            return Err(LedgerError::expense_not_found(number));
        }
        Ok(number - 1)
    }

    /// Validate and record a new expense
    pub fn add(&mut self, date: &str, category: &str, amount: &str) -> LedgerResult<Expense> {
        let expense = Expense::parse(date, category, amount)?;

        self.ledger.insert(expense.clone());
        self.ledger.persist()?;

        info!(user = %self.ledger.username(), %expense, "added expense");
        Ok(expense)
    }

    /// Replace the expense listed as `number` with re-validated input
    ///
    /// Returns the expense that was replaced.
    pub fn edit(
        &mut self,
        number: usize,
        date: &str,
        category: &str,
        amount: &str,
    ) -> LedgerResult<Expense> {
        let index = self.index_for(number)?;
        let expense = Expense::parse(date, category, amount)?;

        let previous = self
            .ledger
            .replace(index, expense)
            .ok_or_else(|| LedgerError::expense_not_found(number))?;
        self.ledger.persist()?;

        info!(user = %self.ledger.username(), number, "edited expense");
        Ok(previous)
    }

    /// Delete the expense listed as `number`
    pub fn delete(&mut self, number: usize) -> LedgerResult<Expense> {
        let index = self.index_for(number)?;

        let removed = self
            .ledger
            .remove(index)
            .ok_or_else(|| LedgerError::expense_not_found(number))?;
        self.ledger.persist()?;

        info!(user = %self.ledger.username(), number, "deleted expense");
        Ok(removed)
    }

    /// All expenses with their 1-based numbers
    pub fn list(&self) -> Vec<NumberedExpense> {
        self.ledger
            .list()
            .into_iter()
            .enumerate()
            .map(|(i, expense)| NumberedExpense {
                number: i + 1,
                expense,
            })
            .collect()
    }

    /// Totals per category
    pub fn summary(&self) -> CategorySummary {
        self.ledger.summarize_by_category()
    }

    /// Explicitly write the ledger to disk
    pub fn save(&self) -> LedgerResult<()> {
        self.ledger.persist()
    }
}
