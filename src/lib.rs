//! Expense Ledger - terminal-based personal expense tracking
//!
//! This library provides the core functionality for the `ledger` binary: a
//! per-user ledger of dated expenses stored in a flat file, guarded by a
//! credential store.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, category labels, and expense records
//! - `storage`: Flat-file storage (expense files, credential store)
//! - `services`: The ledger engine, validation, and authentication
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `logging`: Diagnostic output setup
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_ledger::config::LedgerPaths;
//! use expense_ledger::services::Ledger;
//! use expense_ledger::storage::Storage;
//!
//! # fn main() -> Result<(), expense_ledger::LedgerError> {
//! let storage = Storage::new(LedgerPaths::new()?)?;
//! let ledger = Ledger::open(&storage, "alice");
//! for (category, total) in ledger.summarize_by_category() {
//!     println!("{}: {}", category, total);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
