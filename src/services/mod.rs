//! Business logic layer
//!
//! The ledger engine plus the services that put validation and
//! authentication in front of it.

pub mod auth;
pub mod expense;
pub mod ledger;

pub use auth::AuthService;
pub use expense::{ExpenseService, NumberedExpense};
pub use ledger::{CategorySummary, Ledger};
