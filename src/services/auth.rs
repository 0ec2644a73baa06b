//! Authentication service
//!
//! Registration and login on top of any `CredentialStore`.

use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::storage::CredentialStore;

/// Service for user registration and login
pub struct AuthService<'a, S: CredentialStore> {
    store: &'a S,
}

impl<'a, S: CredentialStore> AuthService<'a, S> {
    /// Create a new auth service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Register a new user; the username is trimmed first
    pub fn register(&self, username: &str, password: &str) -> LedgerResult<String> {
        let username = username.trim();
        self.store.register(username, password)?;
        Ok(username.to_string())
    }

    /// Check credentials, returning the trimmed username on success
    pub fn login(&self, username: &str, password: &str) -> LedgerResult<String> {
        let username = username.trim();

        if username.is_empty() || password.is_empty() {
            return Err(LedgerError::Auth(
                "Username and password are required".into(),
            ));
        }

        if !self.store.validate(username, password) {
            warn!(username, "login rejected");
            return Err(LedgerError::Auth("Invalid username or password".into()));
        }

        debug!(username, "login accepted");
        Ok(username.to_string())
    }
}
