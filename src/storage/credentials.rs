//! Credential store
//!
//! Maps usernames to password verifiers. The file backend keeps one
//! `username,<argon2id PHC hash>` line per user and only ever appends.

use std::path::PathBuf;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use tracing::{info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::FIELD_DELIMITER;

use super::file_io::{append_line, read_text};

/// Keyed durable store of user credentials
pub trait CredentialStore {
    /// Check whether a user is registered
    fn exists(&self, username: &str) -> bool;

    /// Check a username/password pair
    fn validate(&self, username: &str, password: &str) -> bool;

    /// Register a new user
    ///
    /// # Errors
    ///
    /// `Validation` for an empty or unusable username or an empty password,
    /// `Duplicate` if the username is taken.
    fn register(&self, username: &str, password: &str) -> LedgerResult<()>;
}

/// Check that a username is non-empty and safe to embed in the credential
/// line and in the expense file name
pub fn validate_username(username: &str) -> LedgerResult<()> {
    if username.is_empty() {
        return Err(LedgerError::Validation("Username cannot be empty".into()));
    }

    if username.contains(FIELD_DELIMITER) {
        return Err(LedgerError::Validation(
            "Username cannot contain commas".into(),
        ));
    }

    if username.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(LedgerError::Validation(
            "Username cannot contain whitespace".into(),
        ));
    }

    if username.contains(['/', '\\']) || username.starts_with('.') {
        return Err(LedgerError::Validation(format!(
            "Username '{}' is not a valid file name",
            username
        )));
    }

    Ok(())
}

/// One parsed line of the credential file
struct CredentialEntry {
    username: String,
    verifier: String,
}

/// Flat-file credential store
pub struct FileCredentialStore {
    path: PathBuf,
    hasher: Argon2<'static>,
}

impl FileCredentialStore {
    /// Create a store backed by `path`, hashing with Argon2id defaults
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            hasher: Argon2::default(),
        }
    }

    /// Create a store with explicit Argon2id cost parameters
    pub fn with_params(path: PathBuf, params: Params) -> Self {
        Self {
            path,
            hasher: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_entries(&self) -> LedgerResult<Vec<CredentialEntry>> {
        let Some(contents) = read_text(&self.path)? else {
            return Ok(Vec::new());
        };

        Ok(contents
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                let (username, verifier) = line
                    .split_once(FIELD_DELIMITER)
                    .unwrap_or((line, ""));
                CredentialEntry {
                    username: username.to_string(),
                    verifier: verifier.to_string(),
                }
            })
            .collect())
    }

    fn hash_password(&self, password: &str) -> LedgerResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .hasher
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| LedgerError::Storage(format!("Password hashing failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(&self, entry: &CredentialEntry, password: &str) -> bool {
        match PasswordHash::new(&entry.verifier) {
            Ok(hash) => self
                .hasher
                .verify_password(password.as_bytes(), &hash)
                .is_ok(),
            Err(e) => {
                warn!(username = %entry.username, error = %e, "stored credential is not a password hash");
                false
            }
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn exists(&self, username: &str) -> bool {
        match self.read_entries() {
            Ok(entries) => entries.iter().any(|e| e.username == username),
            Err(e) => {
                warn!(error = %e, "could not read credential store");
                false
            }
        }
    }

    fn validate(&self, username: &str, password: &str) -> bool {
        match self.read_entries() {
            Ok(entries) => entries
                .iter()
                .filter(|e| e.username == username)
                .any(|e| self.verify(e, password)),
            Err(e) => {
                warn!(error = %e, "could not read credential store");
                false
            }
        }
    }

    fn register(&self, username: &str, password: &str) -> LedgerResult<()> {
        validate_username(username)?;
        if password.is_empty() {
            return Err(LedgerError::Validation("Password cannot be empty".into()));
        }

        if self.read_entries()?.iter().any(|e| e.username == username) {
            return Err(LedgerError::user_exists(username));
        }

        let verifier = self.hash_password(password)?;
        append_line(
            &self.path,
            &format!("{}{}{}", username, FIELD_DELIMITER, verifier),
        )?;

        info!(username, "registered user");
        Ok(())
    }
}
