//! User CLI commands
//!
//! Registration, login, and password input.

use zeroize::Zeroizing;

use crate::error::{LedgerError, LedgerResult};
use crate::services::AuthService;
use crate::storage::Storage;

/// Register a new user, prompting for the password when none was given
pub fn handle_register(
    storage: &Storage,
    username: &str,
    password: Option<String>,
) -> LedgerResult<()> {
    let password = match password {
        Some(password) => Zeroizing::new(password),
        None => prompt_new_password()?,
    };

    let auth = AuthService::new(&storage.credentials);
    let username = auth.register(username, &password)?;

    println!("Registered user: {}", username);
    println!("You can now use '--user {}' with the expense commands.", username);
    Ok(())
}

/// Authenticate the user named on the command line
///
/// Returns the username the ledger should be opened for.
pub fn login(
    storage: &Storage,
    user: Option<String>,
    password: Option<String>,
) -> LedgerResult<String> {
    let username = user.ok_or_else(|| {
        LedgerError::Auth("No user given. Use --user or set LEDGER_USER.".into())
    })?;

    let password = match password {
        Some(password) => Zeroizing::new(password),
        None => prompt_password("Password: ")?,
    };

    AuthService::new(&storage.credentials).login(&username, &password)
}

/// Prompt for a new password with confirmation
fn prompt_new_password() -> LedgerResult<Zeroizing<String>> {
    let first = prompt_password("New password: ")?;
    let second = prompt_password("Confirm password: ")?;

    if *first != *second {
        return Err(LedgerError::Validation("Passwords do not match".into()));
    }

    Ok(first)
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> LedgerResult<Zeroizing<String>> {
    rpassword::prompt_password(prompt)
        .map(Zeroizing::new)
        .map_err(|e| LedgerError::Io(format!("Failed to read password: {}", e)))
}
