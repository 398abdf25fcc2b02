//! Static username/password gate in front of the account book.
//!
//! Credentials live in memory as plain text. This keeps casual users out of
//! the wrong screen and is not a security boundary.

use std::collections::BTreeMap;

use crate::errors::AuthError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialStore {
    entries: BTreeMap<String, String>,
}

impl CredentialStore {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Checks an exact username/password match. Surrounding whitespace is
    /// ignored, as the login form trims both fields.
    pub fn validate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        match self.entries.get(username) {
            None => {
                tracing::info!("Login attempt: Username '{}' not found", username);
                Err(AuthError::InvalidCredentials)
            }
            Some(expected) if expected != password => {
                tracing::info!("Login attempt: Invalid password for user '{}'", username);
                Err(AuthError::InvalidCredentials)
            }
            Some(_) => {
                tracing::info!("Login successful for user: {}", username);
                Ok(())
            }
        }
    }
}
