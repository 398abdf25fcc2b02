use thiserror::Error;

/// Rejections raised while turning raw user input into a ledger entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("could not convert amount `{0}` to a number")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(String),
    #[error("Amount {0} is too large (the limit is 1000000000000000)")]
    AmountTooLarge(String),
    #[error("Unknown category `{0}` (expected Income or Paid)")]
    UnknownCategory(String),
    #[error("Description is required")]
    MissingDescription,
}

/// Outcome of a failed login attempt.
///
/// Unknown users and wrong passwords share one variant so the caller cannot
/// tell them apart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username and password are required")]
    MissingCredentials,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Error type for configuration loading and saving.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
