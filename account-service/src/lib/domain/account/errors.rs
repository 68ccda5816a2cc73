use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for the request-boundary password length rule
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordRuleError {
    #[error("Password must not be empty")]
    Empty,

    #[error("Password too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all account operations
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordRuleError),

    // Domain-level errors
    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    /// Covers both "email not found" and "password mismatch"; the two are
    /// deliberately indistinguishable so login cannot be used to probe
    /// which emails are registered.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Any token defect: bad signature, corruption, expiry, missing subject.
    #[error("Invalid token")]
    InvalidToken,

    /// The token was cryptographically sound but its subject no longer
    /// resolves to an account.
    #[error("Account not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AccountError {
    fn from(err: anyhow::Error) -> Self {
        AccountError::Unknown(err.to_string())
    }
}
