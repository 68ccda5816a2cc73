use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::account::errors::EmailError;
use crate::account::errors::PasswordRuleError;

/// Account aggregate entity.
///
/// Created once at registration and immutable thereafter. The stored
/// `password_hash` is opaque to everything except the hasher's own verify
/// operation and is never exposed outward.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Stored
/// case-sensitively; it doubles as the login identifier and the token
/// subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password accepted at the registration boundary.
///
/// Enforces the 1-72 *character* rule of the request layer; the hasher's
/// 72 *byte* window is a separate, narrower limit applied during hashing
/// (72 multi-byte characters can still exceed 72 bytes). The value exists
/// only transiently and its `Debug` output is redacted so it can never
/// leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_CHARS: usize = 1;
    const MAX_CHARS: usize = 72;

    /// Create a new validated password.
    ///
    /// # Errors
    /// * `Empty` - Password has no characters
    /// * `TooLong` - Password longer than 72 characters
    pub fn new(password: String) -> Result<Self, PasswordRuleError> {
        let length = password.chars().count();
        if length < Self::MIN_CHARS {
            Err(PasswordRuleError::Empty)
        } else if length > Self::MAX_CHARS {
            Err(PasswordRuleError::TooLong {
                max: Self::MAX_CHARS,
                actual: length,
            })
        } else {
            Ok(Self(password))
        }
    }

    /// Get password as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Command to register a new account with domain types
#[derive(Debug)]
pub struct RegisterAccountCommand {
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterAccountCommand {
    /// Construct a new register account command.
    ///
    /// # Arguments
    /// * `email` - Validated email address
    /// * `password` - Validated plaintext password (hashed by the service)
    pub fn new(email: EmailAddress, password: Password) -> Self {
        Self { email, password }
    }
}
