use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::SessionToken;
use crate::token::TokenError;
use crate::token::TokenService;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Constructed once at process start from the configured signing secret and
/// token lifetime, then shared across request handlers; it holds no mutable
/// state.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `signing_secret` - Secret key for token signing
    /// * `token_lifetime` - How long issued tokens stay valid
    pub fn new(signing_secret: &[u8], token_lifetime: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_service: TokenService::new(signing_secret, token_lifetime),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a bearer token for `subject`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - password does not match the stored hash
    /// * `Token` - token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<SessionToken, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_service.issue(subject, now)?)
    }

    /// Validate a presented token and return its subject.
    ///
    /// # Errors
    /// * `Invalid` - signature, structure, expiry, or subject defect
    pub fn validate_token(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        self.token_service.validate(token, now)
    }
}
