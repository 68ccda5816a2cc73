//! Authentication primitives for the account service.
//!
//! Provides the two stateless building blocks of the credential lifecycle:
//! - Password hashing and verification (bcrypt, 72-byte input window)
//! - Session token issuance and validation (JWT, HS256)
//!
//! Both are pure functions over their inputs plus immutable configuration
//! (signing secret, token lifetime), so they are safe to call concurrently
//! from independent request handlers without coordination. The
//! [`Authenticator`] combines them for the common login flow.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(4);
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::TokenService;
//! use chrono::{Duration, Utc};
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(30));
//! let now = Utc::now();
//! let session = tokens.issue("user@example.com", now).unwrap();
//! let subject = tokens.validate(&session.access_token, now).unwrap();
//! assert_eq!(subject, "user@example.com");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::SessionToken;
pub use token::TokenError;
pub use token::TokenService;
