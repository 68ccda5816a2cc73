use thiserror::Error;

/// Error type for password operations.
///
/// Verification has no error variant: a hash that cannot be parsed is
/// reported as a mismatch by [`crate::PasswordHasher::verify`].
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
