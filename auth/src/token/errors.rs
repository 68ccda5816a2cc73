use thiserror::Error;

/// Error type for token operations.
///
/// Validation failures are collapsed into the single [`TokenError::Invalid`]
/// variant so that callers (and token presenters) cannot distinguish a bad
/// signature from an expired or structurally broken token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid")]
    Invalid,
}
