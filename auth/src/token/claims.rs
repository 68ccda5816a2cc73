use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by a session token.
///
/// Deliberately minimal: the token binds a subject identity to an expiry
/// and nothing else. Validity is determined purely by signature and expiry
/// at validation time; no session record exists server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the account email the token was issued for.
    pub sub: String,

    /// Expiration time (Unix timestamp).
    pub exp: i64,
}
