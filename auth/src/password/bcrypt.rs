use bcrypt::DEFAULT_COST;

use super::errors::PasswordError;

/// Maximum number of password bytes the bcrypt primitive reads.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Password hashing implementation.
///
/// Wraps bcrypt with a fixed truncation rule: input is clipped to the
/// primitive's 72-byte window on both the hash and verify paths, so
/// passwords longer than the window still round-trip.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a password hasher with the default work factor.
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Create a password hasher with an explicit work factor.
    ///
    /// Lower costs are useful in tests; production code should use
    /// [`PasswordHasher::new`].
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password for storage.
    ///
    /// Generates a fresh random salt per call, so hashing the same input
    /// twice yields two different strings that both verify.
    ///
    /// # Returns
    /// Modular crypt format string (`$2b$…`) embedding algorithm tag,
    /// cost, salt, and digest.
    ///
    /// # Errors
    /// * `HashingFailed` - the underlying bcrypt operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let password = truncate_to_hash_window(password);

        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// Applies the same truncation rule as [`PasswordHasher::hash`]; the
    /// rule must stay identical on both paths or users with long passwords
    /// lock themselves out. Digest comparison is constant-time inside the
    /// bcrypt crate. A stored hash that does not parse counts as a
    /// mismatch rather than an error.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let password = truncate_to_hash_window(password);

        bcrypt::verify(password, hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Clip a password to the 72 bytes bcrypt actually reads.
///
/// When the byte limit lands inside a multi-byte character, back off to the
/// previous character boundary: the split character is discarded instead of
/// being hashed as a malformed fragment.
fn truncate_to_hash_window(password: &str) -> &str {
    if password.len() <= MAX_PASSWORD_BYTES {
        return password;
    }

    let mut end = MAX_PASSWORD_BYTES;
    while !password.is_char_boundary(end) {
        end -= 1;
    }
    &password[..end]
}
