use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Serialize;

use super::claims::Claims;
use super::errors::TokenError;

/// RFC 6750 token type label returned alongside every issued token.
pub const TOKEN_TYPE: &str = "bearer";

/// An issued bearer token, as handed to the HTTP layer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionToken {
    pub access_token: String,
    pub token_type: String,
}

/// Issues and validates signed, time-limited bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256). Holds only immutable configuration
/// (keys derived from the process-wide secret, the configured lifetime),
/// so a single instance can be shared across request handlers.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
}

impl TokenService {
    /// Create a token service from the signing secret and token lifetime.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            lifetime,
        }
    }

    /// Issue a token for `subject`, expiring `lifetime` after `now`.
    ///
    /// # Errors
    /// * `EncodingFailed` - token signing failed
    pub fn issue(&self, subject: &str, now: DateTime<Utc>) -> Result<SessionToken, TokenError> {
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + self.lifetime).timestamp(),
        };

        let access_token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        Ok(SessionToken {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
        })
    }

    /// Validate a presented token and extract its subject.
    ///
    /// A pure function of the token text, the configured secret, and `now`.
    /// Signature mismatch, structural corruption, expiry, and a missing or
    /// empty subject all collapse into [`TokenError::Invalid`]; callers
    /// cannot tell which check rejected the token.
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against the caller-supplied clock,
        // without the library's default leeway.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::Invalid)?;

        let claims = token_data.claims;
        if now.timestamp() >= claims.exp {
            return Err(TokenError::Invalid);
        }
        if claims.sub.is_empty() {
            return Err(TokenError::Invalid);
        }

        Ok(claims.sub)
    }
}
