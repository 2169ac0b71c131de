// --- File: crates/bookify_auth/src/token.rs ---
//! Bearer token issuance and validation.
//!
//! Tokens are HS256 JWTs carrying the subject phone and an absolute expiry.
//! The signing secret is process-wide and static; rotating it invalidates
//! every outstanding token. There is no revocation mechanism: a token is
//! honored until it expires even if the account is disabled or deleted.

use bookify_common::ApiError;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
}

/// Token validation failures. Any failure is terminal for the request.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Signature verifies but the expiry has elapsed
    #[error("token expired")]
    Expired,
    /// Bad signature or malformed structure
    #[error("invalid token")]
    Invalid,
}

impl From<TokenError> for ApiError {
    fn from(_: TokenError) -> Self {
        ApiError::invalid_credentials()
    }
}

/// Issues and validates signed bearer tokens.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    default_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, default_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // zero leeway keeps the expiry contract exact
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            default_ttl,
        }
    }

    /// Convenience constructor for a TTL given in minutes, as configured.
    pub fn from_minutes(secret: &str, minutes: u64) -> Self {
        Self::new(secret, Duration::minutes(minutes as i64))
    }

    /// Issues a token for `phone` expiring after the configured default TTL.
    pub fn issue(&self, phone: &str) -> Result<String, ApiError> {
        self.issue_with_ttl(phone, self.default_ttl)
    }

    /// Issues a token for `phone` expiring after `ttl` from now.
    pub fn issue_with_ttl(&self, phone: &str, ttl: Duration) -> Result<String, ApiError> {
        let claims = Claims {
            sub: phone.to_string(),
            exp: (Utc::now() + ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| ApiError::Internal(format!("token signing failed: {err}")))
    }

    /// Resolves a token back to the embedded phone number.
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        match decode::<Claims>(token, &self.decoding, &self.validation) {
            Ok(data) => Ok(data.claims.sub),
            Err(err) if matches!(err.kind(), ErrorKind::ExpiredSignature) => {
                Err(TokenError::Expired)
            }
            Err(_) => Err(TokenError::Invalid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::from_minutes("test-secret", 30)
    }

    #[test]
    fn token_roundtrips_to_the_issued_subject() {
        let tokens = service();
        let token = tokens.issue("1234567890").unwrap();
        assert_eq!(tokens.validate(&token).unwrap(), "1234567890");
    }

    #[test]
    fn elapsed_expiry_is_rejected_as_expired() {
        let tokens = service();
        let token = tokens
            .issue_with_ttl("1234567890", Duration::seconds(-10))
            .unwrap();
        assert!(matches!(tokens.validate(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn tampered_signature_is_rejected_as_invalid() {
        let tokens = service();
        let token = tokens.issue("1234567890").unwrap();
        let tampered = format!("{token}x");
        assert!(matches!(tokens.validate(&tampered), Err(TokenError::Invalid)));
    }

    #[test]
    fn foreign_secret_is_rejected_as_invalid() {
        let token = service().issue("1234567890").unwrap();
        let other = TokenService::from_minutes("other-secret", 30);
        assert!(matches!(other.validate(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn garbage_is_rejected_as_invalid() {
        assert!(matches!(
            service().validate("not-a-token"),
            Err(TokenError::Invalid)
        ));
    }
}
