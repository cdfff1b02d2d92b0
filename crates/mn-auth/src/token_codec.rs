use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Signing configuration shared by issuance and verification.
///
/// The secret MUST be overridden outside development; the TTL default
/// matches the original deployment (24 hours).
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Symmetric HS256 signing secret
    pub secret: String,
    /// Token lifetime in milliseconds
    pub ttl_ms: i64,
}

impl TokenConfig {
    pub const DEFAULT_TTL_MS: i64 = 86_400_000;

    pub fn new(secret: impl Into<String>, ttl_ms: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_ms,
        }
    }
}

/// Issues and verifies HS256-signed stateless tokens.
///
/// Verification is purely computational: validity is a function of the
/// signature and the embedded expiry, with no server-side session state.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_ms: i64,
}

impl TokenCodec {
    pub fn new(config: &TokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Claims carry millisecond timestamps, so the library's
        // seconds-based exp handling is disabled; expiry is enforced
        // strictly in verify().
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl_ms: config.ttl_ms,
        }
    }

    /// Issue a signed token for the given subject and doctor id.
    #[track_caller]
    pub fn issue(&self, subject: &str, doctor_id: i64) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp_millis();
        let claims = Claims {
            sub: subject.to_string(),
            doctor_id,
            iat: now,
            exp: now + self.ttl_ms,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify signature and freshness, returning the decoded claims.
    ///
    /// Malformed tokens and signature mismatches come back as
    /// [`AuthError::JwtDecode`]; an otherwise-valid token whose expiry has
    /// passed comes back as the distinguishable [`AuthError::TokenExpired`].
    /// Expiry is strict: `now >= exp` means expired.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| AuthError::JwtDecode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        token_data.claims.validate()?;

        if Utc::now().timestamp_millis() >= token_data.claims.exp {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(token_data.claims)
    }

    /// True iff the token verifies, is unexpired, and its subject matches
    /// `expected_subject` exactly.
    pub fn verify_for_subject(&self, token: &str, expected_subject: &str) -> bool {
        match self.verify(token) {
            Ok(claims) => claims.sub == expected_subject,
            Err(_) => false,
        }
    }

    pub fn ttl_ms(&self) -> i64 {
        self.ttl_ms
    }
}
