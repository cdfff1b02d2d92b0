use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claim set carried by every issued token.
///
/// Timestamps are milliseconds since the Unix epoch, matching the
/// configured TTL unit. Expiry is enforced by [`crate::TokenCodec`], not
/// by the JWT library, so a zero TTL means the token is already expired
/// at the first check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (doctor email)
    pub sub: String,
    /// Numeric id of the doctor account
    pub doctor_id: i64,
    /// Issued-at timestamp (ms)
    pub iat: i64,
    /// Expiry timestamp (ms)
    pub exp: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (email) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > 320 {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.doctor_id <= 0 {
            return Err(AuthError::InvalidClaim {
                claim: "doctor_id".to_string(),
                message: "doctor_id must be positive".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
