use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Credential verifier over bcrypt.
///
/// Each `hash` call salts independently, so login must compare via
/// `matches` rather than re-hashing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Reduced-cost hasher for tests; never use outside test setup.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Produce a fresh salted hash for storage at registration time.
    #[track_caller]
    pub fn hash(&self, plain: &str) -> AuthErrorResult<String> {
        let cost = if self.cost == 0 {
            bcrypt::DEFAULT_COST
        } else {
            self.cost
        };
        bcrypt::hash(plain, cost).map_err(|e| AuthError::Hash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// True iff `plain` matches `stored_hash`.
    ///
    /// A malformed stored hash reads as a mismatch; the caller never
    /// learns why verification failed.
    pub fn matches(&self, plain: &str, stored_hash: &str) -> bool {
        bcrypt::verify(plain, stored_hash).unwrap_or(false)
    }
}
