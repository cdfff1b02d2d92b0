use mn_auth::{PasswordHasher, TokenCodec};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state, cloned into every handler.
///
/// The token codec and password hasher are read-only after startup;
/// the pool is the only shared resource touching the outside world.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenCodec>,
    pub passwords: PasswordHasher,
}

impl AppState {
    pub fn new(pool: SqlitePool, tokens: Arc<TokenCodec>, passwords: PasswordHasher) -> Self {
        Self {
            pool,
            tokens,
            passwords,
        }
    }
}
