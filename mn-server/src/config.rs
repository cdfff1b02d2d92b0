use crate::error::{Result as ServerErrorResult, ServerError};

use mn_auth::TokenConfig;

use std::net::SocketAddr;
use std::path::PathBuf;

use log::LevelFilter;

/// Development-only signing secret. Matches the original deployment
/// default; any real deployment must override JWT_SECRET.
pub const DEV_JWT_SECRET: &str = "defaultSecretKeyForDevelopmentOnly";

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// SQLite database file (default: medicnote.db)
    pub database_path: PathBuf,

    /// Symmetric JWT signing secret (HS256)
    pub jwt_secret: String,

    /// Token lifetime in milliseconds (default: 24h)
    pub jwt_ttl_ms: i64,

    /// Log level (default: info)
    pub log_level: LevelFilter,

    /// Optional log file; None logs to stdout
    pub log_file: Option<PathBuf>,

    /// Enable colored logs (default: true)
    pub log_colored: bool,

    /// Seed demo doctor accounts when the store is empty (default: true)
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { source })?;

        let log_level = std::env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .parse()
            .map_err(|_| ServerError::EnvVar {
                message: "LOG_LEVEL must be one of off, error, warn, info, debug, trace"
                    .to_string(),
            })?;

        let config = Self {
            bind_addr,

            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "medicnote.db".to_string())
                .into(),

            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| DEV_JWT_SECRET.to_string()),

            jwt_ttl_ms: std::env::var("JWT_TTL_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(TokenConfig::DEFAULT_TTL_MS),

            log_level,

            log_file: std::env::var("LOG_FILE").ok().map(PathBuf::from),

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),

            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> ServerErrorResult<()> {
        if self.jwt_secret.is_empty() {
            return Err(ServerError::EnvVar {
                message: "JWT_SECRET must not be empty".to_string(),
            });
        }

        if self.jwt_ttl_ms < 0 {
            return Err(ServerError::EnvVar {
                message: "JWT_TTL_MS must not be negative".to_string(),
            });
        }

        Ok(())
    }

    /// Token codec configuration derived from this config
    pub fn token_config(&self) -> TokenConfig {
        TokenConfig::new(self.jwt_secret.clone(), self.jwt_ttl_ms)
    }

    /// Log the effective configuration (secrets redacted)
    pub fn log_summary(&self) {
        log::info!("Bind address: {}", self.bind_addr);
        log::info!("Database: {}", self.database_path.display());
        log::info!("Token TTL: {}ms", self.jwt_ttl_ms);
        log::info!("Seed demo data: {}", self.seed_demo_data);

        if self.jwt_secret == DEV_JWT_SECRET {
            log::warn!(
                "JWT_SECRET is not set - using the insecure development secret. \
                 Override it in any non-development deployment."
            );
        }
    }
}
