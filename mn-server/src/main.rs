use mn_auth::{PasswordHasher, TokenCodec};
use mn_server::{build_router, config::Config, logger, seed, AppState};

use std::error::Error;
use std::sync::Arc;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.log_level, config.log_file.clone(), config.log_colored)?;

    info!("Starting mn-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    info!("Connecting to database: {}", config.database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&config.database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    mn_db::MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    let passwords = PasswordHasher::new();

    if config.seed_demo_data {
        seed::seed_demo_doctors(&pool, &passwords).await;
    }

    // Token codec is built once from immutable configuration and shared
    let tokens = Arc::new(TokenCodec::new(&config.token_config()));

    let state = AppState::new(pool, tokens, passwords);

    // Build router
    let app = build_router(state);

    // Create TCP listener
    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown on Ctrl+C
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => log::error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
