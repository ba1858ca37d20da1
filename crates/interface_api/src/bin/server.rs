//! LedgerLink - API Server Binary
//!
//! Starts the HTTP admin server for the order-to-invoice bridge.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin ledgerlink-api
//!
//! # Run with environment variables
//! LEDGERLINK_HOST=0.0.0.0 LEDGERLINK_PORT=8080 DATABASE_URL=postgres://... cargo run --bin ledgerlink-api
//! ```
//!
//! # Environment Variables
//!
//! * `LEDGERLINK_HOST` - Server host (default: 0.0.0.0)
//! * `LEDGERLINK_PORT` - Server port (default: 8080)
//! * `LEDGERLINK_DATABASE_URL` - PostgreSQL connection string
//! * `LEDGERLINK_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::SystemClock;
use domain_sync::{ActivityLog, SyncConfig};
use infra_db::{create_pool_from_url, run_migrations, PgActivityStore};
use interface_api::{config::ApiConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting LedgerLink API server"
    );

    let pool = create_pool_from_url(&config.database_url).await?;

    tracing::info!("Running database migrations");
    run_migrations(&pool).await?;

    // The API only reads the log, but the service is constructed the same
    // way the workflow constructs it.
    let activity = ActivityLog::new(
        Arc::new(PgActivityStore::new(pool)),
        Arc::new(SystemClock),
        SyncConfig::default().actor,
    );

    let app = create_router(activity, config.clone());

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables
///
/// Falls back to individual env vars or defaults if the prefixed
/// configuration is incomplete.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| ApiConfig {
        host: std::env::var("LEDGERLINK_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: std::env::var("LEDGERLINK_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080),
        database_url: std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("LEDGERLINK_DATABASE_URL"))
            .unwrap_or_else(|_| "postgres://localhost/ledgerlink".to_string()),
        log_level: std::env::var("LEDGERLINK_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    })
}

/// Initializes the tracing subscriber for structured logging
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM)
///
/// Enables graceful shutdown, allowing in-flight requests to complete
/// before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
