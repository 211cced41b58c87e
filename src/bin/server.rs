//! FMS HTTP Server Binary
//!
//! This is the main entry point for the fleet monitor REST API server.
//! It initializes the roster repository, seeds sample data on first run,
//! starts the periodic snapshot refresh task, and serves the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Run with the file-backed roster store (default)
//! cargo run --bin fms-server
//!
//! # Run with the in-memory store
//! REPOSITORY_TYPE=local cargo run --bin fms-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_TYPE`: Roster store backend, "file" or "local"
//! - `FLEET_STORE_PATH`: Roster JSON path for the file backend
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fms_rust::db;
use fms_rust::http::{create_router, AppState};
use fms_rust::services::{self, SnapshotStore, SyntheticFeed, TelemetryFeed};

/// Interval between automatic snapshot refreshes.
const REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting FMS HTTP Server");

    // Initialize global repository once and reuse it across the app
    db::init_repository()?;
    let repository = std::sync::Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    if db::seed_roster_if_empty(repository.as_ref()).await? {
        info!("Empty roster store, seeded sample ships");
    }

    let feed: std::sync::Arc<dyn TelemetryFeed> = std::sync::Arc::new(SyntheticFeed::new());
    let snapshots = SnapshotStore::new();

    // First synthesis cycle before serving, so the views have data
    services::refresh_snapshots_logged(repository.as_ref(), feed.as_ref(), &snapshots).await;
    info!("Initial snapshot ready: {} ships", snapshots.len());

    // Periodic refresh for the lifetime of the server
    {
        let repository = repository.clone();
        let feed = feed.clone();
        let snapshots = snapshots.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(REFRESH_INTERVAL);
            // The first tick fires immediately and duplicates the initial
            // refresh above, so consume it before looping.
            interval.tick().await;
            loop {
                interval.tick().await;
                services::refresh_snapshots_logged(repository.as_ref(), feed.as_ref(), &snapshots)
                    .await;
            }
        });
    }

    // Create application state
    let state = AppState::new(repository, feed, snapshots);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
