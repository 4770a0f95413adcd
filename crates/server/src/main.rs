//! Tienda Server - public JSON API.
//!
//! This binary serves the catalog and cart API on port 8080.
//!
//! # Architecture
//!
//! - Axum web framework, JSON in/out
//! - File-backed collection stores from `tienda-store` (one JSON array per
//!   collection, serialized writes, atomic replacement)
//! - No database: `TIENDA_DATA_DIR` holds `products.json` and `carts.json`
//!
//! The routing layer is deliberately thin. It parses requests, calls the
//! store, and maps results and typed failures onto status codes; all
//! domain rules live below it.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tienda_server::config::ServerConfig;
use tienda_server::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tienda_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Make sure the data directory exists before the stores touch it
    tokio::fs::create_dir_all(&config.data_dir)
        .await
        .expect("Failed to create data directory");
    tracing::info!(data_dir = %config.data_dir.display(), "Data directory ready");

    // Build application state and router
    let state = AppState::new(config.clone());
    let app = tienda_server::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("tienda listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
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
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
