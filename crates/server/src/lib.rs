//! Tienda Server library.
//!
//! This crate provides the JSON API as a library, allowing it to be tested
//! in process and reused. The binary in `main.rs` handles bootstrap only:
//! configuration, logging, and the listener.
//!
//! The server is a thin translator: every operation calls into the store
//! crate and maps its results and errors onto HTTP responses. No handler
//! touches the collection files directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the data files.
async fn health() -> &'static str {
    "ok"
}
