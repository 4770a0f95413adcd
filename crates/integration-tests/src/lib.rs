//! Integration tests for Tienda.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tienda-integration-tests
//! ```
//!
//! The tests drive the real router in process: every request goes through
//! routing, extraction, the stores, and the JSON files in a per-test temp
//! directory. No server process or network listener is involved.
//!
//! # Test Categories
//!
//! - `products_api` - Catalog CRUD over HTTP
//! - `carts_api` - Cart creation, item listing, add-product flow

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use tienda_server::config::ServerConfig;
use tienda_server::state::AppState;

/// The application over a throwaway data directory.
pub struct TestApp {
    router: Router,
    _data_dir: TempDir,
}

impl TestApp {
    /// Build the router over a fresh temp data directory.
    #[must_use]
    pub fn new() -> Self {
        let data_dir = TempDir::new().expect("create temp data dir");
        let state = AppState::new(ServerConfig::with_data_dir(data_dir.path()));
        Self {
            router: tienda_server::app(state),
            _data_dir: data_dir,
        }
    }

    /// Send one request and return the status plus the parsed body.
    ///
    /// Non-JSON bodies (the welcome and health endpoints) come back as a
    /// JSON string value.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => Request::builder().method(method).uri(uri).body(Body::empty()),
        }
        .expect("build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();

        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn post_empty(&self, uri: &str) -> (StatusCode, Value) {
        self.request("POST", uri, None).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
