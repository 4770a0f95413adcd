//! Catalog CRUD over HTTP.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use tienda_integration_tests::TestApp;

#[tokio::test]
async fn health_and_welcome() {
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Welcome to the Tienda API!"));
}

#[tokio::test]
async fn empty_catalog_lists_as_empty_array() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_applies_defaults_and_generates_id() {
    let app = TestApp::new();

    let (status, product) = app
        .post(
            "/api/products",
            json!({"title": "Pen", "price": 1.5, "code": "P1"}),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(product["id"].as_str().unwrap().len(), 24);
    assert_eq!(product["title"], "Pen");
    assert_eq!(product["status"], true);
    assert_eq!(product["stock"], 0);
    assert_eq!(product["category"], "uncategorized");
    assert_eq!(product["thumbnails"], json!([]));
}

#[tokio::test]
async fn create_without_required_fields_is_bad_request() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/products", json!({"title": "Pen", "price": 1.5}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("code"));

    // Nothing was persisted
    let (_, listed) = app.get("/api/products").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn show_returns_product_or_404() {
    let app = TestApp::new();

    let (_, product) = app
        .post(
            "/api/products",
            json!({"title": "Pen", "price": 1.5, "code": "P1"}),
        )
        .await;
    let id = product["id"].as_str().unwrap();

    let (status, found) = app.get(&format!("/api/products/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, product);

    let (status, body) = app.get("/api/products/ffffffffffffffffffffffff").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn update_merges_fields_and_keeps_the_id() {
    let app = TestApp::new();

    let (_, product) = app
        .post(
            "/api/products",
            json!({"title": "Pen", "price": 1.5, "code": "P1"}),
        )
        .await;
    let id = product["id"].as_str().unwrap();

    let (status, updated) = app
        .put(
            &format!("/api/products/{id}"),
            json!({"price": 2.0, "stock": 7}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], product["id"]);
    assert_eq!(updated["title"], "Pen");
    assert_eq!(updated["price"], 2.0);
    assert_eq!(updated["stock"], 7);
}

#[tokio::test]
async fn update_unknown_product_is_404() {
    let app = TestApp::new();

    let (status, _) = app
        .put(
            "/api/products/ffffffffffffffffffffffff",
            json!({"price": 2.0}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_twice_reports_404_the_second_time() {
    let app = TestApp::new();

    let (_, product) = app
        .post(
            "/api/products",
            json!({"title": "Pen", "price": 1.5, "code": "P1"}),
        )
        .await;
    let id = product["id"].as_str().unwrap();

    let (status, deleted) = app.delete(&format!("/api/products/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, product);

    let (status, _) = app.delete(&format!("/api/products/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = app.get("/api/products").await;
    assert_eq!(listed, json!([]));
}
