//! HTTP route handlers for the JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Welcome message
//! GET  /health                 - Health check
//!
//! # Products
//! GET    /api/products         - List all products
//! GET    /api/products/{pid}   - Product by id
//! POST   /api/products         - Create product
//! PUT    /api/products/{pid}   - Update product (partial)
//! DELETE /api/products/{pid}   - Delete product
//!
//! # Carts
//! POST /api/carts                        - Create empty cart
//! GET  /api/carts/{cid}                  - List a cart's items
//! POST /api/carts/{cid}/product/{pid}    - Add one unit of a product
//! ```

pub mod carts;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{pid}",
            get(products::show)
                .put(products::update)
                .delete(products::destroy),
        )
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(carts::create))
        .route("/{cid}", get(carts::items))
        .route("/{cid}/product/{pid}", post(carts::add_product))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Welcome message
        .route("/", get(welcome))
        // Product routes
        .nest("/api/products", product_routes())
        // Cart routes
        .nest("/api/carts", cart_routes())
}

/// Root welcome message.
async fn welcome() -> &'static str {
    "Welcome to the Tienda API!"
}
