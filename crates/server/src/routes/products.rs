//! Product route handlers.
//!
//! Handlers translate between HTTP and the catalog: request bodies
//! deserialize into the typed draft/patch inputs, absence becomes 404, and
//! validation failures become 400 via [`AppError`].

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use tienda_core::{Product, ProductDraft, ProductId, ProductPatch};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List the full catalog.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.catalog().list().await?))
}

/// Fetch one product by id.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<Json<Product>> {
    let id = ProductId::new(pid);
    state
        .catalog()
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Create a product from the posted draft.
#[instrument(skip(state, draft))]
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = state.catalog().create(draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Apply a partial update to one product.
#[instrument(skip(state, patch))]
pub async fn update(
    State(state): State<AppState>,
    Path(pid): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    let id = ProductId::new(pid);
    state
        .catalog()
        .update(&id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Delete one product. Cart references to it are left as-is.
#[instrument(skip(state))]
pub async fn destroy(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<Json<Product>> {
    let id = ProductId::new(pid);
    state
        .catalog()
        .delete(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
