//! Cart route handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use tienda_core::{Cart, CartId, CartItem, ProductId};

use crate::error::Result;
use crate::state::AppState;

/// Create a new empty cart.
#[instrument(skip(state))]
pub async fn create(State(state): State<AppState>) -> Result<(StatusCode, Json<Cart>)> {
    let cart = state.carts().create().await?;
    Ok((StatusCode::CREATED, Json(cart)))
}

/// List the items of one cart.
///
/// Returns the item array, not the cart envelope.
#[instrument(skip(state))]
pub async fn items(
    State(state): State<AppState>,
    Path(cid): Path<String>,
) -> Result<Json<Vec<CartItem>>> {
    let id = CartId::new(cid);
    Ok(Json(state.carts().get_items(&id).await?))
}

/// Add one unit of a product to a cart.
///
/// A repeated add increments the existing item's quantity instead of
/// appending a duplicate entry. 404 names whichever side of the reference
/// is missing.
#[instrument(skip(state))]
pub async fn add_product(
    State(state): State<AppState>,
    Path((cid, pid)): Path<(String, String)>,
) -> Result<Json<Cart>> {
    let cart_id = CartId::new(cid);
    let product_id = ProductId::new(pid);
    Ok(Json(state.carts().add_product(&cart_id, &product_id).await?))
}
