//! Cart store: the collection store specialized to carts.

use std::path::PathBuf;
use std::sync::Arc;

use tienda_core::{Cart, CartId, CartItem, ProductId};

use crate::catalog::ProductCatalog;
use crate::collection::CollectionStore;
use crate::error::{EntityKind, Result, StoreError};

/// The cart collection.
///
/// Depends on the [`ProductCatalog`] to validate product references when a
/// line item is added. The check happens once, at add-time; a product
/// deleted afterwards leaves a stale reference in the cart.
#[derive(Debug)]
pub struct CartStore {
    store: CollectionStore<Cart>,
    catalog: Arc<ProductCatalog>,
}

impl CartStore {
    /// Open the cart store backed by `path`, validating against `catalog`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, catalog: Arc<ProductCatalog>) -> Self {
        Self {
            store: CollectionStore::new(path),
            catalog,
        }
    }

    /// Insert a new cart with an empty item sequence.
    ///
    /// # Errors
    ///
    /// Returns the store's persistence failures.
    pub async fn create(&self) -> Result<Cart> {
        self.store.insert(Cart::empty()).await
    }

    /// Look up one cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corruption` or `StoreError::Io` when the
    /// backing file cannot be read as a cart array.
    pub async fn get(&self, id: &CartId) -> Result<Option<Cart>> {
        self.store.find_by_id(id.as_str()).await
    }

    /// The item sequence of one cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` (cart) if the cart does not exist,
    /// plus the read failures of [`get`](Self::get).
    pub async fn get_items(&self, id: &CartId) -> Result<Vec<CartItem>> {
        self.get(id)
            .await?
            .map(|cart| cart.items)
            .ok_or_else(|| StoreError::not_found(EntityKind::Cart, id.as_str()))
    }

    /// Add one unit of `product_id` to the cart.
    ///
    /// If the cart already references the product, its quantity is
    /// incremented; otherwise a new item with quantity 1 is appended. The
    /// whole carts array is re-persisted in the same serialized
    /// load-modify-save cycle as every other mutation. No cross-store lock
    /// is taken: the product is validated through a plain catalog read, and
    /// a concurrent product deletion can leave a stale reference.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` naming the cart or the product when
    /// either side of the reference is missing (the carts file is left
    /// untouched), plus the store's persistence failures.
    pub async fn add_product(&self, cart_id: &CartId, product_id: &ProductId) -> Result<Cart> {
        let _permit = self.store.serializer().acquire().await;

        let mut carts = self.store.load().await?;
        let Some(cart) = carts.iter_mut().find(|cart| &cart.id == cart_id) else {
            return Err(StoreError::not_found(EntityKind::Cart, cart_id.as_str()));
        };

        if self.catalog.get(product_id).await?.is_none() {
            return Err(StoreError::not_found(
                EntityKind::Product,
                product_id.as_str(),
            ));
        }

        match cart
            .items
            .iter_mut()
            .find(|item| &item.product_id == product_id)
        {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => cart.items.push(CartItem::new(product_id.clone())),
        }
        let updated = cart.clone();

        self.store.persist(&carts).await?;
        Ok(updated)
    }
}
