//! Application state shared across handlers.

use std::sync::Arc;

use tienda_store::{CartStore, ProductCatalog};

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// two stores and the configuration. The stores are the only path to the
/// collection files; handlers never touch the filesystem.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    catalog: Arc<ProductCatalog>,
    carts: CartStore,
}

impl AppState {
    /// Create a new application state over the configured data directory.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let catalog = Arc::new(ProductCatalog::new(config.products_path()));
        let carts = CartStore::new(config.carts_path(), Arc::clone(&catalog));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                carts,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &ProductCatalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn carts(&self) -> &CartStore {
        &self.inner.carts
    }
}
