//! Product catalog: the collection store specialized to products.

use std::path::PathBuf;

use tienda_core::{DEFAULT_CATEGORY, Product, ProductDraft, ProductId, ProductPatch};

use crate::collection::CollectionStore;
use crate::error::{Result, StoreError};
use crate::id::IdSource;

/// The product collection, with identifier generation and field defaulting.
///
/// Absence is reported as `None`; the layer above decides what a missing
/// product means (the HTTP layer maps it to 404).
#[derive(Debug)]
pub struct ProductCatalog {
    store: CollectionStore<Product>,
}

impl ProductCatalog {
    /// Open the catalog backed by `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: CollectionStore::new(path),
        }
    }

    /// Open the catalog with a custom id source.
    #[must_use]
    pub fn with_ids(path: impl Into<PathBuf>, ids: Box<dyn IdSource>) -> Self {
        Self {
            store: CollectionStore::with_ids(path, ids),
        }
    }

    /// Validate the draft, apply field defaults, and insert.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if `title`, `price`, or `code` is
    /// missing (or an empty string), plus the store's persistence failures.
    pub async fn create(&self, draft: ProductDraft) -> Result<Product> {
        let title = required_text(draft.title, "title")?;
        let code = required_text(draft.code, "code")?;
        let Some(price) = draft.price else {
            return Err(StoreError::Validation("price is required".to_owned()));
        };

        let product = Product {
            id: ProductId::new(""),
            title,
            description: draft.description.unwrap_or_default(),
            code,
            price,
            status: draft.status.unwrap_or(true),
            stock: draft.stock.unwrap_or(0),
            category: draft
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned()),
            thumbnails: draft.thumbnails.unwrap_or_default(),
        };
        self.store.insert(product).await
    }

    /// All products in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corruption` or `StoreError::Io` when the
    /// backing file cannot be read as a product array.
    pub async fn list(&self) -> Result<Vec<Product>> {
        self.store.list().await
    }

    /// Look up one product.
    ///
    /// # Errors
    ///
    /// Same failure conditions as [`list`](Self::list).
    pub async fn get(&self, id: &ProductId) -> Result<Option<Product>> {
        self.store.find_by_id(id.as_str()).await
    }

    /// Apply a partial update.
    ///
    /// Required fields are not re-validated here: a patch may legally omit
    /// them since the stored record already has them. The stored id is
    /// preserved unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for wrong-typed patch values, plus
    /// the store's persistence failures.
    pub async fn update(&self, id: &ProductId, patch: ProductPatch) -> Result<Option<Product>> {
        self.store
            .update_by_id(id.as_str(), patch.into_fields())
            .await
    }

    /// Remove a product.
    ///
    /// Does not cascade into carts: items referencing the product keep
    /// their now-stale reference.
    ///
    /// # Errors
    ///
    /// Returns the store's persistence failures.
    pub async fn delete(&self, id: &ProductId) -> Result<Option<Product>> {
        self.store.delete_by_id(id.as_str()).await
    }
}

fn required_text(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(StoreError::Validation(format!(
            "{field} is required and must be a non-empty string"
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::*;

    fn catalog_in(dir: &TempDir) -> ProductCatalog {
        ProductCatalog::new(dir.path().join("products.json"))
    }

    fn pen_draft() -> ProductDraft {
        ProductDraft {
            title: Some("Pen".to_owned()),
            price: Some(1.5),
            code: Some("P1".to_owned()),
            ..ProductDraft::default()
        }
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_in(&dir);

        let product = catalog.create(pen_draft()).await.unwrap();
        assert_eq!(product.id.as_str().len(), 24);
        assert_eq!(product.title, "Pen");
        assert!((product.price - 1.5).abs() < f64::EPSILON);
        assert_eq!(product.code, "P1");
        assert_eq!(product.description, "");
        assert!(product.status);
        assert_eq!(product.stock, 0);
        assert_eq!(product.category, "uncategorized");
        assert!(product.thumbnails.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_missing_required_fields() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_in(&dir);

        for draft in [
            ProductDraft {
                title: None,
                ..pen_draft()
            },
            ProductDraft {
                price: None,
                ..pen_draft()
            },
            ProductDraft {
                code: None,
                ..pen_draft()
            },
            ProductDraft {
                title: Some("   ".to_owned()),
                ..pen_draft()
            },
        ] {
            let err = catalog.create(draft).await.unwrap_err();
            assert!(matches!(err, StoreError::Validation(_)));
        }

        // Nothing was persisted by the rejected drafts.
        assert!(catalog.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_does_not_revalidate_required_fields() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_in(&dir);

        let product = catalog.create(pen_draft()).await.unwrap();
        let patch = ProductPatch {
            stock: Some(7),
            ..ProductPatch::default()
        };

        let updated = catalog.update(&product.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.stock, 7);
        assert_eq!(updated.title, "Pen");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_absent() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_in(&dir);

        let result = catalog
            .update(&ProductId::new("missing"), ProductPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_twice_reports_absent_the_second_time() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_in(&dir);

        let product = catalog.create(pen_draft()).await.unwrap();

        let first = catalog.delete(&product.id).await.unwrap();
        assert_eq!(first, Some(product.clone()));

        let second = catalog.delete(&product.id).await.unwrap();
        assert!(second.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_lose_no_updates() {
        let dir = TempDir::new().unwrap();
        let catalog = Arc::new(catalog_in(&dir));

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..32 {
            let catalog = Arc::clone(&catalog);
            tasks.spawn(async move {
                catalog
                    .create(ProductDraft {
                        title: Some(format!("Item {i}")),
                        price: Some(1.0),
                        code: Some(format!("C{i}")),
                        ..ProductDraft::default()
                    })
                    .await
                    .unwrap()
            });
        }
        while let Some(result) = tasks.join_next().await {
            result.unwrap();
        }

        let listed = catalog.list().await.unwrap();
        assert_eq!(listed.len(), 32);

        let ids: HashSet<String> = listed.into_iter().map(|p| p.id.into_inner()).collect();
        assert_eq!(ids.len(), 32);
    }
}
