//! Seed the catalog with sample products.
//!
//! Inserts go through `ProductCatalog::create` like any other caller, so
//! seeded records get generated ids and the regular field defaults.

use std::path::Path;

use tracing::info;

use tienda_core::ProductDraft;
use tienda_store::ProductCatalog;

/// Sample products cycled through when seeding.
const SAMPLES: &[(&str, &str, f64, &str)] = &[
    ("Pen", "PEN-001", 1.5, "stationery"),
    ("Notebook", "NTB-001", 3.25, "stationery"),
    ("Mug", "MUG-001", 7.9, "kitchen"),
    ("T-Shirt", "TSH-001", 12.0, "apparel"),
    ("Sticker Pack", "STK-001", 2.75, "stationery"),
];

/// Insert `count` sample products into the catalog under `data_dir`.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or a catalog
/// insert fails.
pub async fn run(data_dir: &str, count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let dir = Path::new(data_dir);
    tokio::fs::create_dir_all(dir).await?;

    let catalog = ProductCatalog::new(dir.join("products.json"));

    info!(data_dir, count, "Seeding catalog");

    for i in 0..count {
        let (title, code, price, category) = SAMPLES
            .get(i % SAMPLES.len())
            .copied()
            .unwrap_or(("Sample", "SMP-000", 1.0, "uncategorized"));

        let draft = ProductDraft {
            title: Some(format!("{title} #{}", i + 1)),
            code: Some(format!("{code}-{}", i + 1)),
            price: Some(price),
            category: Some(category.to_owned()),
            stock: Some(10),
            ..ProductDraft::default()
        };

        let product = catalog.create(draft).await?;
        info!(id = %product.id, title = %product.title, "Seeded product");
    }

    let total = catalog.list().await?.len();
    info!(total, "Seeding complete");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_seed_inserts_through_the_catalog() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().to_str().unwrap();

        run(data_dir, 7).await.unwrap();

        let catalog = ProductCatalog::new(dir.path().join("products.json"));
        let products = catalog.list().await.unwrap();
        assert_eq!(products.len(), 7);
        // Every seeded record got a generated id and the regular defaults.
        for product in products {
            assert_eq!(product.id.as_str().len(), 24);
            assert!(product.status);
        }
    }

    #[tokio::test]
    async fn test_seed_is_cumulative() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().to_str().unwrap();

        run(data_dir, 2).await.unwrap();
        run(data_dir, 3).await.unwrap();

        let catalog = ProductCatalog::new(dir.path().join("products.json"));
        assert_eq!(catalog.list().await.unwrap().len(), 5);
    }
}
