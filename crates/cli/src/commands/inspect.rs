//! Report record counts for both collections.

use std::path::Path;

use tracing::info;

use tienda_core::{Cart, Product};
use tienda_store::CollectionStore;

/// Print collection statistics for the data directory.
///
/// # Errors
///
/// Returns an error if either collection file is present but corrupt.
pub async fn run(data_dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    let dir = Path::new(data_dir);

    let products = CollectionStore::<Product>::new(dir.join("products.json"))
        .list()
        .await?;
    let carts = CollectionStore::<Cart>::new(dir.join("carts.json"))
        .list()
        .await?;

    let line_items: usize = carts.iter().map(|cart| cart.items.len()).sum();
    let units: u64 = carts
        .iter()
        .flat_map(|cart| cart.items.iter())
        .map(|item| u64::from(item.quantity))
        .sum();

    info!(data_dir, "Collection statistics");
    info!("  products: {}", products.len());
    info!("  carts: {}", carts.len());
    info!("  cart line items: {line_items} ({units} units)");
    Ok(())
}
