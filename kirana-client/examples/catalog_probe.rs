//! Probe a running store: list categories and products, print a summary.
//!
//! ```bash
//! KIRANA_STORE_URL=http://localhost:8080 cargo run -p kirana-client --example catalog_probe
//! ```

use kirana_client::{CatalogStore, StoreClient, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = StoreConfig::from_env();
    tracing::info!(base_url = %config.base_url, "probing store");
    let client = StoreClient::new(&config)?;

    let categories = client.list_categories().await?;
    println!("{} categories", categories.len());
    for category in &categories {
        println!(
            "  {} ({} images, {} subcategories)",
            category.name,
            category.images.len(),
            category.subcategories.len()
        );
    }

    let products = client.list_products().await?;
    println!("{} products", products.len());
    for product in products.iter().take(10) {
        println!(
            "  {} - {} tiers, base price {}",
            product.product_name,
            product.quantity_options.len(),
            product.price
        );
    }

    Ok(())
}
