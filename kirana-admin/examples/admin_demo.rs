//! Drive the admin core against a running store from the terminal:
//! list the categories, create one, and list again.
//!
//! ```bash
//! KIRANA_STORE_URL=http://localhost:8080 cargo run -p kirana-admin --example admin_demo
//! ```

use std::sync::Arc;

use kirana_admin::{AutoConfirm, CategoryPage, ScrollLock, TracingNotifier};
use kirana_client::{HttpAssetHost, StoreClient, StoreConfig};
use shared::util::secure_url;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = StoreConfig::from_env();
    let store = Arc::new(StoreClient::new(&config)?);
    let assets = Arc::new(HttpAssetHost::new(&config)?);

    let mut page = CategoryPage::new(
        store,
        assets,
        Arc::new(TracingNotifier),
        Arc::new(AutoConfirm),
        ScrollLock::new(),
    );

    page.load().await?;
    println!("{} categories before", page.list().len());
    for category in page.list().items() {
        let thumb = category
            .thumbnail()
            .map(|t| secure_url(t, &config.asset_base_url))
            .unwrap_or_else(|| "-".into());
        println!("  {} ({} images, thumb {thumb})", category.name, category.images.len());
    }

    page.open_create();
    let session = page.session_mut().expect("editor just opened");
    session.set_name("Demo Category");
    session
        .images_mut()
        .push("https://res.cloudinary.com/demo/image/upload/sample.webp");

    match page.submit().await {
        Ok(ack) => println!("store said: {ack}"),
        Err(err) => println!("submit failed: {err}"),
    }

    println!("{} categories after", page.list().len());
    Ok(())
}
