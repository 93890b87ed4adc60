//! Catalog list snapshots
//!
//! A list view shows whatever the store last said, nothing else. Every
//! load replaces the snapshot wholesale; there is no diffing and no
//! cache surviving between loads, so a re-fetch after a mutation is the
//! one and only resync path.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kirana_client::{CatalogStore, ClientResult};
use shared::models::{Category, Product, Subcategory};

use crate::error::EditResult;

/// A catalog level the store can list wholesale
#[async_trait]
pub trait ListLevel: Sized + Send {
    async fn fetch<S: CatalogStore + ?Sized>(store: &S) -> ClientResult<Vec<Self>>;
}

#[async_trait]
impl ListLevel for Category {
    async fn fetch<S: CatalogStore + ?Sized>(store: &S) -> ClientResult<Vec<Self>> {
        store.list_categories().await
    }
}

#[async_trait]
impl ListLevel for Subcategory {
    async fn fetch<S: CatalogStore + ?Sized>(store: &S) -> ClientResult<Vec<Self>> {
        store.list_subcategories().await
    }
}

#[async_trait]
impl ListLevel for Product {
    async fn fetch<S: CatalogStore + ?Sized>(store: &S) -> ClientResult<Vec<Self>> {
        store.list_products().await
    }
}

/// Read-only snapshot of one catalog level
#[derive(Debug, Clone)]
pub struct CatalogList<T> {
    items: Vec<T>,
    fetched_at: Option<DateTime<Utc>>,
}

impl<T> Default for CatalogList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            fetched_at: None,
        }
    }
}

impl<T: ListLevel> CatalogList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            fetched_at: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// When the snapshot was last fetched; `None` before the first load
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Replace the snapshot with the store's current truth.
    ///
    /// On failure the previous snapshot stays on screen; the caller
    /// surfaces the error.
    pub async fn load<S>(&mut self, store: &S) -> EditResult<()>
    where
        S: CatalogStore + ?Sized,
    {
        let items = T::fetch(store).await?;
        tracing::debug!(count = items.len(), "snapshot replaced");
        self.items = items;
        self.fetched_at = Some(Utc::now());
        Ok(())
    }
}
