//! Admin page controllers
//!
//! One controller per catalog level. Each composes the level's list
//! snapshot with at most one open edit session, engages the scroll
//! lock while an editor modal is up, and wires the session's refresh
//! hook back to its own list.

mod category;
mod product;
mod subcategory;

pub use category::CategoryPage;
pub use product::ProductPage;
pub use subcategory::SubcategoryPage;

use async_trait::async_trait;
use kirana_client::CatalogStore;

use crate::list::{CatalogList, ListLevel};
use crate::session::SessionHost;

/// Session host backed by a page's own list: refresh re-fetches the
/// snapshot, close flags the editor for teardown.
struct ListRefresh<'a, T> {
    store: &'a dyn CatalogStore,
    list: &'a mut CatalogList<T>,
    closed: bool,
}

impl<'a, T> ListRefresh<'a, T> {
    fn new(store: &'a dyn CatalogStore, list: &'a mut CatalogList<T>) -> Self {
        Self {
            store,
            list,
            closed: false,
        }
    }

    fn closed(&self) -> bool {
        self.closed
    }
}

#[async_trait]
impl<T: ListLevel> SessionHost for ListRefresh<'_, T> {
    async fn refresh(&mut self) {
        if let Err(err) = self.list.load(self.store).await {
            // the stale snapshot stays up; the next manual load recovers
            tracing::warn!(error = %err, "post-mutation refresh failed");
        }
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
