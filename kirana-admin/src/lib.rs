//! Headless admin core for the Kirana storefront catalog
//!
//! Three catalog levels (category, subcategory, product), each managed
//! through the same loop: a list view holds the store's last snapshot,
//! an edit session holds a value-copy draft, and a successful submit
//! re-fetches the snapshot instead of merging anything locally. The
//! remote store stays the single source of truth throughout.
//!
//! Everything UI-shaped sits behind traits ([`Notifier`],
//! [`ConfirmDelete`], the gateway's `CatalogStore`/`AssetHost`), so the
//! core runs the same under a desktop shell or a test harness.

pub mod assets;
pub mod error;
pub mod list;
pub mod modal;
pub mod notify;
pub mod pages;
pub mod resolver;
pub mod session;
pub mod tiers;
pub mod validation;

// Re-exports
pub use assets::AssetList;
pub use error::{EditError, EditResult};
pub use list::{CatalogList, ListLevel};
pub use modal::{ScrollGuard, ScrollLock};
pub use notify::{AutoConfirm, ConfirmDelete, NoticeKind, Notifier, TracingNotifier};
pub use pages::{CategoryPage, ProductPage, SubcategoryPage};
pub use resolver::{ResolveState, SubcategoryResolver};
pub use session::{
    CategorySession, DeleteOutcome, ProductSession, SessionHost, SessionMode, SubcategorySession,
    delete_category, delete_product, delete_subcategory,
};
pub use tiers::TierList;
