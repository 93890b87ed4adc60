//! Shared types for the Kirana storefront
//!
//! Catalog models and the wire envelope exchanged with the remote store,
//! used by both the HTTP gateway and the admin core.

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    Category, CategoryCreate, CategoryUpdate, Product, ProductCreate, ProductUpdate, QuantityTier,
    Subcategory, SubcategoryCreate, SubcategoryUpdate,
};
pub use response::StoreResponse;
