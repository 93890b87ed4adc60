//! Data models
//!
//! Shared between the admin surfaces and the remote store (via API).
//! The store keeps MongoDB-style documents, so every entity id is a
//! `String` serialized as `_id` and field names ride the wire in
//! camelCase.

pub mod category;
pub mod product;
pub mod subcategory;

// Re-exports
pub use category::*;
pub use product::*;
pub use subcategory::*;
