//! HTTP gateway to the remote Kirana store
//!
//! Wraps the store's REST API behind the [`CatalogStore`] trait and the
//! external asset host behind [`AssetHost`], so the admin core never
//! touches a URL or an envelope directly.

pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod upload;

// Re-exports
pub use catalog::CatalogStore;
pub use config::StoreConfig;
pub use error::{ClientError, ClientResult};
pub use http::StoreClient;
pub use upload::{AssetHost, HttpAssetHost, UploadFile, UploadedAsset};
