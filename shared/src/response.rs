//! Store response envelope
//!
//! Every endpoint of the remote store replies with the same JSON shape:
//! ```json
//! {
//!     "success": true,
//!     "message": "Category created",
//!     "data": { ... }
//! }
//! ```
//! `data` is omitted by acknowledge-only endpoints (create, update,
//! delete), so rejection detail always travels in `message`.

use serde::{Deserialize, Serialize};

/// Unified store response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct StoreResponse<T> {
    pub success: bool,
    /// Human-readable message, surfaced to the admin as-is
    #[serde(default)]
    pub message: String,
    /// Response data (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> StoreResponse<T> {
    /// Create a successful response
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create a failed response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}
