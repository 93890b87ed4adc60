//! Client error types

use thiserror::Error;

/// Gateway error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a store reply arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Store replied with `success: false`
    #[error("Store rejected request: {0}")]
    Remote(String),

    /// Response body did not match the envelope contract
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File refused before upload (too large, wrong format, undecodable)
    #[error("Asset rejected: {0}")]
    AssetRejected(String),
}

/// Result type for gateway operations
pub type ClientResult<T> = Result<T, ClientError>;
