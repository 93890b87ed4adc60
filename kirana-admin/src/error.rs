//! Admin-core error types

use kirana_client::ClientError;
use thiserror::Error;

/// Error raised while editing a draft or talking to the store
#[derive(Debug, Error)]
pub enum EditError {
    /// A required field is missing or malformed; no request was sent
    #[error("Validation failed: {0}")]
    Validation(String),

    /// List-edit misuse; the list is unchanged
    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Gateway failure, network-level or a store rejection
    #[error(transparent)]
    Store(#[from] ClientError),
}

impl EditError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type for admin operations
pub type EditResult<T> = Result<T, EditError>;
