//! Ordered image list editor
//!
//! Every entity draft owns one of these. Order is what you see on the
//! storefront: the first URL doubles as the thumbnail. Batch uploads
//! run concurrently and append as each file lands, so the final order
//! follows completion, not selection.

use futures::stream::{FuturesUnordered, StreamExt};
use kirana_client::{AssetHost, ClientError, UploadFile};

use crate::error::{EditError, EditResult};

/// Ordered list of hosted image URLs for one draft
#[derive(Debug, Clone, Default)]
pub struct AssetList {
    urls: Vec<String>,
}

impl AssetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from stored entity data (edit sessions).
    pub fn from_urls(urls: Vec<String>) -> Self {
        Self { urls }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn into_urls(self) -> Vec<String> {
        self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// First URL; doubles as the thumbnail
    pub fn first(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }

    /// Append a hosted URL. Duplicates are allowed.
    pub fn push(&mut self, url: impl Into<String>) {
        self.urls.push(url.into());
    }

    /// Remove the URL at `index`, shifting the rest left.
    pub fn remove(&mut self, index: usize) -> EditResult<String> {
        if index >= self.urls.len() {
            return Err(EditError::IndexOutOfRange {
                index,
                len: self.urls.len(),
            });
        }
        Ok(self.urls.remove(index))
    }

    /// Upload one file and append the hosted URL.
    pub async fn upload<H>(&mut self, host: &H, file: &UploadFile) -> EditResult<String>
    where
        H: AssetHost + ?Sized,
    {
        let asset = host.upload(file).await?;
        self.urls.push(asset.url.clone());
        Ok(asset.url)
    }

    /// Upload a batch concurrently.
    ///
    /// Each completed upload appends immediately; a failed file is
    /// skipped and reported, it never blocks the others. Returns the
    /// failures in completion order.
    pub async fn upload_batch<H>(&mut self, host: &H, files: Vec<UploadFile>) -> Vec<ClientError>
    where
        H: AssetHost + ?Sized,
    {
        let mut pending: FuturesUnordered<_> =
            files.iter().map(|file| host.upload(file)).collect();

        let mut failures = Vec::new();
        while let Some(finished) = pending.next().await {
            match finished {
                Ok(asset) => {
                    tracing::debug!(url = %asset.url, "image hosted");
                    self.urls.push(asset.url);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "image upload failed");
                    failures.push(err);
                }
            }
        }
        failures
    }
}
