//! Asset host upload
//!
//! Catalog images live off-store; the admin uploads raw bytes and the
//! store only ever sees the returned URL. Files are screened locally
//! before any bandwidth is spent on them.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::config::StoreConfig;
use crate::error::{ClientError, ClientResult};

/// Supported image formats
pub const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Maximum file size (5MB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// One file queued for upload
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    fn extension(&self) -> Option<String> {
        Path::new(&self.filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
    }
}

/// Hosted asset descriptor returned by the upload endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedAsset {
    pub url: String,
}

/// Hosts image bytes and hands back a public URL
///
/// There is no retry contract; a failed upload is reported once and the
/// caller decides what to do with it.
#[async_trait]
pub trait AssetHost: Send + Sync {
    async fn upload(&self, file: &UploadFile) -> ClientResult<UploadedAsset>;
}

/// HTTP asset host speaking `multipart/form-data`
#[derive(Debug, Clone)]
pub struct HttpAssetHost {
    client: Client,
    upload_url: String,
}

impl HttpAssetHost {
    pub fn new(config: &StoreConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            upload_url: config.upload_url.clone(),
        })
    }

    /// Screen a file before upload: extension, size, decodability
    pub fn validate(file: &UploadFile) -> ClientResult<()> {
        let ext = file.extension().ok_or_else(|| {
            ClientError::AssetRejected(format!(
                "'{}' has no file extension. Supported: {}",
                file.filename,
                SUPPORTED_FORMATS.join(", ")
            ))
        })?;
        if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
            return Err(ClientError::AssetRejected(format!(
                "Unsupported format '{}'. Supported: {}",
                ext,
                SUPPORTED_FORMATS.join(", ")
            )));
        }
        if file.bytes.len() > MAX_FILE_SIZE {
            return Err(ClientError::AssetRejected(format!(
                "File too large. Maximum size is {}MB",
                MAX_FILE_SIZE / 1024 / 1024
            )));
        }
        image::load_from_memory(&file.bytes)
            .map_err(|e| ClientError::AssetRejected(format!("Invalid image: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl AssetHost for HttpAssetHost {
    async fn upload(&self, file: &UploadFile) -> ClientResult<UploadedAsset> {
        Self::validate(file)?;

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.filename.clone())
            .mime_str("application/octet-stream")
            .map_err(|e| ClientError::InvalidResponse(format!("multipart build failed: {e}")))?;
        let form = Form::new().part("file", part);

        let response = self.client.post(&self.upload_url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, filename = %file.filename, "asset upload refused");
            return Err(ClientError::Remote(format!("Upload failed ({status}): {text}")));
        }

        let asset: UploadedAsset = response.json().await?;
        tracing::debug!(filename = %file.filename, url = %asset.url, "asset uploaded");
        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let img = RgbImage::new(2, 2);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn accepts_a_real_png() {
        let file = UploadFile::new("photo.png", png_bytes());
        assert!(HttpAssetHost::validate(&file).is_ok());
    }

    #[test]
    fn rejects_unsupported_extensions() {
        let file = UploadFile::new("animation.gif", png_bytes());
        assert!(matches!(
            HttpAssetHost::validate(&file),
            Err(ClientError::AssetRejected(_))
        ));
    }

    #[test]
    fn rejects_oversized_files() {
        let file = UploadFile::new("huge.png", vec![0u8; MAX_FILE_SIZE + 1]);
        let err = HttpAssetHost::validate(&file).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn rejects_bytes_that_do_not_decode() {
        let file = UploadFile::new("fake.png", vec![1, 2, 3, 4]);
        let err = HttpAssetHost::validate(&file).unwrap_err();
        assert!(err.to_string().contains("Invalid image"));
    }
}
