//! Client configuration

/// Configuration for connecting to the remote store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Asset host upload endpoint; defaults to the store's own route
    pub upload_url: String,

    /// Base URL relative image paths are resolved against for display
    pub asset_base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl StoreConfig {
    /// Create a new configuration for the given store
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            upload_url: format!("{}/api/upload-image", base_url.trim_end_matches('/')),
            asset_base_url: base_url.clone(),
            base_url,
            timeout: 30,
        }
    }

    /// Set the asset host upload endpoint
    pub fn with_upload_url(mut self, url: impl Into<String>) -> Self {
        self.upload_url = url.into();
        self
    }

    /// Set the display base URL for relative image paths
    pub fn with_asset_base_url(mut self, url: impl Into<String>) -> Self {
        self.asset_base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Load configuration from the environment, honoring a local `.env`
    ///
    /// Recognized variables: `KIRANA_STORE_URL`, `KIRANA_UPLOAD_URL`,
    /// `KIRANA_ASSET_URL`, `KIRANA_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let base_url = std::env::var("KIRANA_STORE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let mut config = Self::new(base_url);

        if let Ok(url) = std::env::var("KIRANA_UPLOAD_URL") {
            config.upload_url = url;
        }
        if let Ok(url) = std::env::var("KIRANA_ASSET_URL") {
            config.asset_base_url = url;
        }
        config.timeout = std::env::var("KIRANA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(config.timeout);

        config
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_upload_url_from_base() {
        let config = StoreConfig::new("http://localhost:8080/");
        assert_eq!(config.upload_url, "http://localhost:8080/api/upload-image");
        assert_eq!(config.base_url, "http://localhost:8080/");
    }

    #[test]
    fn builders_override_defaults() {
        let config = StoreConfig::new("http://localhost:8080")
            .with_upload_url("https://assets.example.com/upload")
            .with_timeout(5);
        assert_eq!(config.upload_url, "https://assets.example.com/upload");
        assert_eq!(config.timeout, 5);
    }
}
