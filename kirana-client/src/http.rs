//! HTTP transport to the remote store

use std::time::Duration;

use http::StatusCode;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::StoreResponse;

use crate::config::StoreConfig;
use crate::error::{ClientError, ClientResult};

/// HTTP client for the remote store API
///
/// Carries a cookie jar so the session the store's auth layer sets is
/// replayed on every subsequent call; auth itself stays server-side.
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    base_url: String,
}

impl StoreClient {
    pub fn new(config: &StoreConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .cookie_store(true)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> ClientResult<StoreResponse<T>> {
        let response = self.client.get(self.url(path)).send().await?;
        self.handle_response(response).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<StoreResponse<T>> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        self.handle_response(response).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<StoreResponse<T>> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        self.handle_response(response).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> ClientResult<StoreResponse<T>> {
        let response = self.client.delete(self.url(path)).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<StoreResponse<T>> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // The store wraps most rejections in the envelope even on 4xx/5xx
            if let Ok(envelope) = serde_json::from_str::<StoreResponse<T>>(&text) {
                if !envelope.success {
                    return Err(ClientError::Remote(envelope.message));
                }
            }
            return Err(match status {
                StatusCode::UNAUTHORIZED => ClientError::Remote("Authentication required".into()),
                StatusCode::FORBIDDEN => ClientError::Remote(format!("Permission denied: {text}")),
                StatusCode::NOT_FOUND => ClientError::Remote(format!("Not found: {text}")),
                _ => ClientError::Remote(format!("HTTP {status}: {text}")),
            });
        }

        serde_json::from_str(&text).map_err(|err| {
            tracing::warn!(error = %err, "store reply did not match the envelope contract");
            ClientError::InvalidResponse(err.to_string())
        })
    }
}
