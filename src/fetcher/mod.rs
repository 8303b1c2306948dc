//! HTTP fetching for page documents and image bytes.
//!
//! One [`HttpFetcher`] is constructed per scrape invocation and shared by
//! every task; `reqwest::Client` holds an internal connection pool, so
//! cloning the fetcher around is cheap.

use bytes::Bytes;
use reqwest::Client;
use thiserror::Error;
use url::Url;

/// Error types for fetch and download operations
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure or non-success HTTP status
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to write downloaded bytes to the local filesystem
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP collaborator used by the scrape engine.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch the document body at `url` as text.
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure or a non-2xx status.
    pub async fn fetch_document(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    /// Fetch the raw bytes at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure or a non-2xx status.
    pub async fn fetch_bytes(&self, url: &Url) -> Result<Bytes, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?)
    }
}
