//! Object fetches over plain HTTP `GET`.

use std::time::Duration;

use tracing::{debug, instrument};

use crate::config::StoreConfig;
use crate::errors::{Result, StoreError};

/// Thin read-only client for one bucket.
///
/// Initialized with a full [`StoreConfig`]. Reuses one HTTP client with a
/// configurable timeout. There is exactly one high-level call,
/// [`ObjectStoreClient::get_object`].
pub struct ObjectStoreClient {
    client: reqwest::Client,
    cfg: StoreConfig,
    base_url: String,
}

impl ObjectStoreClient {
    /// Creates a new [`ObjectStoreClient`] from the given config.
    ///
    /// # Errors
    /// - [`StoreError::InvalidEndpoint`] if the endpoint has no HTTP scheme
    /// - [`StoreError::EmptyBucket`] if the bucket name is blank
    /// - [`StoreError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: StoreConfig) -> Result<Self> {
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(StoreError::InvalidEndpoint(cfg.endpoint));
        }
        if cfg.bucket.trim().is_empty() {
            return Err(StoreError::EmptyBucket);
        }

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = format!("{}/{}", endpoint.trim_end_matches('/'), cfg.bucket.trim());

        Ok(Self {
            client,
            cfg,
            base_url,
        })
    }

    /// Downloads one object and returns its raw bytes.
    ///
    /// # Errors
    /// - [`StoreError::EmptyKey`] if `key` is blank
    /// - [`StoreError::HttpStatus`] for non-2xx responses
    /// - [`StoreError::Transport`] for client errors
    #[instrument(skip(self), fields(bucket = %self.cfg.bucket))]
    pub async fn get_object(&self, key: &str) -> Result<Vec<u8>> {
        let url = self.object_url(key)?;

        debug!("GET {url}");
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let snippet = text.chars().take(240).collect::<String>();
            return Err(StoreError::HttpStatus {
                status,
                url,
                snippet,
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }

    /// Full URL for `key` inside the configured bucket.
    fn object_url(&self, key: &str) -> Result<String> {
        let key = key.trim().trim_start_matches('/');
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        Ok(format!("{}/{}", self.base_url, key))
    }
}
