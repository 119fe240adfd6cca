/// Connection settings for one bucket of an S3-compatible store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the store, e.g. `https://s3.us-east-1.amazonaws.com`.
    pub endpoint: String,

    /// Bucket holding the documents.
    pub bucket: String,

    /// Optional request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl StoreConfig {
    /// Settings for `bucket` served from `region`.
    ///
    /// Endpoint precedence:
    /// 1. `DOC_STORE_URL` from the environment, if present and non-empty
    /// 2. the regional default, `https://s3.{region}.amazonaws.com`
    pub fn for_region(region: &str, bucket: impl Into<String>) -> Self {
        let endpoint = std::env::var("DOC_STORE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| format!("https://s3.{region}.amazonaws.com"));

        Self {
            endpoint,
            bucket: bucket.into(),
            timeout_secs: None,
        }
    }
}
