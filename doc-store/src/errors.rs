use reqwest::StatusCode;
use thiserror::Error;

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors produced by [`crate::ObjectStoreClient`].
///
/// All messages include the tag `[Doc Store]` to simplify attribution in
/// logs.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// Endpoint is empty or missing an http/https scheme.
    #[error("[Doc Store] invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Bucket name is empty.
    #[error("[Doc Store] bucket name must not be empty")]
    EmptyBucket,

    /// Object key is empty.
    #[error("[Doc Store] object key must not be empty")]
    EmptyKey,

    /// Transport/HTTP client error.
    #[error("[Doc Store] transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-successful HTTP status from the store.
    #[error("[Doc Store] HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body (trimmed).
        snippet: String,
    },
}
