//! Thin client for S3-compatible object storage.
//!
//! Fetches whole objects as raw bytes over plain `GET`; no listing, no
//! writes, no multipart. The store is an opaque collaborator: a bucket and
//! key go in, bytes or a descriptive error come out.

mod client;
mod config;
mod errors;

pub use client::ObjectStoreClient;
pub use config::StoreConfig;
pub use errors::{Result, StoreError};
