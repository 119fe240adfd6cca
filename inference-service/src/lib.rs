//! Typed client for a hosted foundation-model runtime.
//!
//! The runtime speaks a small "invoke" protocol: a framed text prompt goes
//! in, a single completion comes back. This crate owns the configuration,
//! the wire DTOs, the unified error type with operator-facing rewrites, and
//! one preconfigured HTTP client per service. No retries, no streaming, no
//! state beyond the client handle.

pub mod config;
pub mod error_handler;
pub mod services;

pub use config::model_config::ModelConfig;
pub use error_handler::{ConfigError, InferenceError, Result};
pub use services::completion_service::CompletionService;
