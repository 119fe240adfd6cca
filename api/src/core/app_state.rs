use std::sync::Arc;

use inference_service::{CompletionService, InferenceError, config::default_config};

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Region reported by `/health` and used in operator-facing messages.
    pub region: String,
    /// Service name reported by `/health`.
    pub service_name: String,
    /// Client for the foundation-model runtime.
    pub completions: Arc<CompletionService>,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// # Errors
    /// Propagates config and client-construction failures from
    /// `inference-service`; the caller treats these as fatal at startup.
    pub fn from_env() -> Result<Self, InferenceError> {
        let region = std::env::var("FM_REGION").unwrap_or_else(|_| "us-east-1".into());
        let completions = CompletionService::new(default_config::config_relay(&region)?)?;

        Ok(Self {
            region,
            service_name: std::env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "fm-prompt-relay".into()),
            completions: Arc::new(completions),
        })
    }
}
