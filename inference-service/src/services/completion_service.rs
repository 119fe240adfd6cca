//! Completion client for the foundation-model runtime.
//!
//! This module implements a thin client for the runtime invoke API:
//! `POST {endpoint}/model/{model}/invoke` with a JSON payload carrying the
//! framed prompt and sampling knobs, returning `{ "completion": string }`.
//!
//! Callers pass plain instruction text; the conversational
//! `Human:`/`Assistant:` framing is applied here, once, so every caller
//! shares the same framing point.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::config::model_config::ModelConfig;
use crate::error_handler::{
    ConfigError, InferenceError, Result, validate_http_endpoint, validate_range_f32,
    validate_stop_sequences,
};

/// Prefix every prompt is framed with before invocation.
const TURN_PREFIX: &str = "Human: ";

/// Marker after which the model writes its completion.
const TURN_POSTFIX: &str = "\n\nAssistant:";

/// Substrings of a transport error that mean the regional host does not
/// resolve at all.
const UNREACHABLE_MARKERS: &[&str] = &["dns error", "no such host"];

/// Upstream body marker for an unknown model identifier.
const UNKNOWN_MODEL_MARKER: &str = "Could not resolve the foundation model";

/// Thin client for the runtime invoke API.
///
/// Initialized with a full [`ModelConfig`]. Reuses one HTTP client with a
/// configurable timeout. There is exactly one high-level call,
/// [`CompletionService::complete`].
pub struct CompletionService {
    client: reqwest::Client,
    cfg: ModelConfig,
    url_invoke: String,
}

impl CompletionService {
    /// Creates a new [`CompletionService`] from the given config.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidFormat`] if `cfg.endpoint` has no HTTP scheme
    /// - [`ConfigError::EmptyModel`] if `cfg.model` is blank
    /// - [`ConfigError::OutOfRange`] if `cfg.temperature` is outside `0.0..=1.0`
    /// - [`ConfigError::InvalidStopSequence`] if a stop sequence is empty
    /// - [`InferenceError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: ModelConfig) -> Result<Self> {
        validate_http_endpoint("FM_ENDPOINT", &cfg.endpoint)?;
        if cfg.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel.into());
        }
        validate_range_f32("temperature", cfg.temperature, 0.0, 1.0)?;
        validate_stop_sequences(&cfg.stop_sequences)?;

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let base = cfg.endpoint.trim_end_matches('/');
        let url_invoke = format!("{}/model/{}/invoke", base, cfg.model);

        info!(
            model = %cfg.model,
            region = %cfg.region,
            timeout_secs = cfg.timeout_secs.unwrap_or(60),
            "completion service initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_invoke,
        })
    }

    /// Region this client was configured for.
    pub fn region(&self) -> &str {
        &self.cfg.region
    }

    /// Sends one prompt and returns the raw model completion.
    ///
    /// # Errors
    /// - [`InferenceError::ServiceUnreachable`] when the regional host cannot
    ///   be resolved or connected to
    /// - [`InferenceError::ModelNotFound`] when the runtime rejects the
    ///   configured model identifier
    /// - [`InferenceError::HttpStatus`] for other non-2xx responses
    /// - [`InferenceError::Decode`] if the payload cannot be parsed
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let framed = frame(prompt);
        let body = InvokeRequest {
            prompt: &framed,
            max_tokens_to_sample: self.cfg.max_tokens,
            temperature: self.cfg.temperature,
            stop_sequences: &self.cfg.stop_sequences,
        };

        debug!("POST {}", self.url_invoke);
        let resp = self
            .client
            .post(&self.url_invoke)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify_transport(e))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            if is_unknown_model_body(&text) {
                return Err(InferenceError::ModelNotFound {
                    model: self.cfg.model.clone(),
                    region: self.cfg.region.clone(),
                });
            }
            let snippet = text.chars().take(240).collect::<String>();
            return Err(InferenceError::HttpStatus {
                status,
                url: self.url_invoke.clone(),
                snippet,
            });
        }

        let out: InvokeResponse = resp
            .json()
            .await
            .map_err(|e| InferenceError::Decode(format!("serde error: {e}")))?;

        Ok(out.completion)
    }

    /// Rewrites connect-level failures into the regional-availability
    /// message; everything else passes through as a transport error.
    fn classify_transport(&self, err: reqwest::Error) -> InferenceError {
        let detail = format!("{err:?}");
        if err.is_connect() || is_unreachable_message(&detail) {
            InferenceError::ServiceUnreachable {
                region: self.cfg.region.clone(),
            }
        } else {
            InferenceError::HttpTransport(err)
        }
    }
}

/// Applies the conversational framing the runtime expects around a prompt.
fn frame(prompt: &str) -> String {
    format!("{TURN_PREFIX}{prompt}{TURN_POSTFIX}")
}

/// Whether a transport error description points at an unresolvable host.
fn is_unreachable_message(detail: &str) -> bool {
    let lowered = detail.to_lowercase();
    UNREACHABLE_MARKERS.iter().any(|m| lowered.contains(m))
}

/// Whether an upstream error body reports an unknown model identifier.
fn is_unknown_model_body(body: &str) -> bool {
    body.contains(UNKNOWN_MODEL_MARKER)
}

/* ==========================
HTTP payloads
========================== */

/// Request body for the invoke API.
#[derive(Debug, Serialize)]
struct InvokeRequest<'a> {
    prompt: &'a str,
    max_tokens_to_sample: u32,
    temperature: f32,
    stop_sequences: &'a [String],
}

/// Response body for the invoke API.
#[derive(Debug, Deserialize)]
struct InvokeResponse {
    completion: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ModelConfig {
        ModelConfig {
            region: "us-east-1".into(),
            model: "anthropic.claude-v2".into(),
            endpoint: "https://runtime.example.com/".into(),
            max_tokens: 100,
            temperature: 0.5,
            stop_sequences: vec!["\n\nHuman:".into()],
            timeout_secs: Some(5),
        }
    }

    #[test]
    fn invoke_url_is_built_from_endpoint_and_model() {
        let svc = CompletionService::new(cfg()).unwrap();
        assert_eq!(
            svc.url_invoke,
            "https://runtime.example.com/model/anthropic.claude-v2/invoke"
        );
    }

    #[test]
    fn constructor_rejects_invalid_configs() {
        let mut bad_endpoint = cfg();
        bad_endpoint.endpoint = "runtime.example.com".into();
        assert!(CompletionService::new(bad_endpoint).is_err());

        let mut empty_model = cfg();
        empty_model.model = "  ".into();
        assert!(CompletionService::new(empty_model).is_err());

        let mut hot = cfg();
        hot.temperature = 2.0;
        assert!(CompletionService::new(hot).is_err());

        let mut blank_stop = cfg();
        blank_stop.stop_sequences.push(String::new());
        assert!(CompletionService::new(blank_stop).is_err());
    }

    #[test]
    fn prompts_are_framed_conversationally() {
        let framed = frame("What is Rust?");
        assert!(framed.starts_with("Human: "));
        assert!(framed.ends_with("\n\nAssistant:"));
        assert!(framed.contains("What is Rust?"));
    }

    #[test]
    fn unreachable_host_markers_are_recognized() {
        assert!(is_unreachable_message(
            "hyper_util::client: dns error: failed to lookup address information"
        ));
        assert!(is_unreachable_message("dial tcp: no such host"));
        assert!(!is_unreachable_message("connection reset by peer"));
    }

    #[test]
    fn unknown_model_body_marker_is_recognized() {
        assert!(is_unknown_model_body(
            "{\"message\":\"Could not resolve the foundation model from model identifier\"}"
        ));
        assert!(!is_unknown_model_body("{\"message\":\"throttled\"}"));
    }
}
