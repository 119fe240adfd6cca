//! Model configs loaded from environment variables, one per caller profile.
//!
//! Two profiles exist:
//!
//! - **relay**    → short completions for the HTTP prompt relay
//! - **grounded** → longer completions for document question answering
//!
//! Both share the same model and endpoint resolution and differ only in the
//! sampling knobs.
//!
//! # Environment variables
//!
//! - `FM_ENDPOINT`   = runtime endpoint override; defaults to the regional URL
//! - `FM_MODEL`      = model identifier (default `anthropic.claude-v2`)
//! - `FM_MAX_TOKENS` = optional max-tokens override (u32)

use crate::config::model_config::ModelConfig;
use crate::error_handler::{Result, env_opt_u32};

/// Model identifier used when `FM_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "anthropic.claude-v2";

/// Sequence that ends a completion under the conversational framing.
const STOP_TURN: &str = "\n\nHuman:";

/// Resolves the runtime endpoint for `region`.
///
/// Precedence:
/// 1. `FM_ENDPOINT` if present and non-empty
/// 2. the regional default, `https://bedrock-runtime.{region}.amazonaws.com`
fn endpoint_for(region: &str) -> String {
    std::env::var("FM_ENDPOINT")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| format!("https://bedrock-runtime.{region}.amazonaws.com"))
}

fn model_from_env() -> String {
    std::env::var("FM_MODEL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

/// Config for the HTTP prompt relay: short, mildly creative completions.
///
/// # Defaults
/// - `max_tokens = 100` (unless `FM_MAX_TOKENS` overrides)
/// - `temperature = 0.5`
///
/// # Errors
/// [`crate::ConfigError::InvalidNumber`] if `FM_MAX_TOKENS` is set but not a
/// valid `u32`.
pub fn config_relay(region: &str) -> Result<ModelConfig> {
    let max_tokens = env_opt_u32("FM_MAX_TOKENS")?.unwrap_or(100);

    Ok(ModelConfig {
        region: region.to_string(),
        model: model_from_env(),
        endpoint: endpoint_for(region),
        max_tokens,
        temperature: 0.5,
        stop_sequences: vec![STOP_TURN.to_string()],
        timeout_secs: Some(60),
    })
}

/// Config for grounded document answering: longer completions with a little
/// more sampling freedom.
///
/// # Defaults
/// - `max_tokens = 500` (unless `FM_MAX_TOKENS` overrides)
/// - `temperature = 0.7`
///
/// # Errors
/// [`crate::ConfigError::InvalidNumber`] if `FM_MAX_TOKENS` is set but not a
/// valid `u32`.
pub fn config_grounded(region: &str) -> Result<ModelConfig> {
    let max_tokens = env_opt_u32("FM_MAX_TOKENS")?.unwrap_or(500);

    Ok(ModelConfig {
        region: region.to_string(),
        model: model_from_env(),
        endpoint: endpoint_for(region),
        max_tokens,
        temperature: 0.7,
        stop_sequences: vec![STOP_TURN.to_string()],
        timeout_secs: Some(60),
    })
}
