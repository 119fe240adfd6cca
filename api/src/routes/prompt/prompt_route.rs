//! POST /prompt — forwards a prompt to the foundation-model runtime.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::warn;

use crate::core::app_state::AppState;
use crate::routes::prompt::prompt_request::{ErrorResponse, PromptRequest, PromptResponse};

/// Handler: POST /prompt
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/prompt \
///   -H 'content-type: application/json' \
///   -d '{"prompt": "What is the capital of France?"}'
/// ```
pub async fn relay_prompt(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<PromptResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(req) = body.map_err(|rej| bad_request(format!("invalid request format: {rej}")))?;

    // Reject empty prompts before any model call.
    let prompt = validate_prompt(&req.prompt).map_err(|msg| bad_request(msg.to_string()))?;

    let completion = state.completions.complete(prompt).await.map_err(|e| {
        warn!(error = %e, "inference call failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(PromptResponse {
        response: completion,
    }))
}

/// Trims the prompt and rejects it when nothing remains.
pub(crate) fn validate_prompt(prompt: &str) -> Result<&str, &'static str> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        Err("prompt cannot be empty")
    } else {
        Ok(trimmed)
    }
}

fn bad_request(msg: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: msg }))
}

#[cfg(test)]
mod tests {
    use super::validate_prompt;

    #[test]
    fn whitespace_only_prompt_is_rejected() {
        assert!(validate_prompt("  ").is_err());
        assert!(validate_prompt("").is_err());
        assert!(validate_prompt("\n\t").is_err());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(validate_prompt("  hello  "), Ok("hello"));
    }
}
