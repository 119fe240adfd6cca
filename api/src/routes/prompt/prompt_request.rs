use serde::{Deserialize, Serialize};

/// Body of `POST /prompt`.
#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

/// Successful completion payload.
#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub response: String,
}

/// Error payload shared by 4xx/5xx responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
