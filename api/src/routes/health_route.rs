//! GET /health — liveness probe with region and service identity.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::app_state::AppState;

/// Body of the health probe response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub region: String,
    pub service: String,
}

/// Handler: GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        region: state.region.clone(),
        service: state.service_name.clone(),
    })
}
