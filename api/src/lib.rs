//! HTTP surface for the prompt relay.
//!
//! One router, two routes: `GET /health` for liveness and `POST /prompt`
//! to forward a prompt to the foundation-model runtime. All shared state
//! lives in an [`core::app_state::AppState`] constructed once at startup
//! and handed to handlers by reference; there are no process globals.

use std::{env, error::Error, sync::Arc};

mod core;
mod middleware_layer;
mod routes;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;

use crate::core::app_state::AppState;
use crate::middleware_layer::cors_layer::permissive_cors;
use crate::routes::{health_route::health, prompt::prompt_route::relay_prompt};

/// Build the relay state, bind, and serve until Ctrl+C.
///
/// # Errors
/// Fails fast when the runtime client cannot be constructed or the listen
/// address cannot be bound; everything after startup is per-request.
pub async fn start() -> Result<(), Box<dyn Error>> {
    let state = Arc::new(AppState::from_env()?);

    let app = Router::new()
        .route("/health", get(health))
        .route("/prompt", post(relay_prompt))
        .layer(middleware::from_fn(permissive_cors))
        .with_state(state.clone());

    let addr = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, region = %state.region, "prompt relay listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
