//! HTTP boundary: one POST endpoint plus a health check.
//!
//! The server is stateless across requests; `AppState` carries only the
//! read-only processing service. A missing credential does not abort
//! startup: every request then answers with the same configuration error
//! until the operator fixes the environment.

pub mod handlers;

use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use log::{info, warn};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::app::config::{api_key_from_env, Config, API_KEY_ENV};
use crate::gemini::GeminiClient;
use crate::services::ProcessingService;

#[derive(Clone)]
pub struct AppState {
    /// `None` when the API credential is not configured.
    pub service: Option<Arc<ProcessingService>>,
}

impl AppState {
    pub fn new(service: Option<Arc<ProcessingService>>) -> Self {
        Self { service }
    }

    /// Build the state from the environment credential and config.
    pub fn from_env(config: &Config) -> Result<Self> {
        match api_key_from_env() {
            Some(api_key) => {
                let model =
                    GeminiClient::new(api_key, config.model.clone(), config.request_timeout_secs)?;
                Ok(Self::new(Some(Arc::new(ProcessingService::new(Arc::new(
                    model,
                ))))))
            }
            None => {
                warn!(
                    "{} is not set; every request will fail until it is configured",
                    API_KEY_ENV
                );
                Ok(Self::new(None))
            }
        }
    }
}

/// Build the application router.
///
/// The permissive CORS layer lets a browser front end call the endpoint
/// directly. Bodies above `max_body_bytes` are rejected with 413 before
/// JSON parsing.
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/translate",
            post(handlers::translate).fallback(handlers::method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is terminated.
pub async fn serve(state: AppState, config: &Config) -> Result<()> {
    let app = router(state, config.max_body_bytes);
    let addr = format!("0.0.0.0:{}", config.port);

    let listener = TcpListener::bind(&addr).await?;
    info!("listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
