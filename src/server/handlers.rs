//! Request handlers and error-to-status mapping.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, info};
use serde::Serialize;

use super::AppState;
use crate::domain::error::ProcessError;
use crate::domain::types::{ErrorResponse, MediaPayload, ProcessRequest};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Any verb other than POST on the endpoint: 405 with the same JSON
/// error shape as every other failure.
pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

/// `POST /api/translate`: transcribe, then translate into Spanish.
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<ProcessRequest>,
) -> Response {
    // Credential before body fields: a misconfigured server answers the
    // same 500 for every request, whatever the payload looks like.
    let Some(service) = state.service.as_ref() else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &ProcessError::MissingApiKey.to_string(),
        );
    };

    if request.base64_audio.is_empty() || request.mime_type.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing base64Audio or mimeType in request body.",
        );
    }

    let payload = match MediaPayload::from_wire(&request) {
        Ok(payload) => payload,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    };

    info!(
        "processing {} bytes of {}",
        payload.bytes.len(),
        payload.mime_type
    );

    match service.process(&payload).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => {
            error!("request failed: {}", err);
            error_response(status_for(&err), &err.to_string())
        }
    }
}

fn status_for(err: &ProcessError) -> StatusCode {
    match err {
        ProcessError::Validation(_) => StatusCode::BAD_REQUEST,
        ProcessError::MissingApiKey | ProcessError::ModelCall(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
