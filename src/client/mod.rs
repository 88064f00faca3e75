//! Client-side orchestrator for the backend endpoint.
//!
//! Mirrors what the browser front end does: read the selected file fully,
//! base64-encode it, issue exactly one request, and map the response or
//! failure into a user-facing outcome. Re-submission while a request is in
//! flight is rejected by a scoped guard that releases on every exit path.

pub mod media;

use std::sync::atomic::{AtomicBool, Ordering};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::types::{ErrorResponse, ProcessRequest, ProcessResponse};
use media::SelectedFile;

/// Client-side error taxonomy. File-read and transport failures are kept
/// distinct from server-reported errors so the user sees which side broke.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Por favor, selecciona un archivo de audio o video válido (ej. MP3, WAV, MP4).")]
    InvalidFile,

    #[error("Error al leer el archivo de audio: {0}")]
    FileRead(String),

    #[error("Ya hay una solicitud en curso.")]
    RequestInFlight,

    #[error("No se pudo conectar con el servidor: {0}")]
    Transport(String),

    #[error("El archivo es demasiado grande para el servidor.")]
    FileTooLarge,

    #[error("Error del servidor ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Scoped in-flight flag. Acquiring fails while another request holds it;
/// dropping the guard always clears the flag, also on error paths.
pub struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    pub fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
            .then_some(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

pub struct BackendClient {
    http: reqwest::Client,
    endpoint: String,
    in_flight: AtomicBool,
}

impl BackendClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Submit one file for transcription and translation.
    ///
    /// At most one request per client is in flight; a second call while the
    /// first is pending fails immediately with `RequestInFlight`.
    pub async fn submit(&self, file: &SelectedFile) -> Result<ProcessResponse, ClientError> {
        let _guard =
            InFlightGuard::acquire(&self.in_flight).ok_or(ClientError::RequestInFlight)?;

        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|e| ClientError::FileRead(e.to_string()))?;
        debug!("submitting {} bytes as {}", bytes.len(), file.mime_type);

        let body = ProcessRequest {
            base64_audio: BASE64.encode(&bytes),
            mime_type: file.mime_type.clone(),
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ClientError::Transport(format!("respuesta inválida: {}", e)));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let body_text = response.text().await.unwrap_or_default();

        Err(classify_error(status, &content_type, &body_text))
    }
}

/// Map a non-2xx response into a client error.
///
/// Error bodies are normally JSON `{error}`; when they are not (a proxy or
/// the body-size layer answered), classify by status code instead, with a
/// dedicated message for payload-too-large.
pub fn classify_error(status: StatusCode, content_type: &str, body: &str) -> ClientError {
    if content_type.contains("application/json") {
        if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
            return ClientError::Server {
                status: status.as_u16(),
                message: parsed.error,
            };
        }
    }

    if status == StatusCode::PAYLOAD_TOO_LARGE {
        return ClientError::FileTooLarge;
    }

    let message = match body.trim() {
        "" => status
            .canonical_reason()
            .unwrap_or("respuesta sin contenido")
            .to_string(),
        text => text.to_string(),
    };

    ClientError::Server {
        status: status.as_u16(),
        message,
    }
}
