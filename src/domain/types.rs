//! Shared types crossing the client/service boundary.
//!
//! Wire structs mirror the JSON contract of the `/api/translate` endpoint
//! (camelCase field names). `MediaPayload` is the decoded, request-scoped
//! representation used by the processing pipeline; it is dropped as soon
//! as the request completes.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::domain::error::ProcessError;

/// Translation target is fixed; there is no language selection.
pub const TARGET_LANGUAGE: &str = "es";

/// Returned as the transcription when the model finds no speech.
pub const TRANSCRIPTION_SENTINEL: &str = "(No se detectó texto en el audio)";

/// Returned as the translation when transcription found no speech.
pub const TRANSLATION_SENTINEL: &str = "(No se pudo traducir ya que no se detectó texto)";

/// Request body of `POST /api/translate`.
///
/// Fields default to empty strings so that a body with missing keys still
/// deserializes; the handler turns empty fields into a 400 with a stable
/// error message instead of a generic deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    #[serde(default, rename = "base64Audio")]
    pub base64_audio: String,
    #[serde(default, rename = "mimeType")]
    pub mime_type: String,
}

/// Success body of `POST /api/translate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub transcription: String,
    pub translation: String,
}

/// Error body shared by all non-2xx JSON responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Decoded media content for one request.
#[derive(Debug, Clone)]
pub struct MediaPayload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl MediaPayload {
    /// Decode the wire representation. The base64 payload must reproduce
    /// the exact original file bytes.
    pub fn from_wire(request: &ProcessRequest) -> Result<Self, ProcessError> {
        let bytes = BASE64
            .decode(request.base64_audio.as_bytes())
            .map_err(|_| ProcessError::Validation("Invalid base64Audio payload.".to_string()))?;

        Ok(Self {
            bytes,
            mime_type: request.mime_type.clone(),
        })
    }
}

/// Whether a declared media type is accepted at the boundary.
pub fn is_supported_media_type(mime_type: &str) -> bool {
    mime_type.starts_with("audio/") || mime_type.starts_with("video/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_audio_and_video_types() {
        assert!(is_supported_media_type("audio/mpeg"));
        assert!(is_supported_media_type("audio/wav"));
        assert!(is_supported_media_type("video/mp4"));
    }

    #[test]
    fn rejects_other_types() {
        assert!(!is_supported_media_type("image/png"));
        assert!(!is_supported_media_type("application/pdf"));
        assert!(!is_supported_media_type("text/plain"));
        assert!(!is_supported_media_type(""));
    }

    #[test]
    fn payload_decodes_to_original_bytes() {
        let original: Vec<u8> = (0u8..=255).collect();
        let request = ProcessRequest {
            base64_audio: BASE64.encode(&original),
            mime_type: "audio/mpeg".to_string(),
        };

        let payload = MediaPayload::from_wire(&request).unwrap();
        assert_eq!(payload.bytes, original);
        assert_eq!(payload.mime_type, "audio/mpeg");
    }

    #[test]
    fn payload_rejects_invalid_base64() {
        let request = ProcessRequest {
            base64_audio: "not-valid-base64!!!".to_string(),
            mime_type: "audio/mpeg".to_string(),
        };

        let err = MediaPayload::from_wire(&request).unwrap_err();
        assert!(matches!(err, ProcessError::Validation(_)));
    }

    #[test]
    fn request_fields_default_when_missing() {
        let request: ProcessRequest = serde_json::from_str("{}").unwrap();
        assert!(request.base64_audio.is_empty());
        assert!(request.mime_type.is_empty());
    }

    #[test]
    fn request_uses_camel_case_on_the_wire() {
        let json = r#"{"base64Audio":"aGVsbG8=","mimeType":"audio/wav"}"#;
        let request: ProcessRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.base64_audio, "aGVsbG8=");
        assert_eq!(request.mime_type, "audio/wav");
    }
}
