//! Transcription-translation pipeline.
//!
//! One `process()` call runs the whole request: validate the payload,
//! transcribe the media, and translate the transcript into Spanish. The
//! two model calls are strictly sequential and an empty transcript
//! short-circuits before the second call is made.

use std::sync::Arc;

use log::{debug, info};

use crate::domain::error::ProcessError;
use crate::domain::traits::GenerativeModel;
use crate::domain::types::{
    is_supported_media_type, MediaPayload, ProcessResponse, TRANSCRIPTION_SENTINEL,
    TRANSLATION_SENTINEL,
};

/// Instruction for the first model call: verbatim transcript only.
pub const TRANSCRIPTION_INSTRUCTION: &str =
    "Transcribe el texto de este archivo de audio. Responde únicamente con el texto transcrito.";

/// Prompt for the second model call, embedding the transcript verbatim.
pub fn translation_prompt(transcript: &str) -> String {
    format!(
        "Traduce el siguiente texto a Español. Responde únicamente con la traducción, \
         sin añadir explicaciones adicionales o texto introductorio.\n\n\
         Texto a traducir:\n\"{}\"",
        transcript
    )
}

/// Stateless per-request orchestrator over a generative model.
///
/// Holds only read-only shared state (the model handle), so concurrent
/// requests never contend; every other value is local to one `process()`
/// invocation.
pub struct ProcessingService {
    model: Arc<dyn GenerativeModel>,
}

impl ProcessingService {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Run transcription and translation for one media payload.
    ///
    /// A model failure at either step fails the whole request; there is no
    /// partial result and no retry.
    pub async fn process(&self, payload: &MediaPayload) -> Result<ProcessResponse, ProcessError> {
        if !is_supported_media_type(&payload.mime_type) {
            return Err(ProcessError::Validation(format!(
                "Unsupported mimeType: expected audio/* or video/*, got '{}'.",
                payload.mime_type
            )));
        }

        debug!(
            "transcribing {} bytes of {}",
            payload.bytes.len(),
            payload.mime_type
        );
        let transcript = self
            .model
            .generate_from_media(TRANSCRIPTION_INSTRUCTION, payload)
            .await
            .map_err(|e| ProcessError::ModelCall(e.to_string()))?;

        if transcript.trim().is_empty() {
            info!("no speech detected, skipping translation");
            return Ok(ProcessResponse {
                transcription: TRANSCRIPTION_SENTINEL.to_string(),
                translation: TRANSLATION_SENTINEL.to_string(),
            });
        }

        debug!("translating transcript of {} chars", transcript.len());
        let translation = self
            .model
            .generate_from_text(&translation_prompt(&transcript))
            .await
            .map_err(|e| ProcessError::ModelCall(e.to_string()))?;

        Ok(ProcessResponse {
            transcription: transcript,
            translation,
        })
    }
}
