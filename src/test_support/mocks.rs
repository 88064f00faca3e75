//! Mock implementations for unit testing.
//!
//! `MockModel` implements `GenerativeModel` with scripted responses and
//! call counters, so pipeline tests can assert exactly how many external
//! calls happened and what the translation prompt contained.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::domain::traits::GenerativeModel;
use crate::domain::types::MediaPayload;

/// Scripted generative model.
pub struct MockModel {
    transcript: Result<String, String>,
    translation: Result<String, String>,
    media_calls: AtomicUsize,
    text_calls: AtomicUsize,
    last_text_prompt: Mutex<Option<String>>,
}

impl MockModel {
    /// Mock whose two calls succeed with the given strings.
    pub fn returning(transcript: &str, translation: &str) -> Self {
        Self {
            transcript: Ok(transcript.to_string()),
            translation: Ok(translation.to_string()),
            media_calls: AtomicUsize::new(0),
            text_calls: AtomicUsize::new(0),
            last_text_prompt: Mutex::new(None),
        }
    }

    /// Mock whose transcription call fails with the given message.
    pub fn failing_transcription(message: &str) -> Self {
        Self {
            transcript: Err(message.to_string()),
            translation: Ok(String::new()),
            media_calls: AtomicUsize::new(0),
            text_calls: AtomicUsize::new(0),
            last_text_prompt: Mutex::new(None),
        }
    }

    /// Mock that transcribes fine but fails the translation call.
    pub fn failing_translation(transcript: &str, message: &str) -> Self {
        Self {
            transcript: Ok(transcript.to_string()),
            translation: Err(message.to_string()),
            media_calls: AtomicUsize::new(0),
            text_calls: AtomicUsize::new(0),
            last_text_prompt: Mutex::new(None),
        }
    }

    /// How many media (transcription) calls were made.
    pub fn media_calls(&self) -> usize {
        self.media_calls.load(Ordering::SeqCst)
    }

    /// How many text (translation) calls were made.
    pub fn text_calls(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
    }

    /// The prompt passed to the most recent text call, if any.
    pub fn last_text_prompt(&self) -> Option<String> {
        self.last_text_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn generate_from_media(
        &self,
        _instruction: &str,
        _media: &MediaPayload,
    ) -> Result<String> {
        self.media_calls.fetch_add(1, Ordering::SeqCst);
        match &self.transcript {
            Ok(text) => Ok(text.clone()),
            Err(message) => bail!("{}", message),
        }
    }

    async fn generate_from_text(&self, prompt: &str) -> Result<String> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.translation {
            Ok(text) => Ok(text.clone()),
            Err(message) => bail!("{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> MediaPayload {
        MediaPayload {
            bytes: vec![0u8; 16],
            mime_type: "audio/wav".to_string(),
        }
    }

    #[tokio::test]
    async fn mock_counts_calls() {
        let model = MockModel::returning("texto", "text");
        assert_eq!(model.media_calls(), 0);

        model.generate_from_media("i", &payload()).await.unwrap();
        model.generate_from_text("p").await.unwrap();

        assert_eq!(model.media_calls(), 1);
        assert_eq!(model.text_calls(), 1);
        assert_eq!(model.last_text_prompt().as_deref(), Some("p"));
    }

    #[tokio::test]
    async fn failing_mock_returns_error() {
        let model = MockModel::failing_transcription("boom");
        let err = model
            .generate_from_media("i", &payload())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(model.media_calls(), 1);
    }
}
