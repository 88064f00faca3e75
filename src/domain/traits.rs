//! Core domain trait for dependency inversion.
//!
//! The processing pipeline talks to the external generative model through
//! this trait only, which keeps the two-step orchestration testable with
//! mock implementations and independent of the concrete provider.

use async_trait::async_trait;

use crate::domain::types::MediaPayload;

/// An opaque remote model: media or text in, plain text out.
///
/// Both operations may fail; the caller treats any error as terminal for
/// the current request. No retry or backoff lives behind this trait.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Run one model call over inline media plus an instruction.
    async fn generate_from_media(
        &self,
        instruction: &str,
        media: &MediaPayload,
    ) -> anyhow::Result<String>;

    /// Run one model call over a plain text prompt.
    async fn generate_from_text(&self, prompt: &str) -> anyhow::Result<String>;
}
