//! HTTP client for the Gemini `generateContent` API.

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use log::debug;
use reqwest::Client;

use super::types::{Content, GenerateContentRequest, GenerateContentResponse, Part};
use crate::domain::traits::GenerativeModel;
use crate::domain::types::MediaPayload;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a client for a fixed model with an explicit request timeout.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Point the client at a different host (local stub during development).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn generate(&self, parts: Vec<Part>) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let request = GenerateContentRequest {
            contents: vec![Content::user(parts)],
        };

        debug!("POST {}", url);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow!("Gemini request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Gemini returned {}: {}", status, body.trim()));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse Gemini response: {}", e))?;

        Ok(parsed.text())
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_from_media(
        &self,
        instruction: &str,
        media: &MediaPayload,
    ) -> Result<String> {
        let parts = vec![
            Part::inline_data(media.mime_type.clone(), BASE64.encode(&media.bytes)),
            Part::text(instruction),
        ];
        self.generate(parts).await
    }

    async fn generate_from_text(&self, prompt: &str) -> Result<String> {
        self.generate(vec![Part::text(prompt)]).await
    }
}
