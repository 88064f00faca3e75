//! Application configuration.
//!
//! Tunables live in a TOML file; every field has a default so a missing or
//! partial file still yields a working configuration. The Gemini credential
//! deliberately never lives in the file: it is read from the `API_KEY`
//! environment variable once at startup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the Gemini API credential.
pub const API_KEY_ENV: &str = "API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Listen port for `serve`.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Gemini model id used for both transcription and translation.
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum accepted request body size. A 3 MB media file inflates to
    /// roughly 4 MB of base64, hence the default.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Per-call timeout for the Gemini API.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Backend endpoint used by the `translate` client command.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_port() -> u16 {
    8787
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_max_body_bytes() -> usize {
    4 * 1024 * 1024
}

fn default_request_timeout_secs() -> u64 {
    120
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8787/api/translate".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            model: default_model(),
            max_body_bytes: default_max_body_bytes(),
            request_timeout_secs: default_request_timeout_secs(),
            endpoint: default_endpoint(),
        }
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("audio-translator")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load the configuration, falling back to defaults when no file exists.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("No se pudo leer la configuración: {}", path.display()))?;

    toml::from_str(&content).with_context(|| "No se pudo interpretar la configuración")
}

/// Read the Gemini credential from the environment. Empty values count
/// as absent so a stray `API_KEY=` does not pass the configuration check.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
}
