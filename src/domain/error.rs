//! Server-side error taxonomy.
//!
//! Every failure of the processing pipeline is one of these variants; the
//! HTTP layer maps them to status codes and the `Display` text becomes the
//! `error` field of the JSON response. Provider internals never cross this
//! boundary as anything richer than the wrapped message string.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    /// Bad input at the request boundary. No external call is attempted.
    #[error("{0}")]
    Validation(String),

    /// The external model credential is not configured. Identical for
    /// every request until an operator fixes the environment.
    #[error("API_KEY environment variable not set on the server.")]
    MissingApiKey,

    /// A model call failed. The whole request fails; nothing is retried.
    #[error("Failed to process audio with Gemini API: {0}")]
    ModelCall(String),
}
