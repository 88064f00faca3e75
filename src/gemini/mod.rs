//! Gemini API client.
//!
//! Implements `GenerativeModel` over the non-streaming `generateContent`
//! endpoint. The service treats this as an opaque remote capability: any
//! HTTP or parse failure surfaces as one error string.

pub mod client;
pub mod types;

pub use client::GeminiClient;
