pub mod app;
pub mod cli;
pub mod client;
pub mod domain;
pub mod gemini;
pub mod server;
pub mod services;

#[cfg(test)]
pub mod test_support;
