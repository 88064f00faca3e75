//! `serve` subcommand: start the HTTP service.

use anyhow::Result;

use super::args::ServeArgs;
use crate::app::config::load_config;
use crate::server::{self, AppState};

pub async fn run(args: ServeArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.port = port;
    }

    let state = AppState::from_env(&config)?;
    server::serve(state, &config).await
}
