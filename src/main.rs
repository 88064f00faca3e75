use anyhow::Result;
use clap::Parser;

use audio_translator::cli::args::{Cli, Commands};
use audio_translator::cli::{serve, translate};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Translate(args) => translate::run(args).await,
    }
}
