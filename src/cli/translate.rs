//! `translate` subcommand: client-side orchestration for one file.

use anyhow::Result;

use super::args::{OutputFormat, TranslateArgs};
use crate::app::config::load_config;
use crate::client::{media, BackendClient};

pub async fn run(args: TranslateArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let endpoint = args.endpoint.unwrap_or(config.endpoint);

    let file = media::select_file(&args.input)?;
    let client = BackendClient::new(endpoint);

    println!("Procesando audio... (esto puede tardar unos momentos)");
    let result = client.submit(&file).await?;

    match args.format {
        OutputFormat::Text => {
            println!();
            println!("=== Transcripción Original ===");
            println!("{}", result.transcription);
            println!();
            println!("=== Traducción al Español ===");
            println!("{}", result.translation);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
