//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Audio Translator - transcribe audio and translate it into Spanish
#[derive(Parser)]
#[command(name = "audio-translator")]
#[command(about = "Transcribe audio/video files and translate them into Spanish via Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the transcription-translation HTTP service
    Serve(ServeArgs),
    /// Send a media file to the service and print both results
    Translate(TranslateArgs),
}

#[derive(Parser)]
pub struct ServeArgs {
    /// Config file path (default: ~/.config/audio-translator/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override listen port
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Parser)]
pub struct TranslateArgs {
    /// Path to the audio or video file
    pub input: PathBuf,

    /// Config file path (default: ~/.config/audio-translator/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Backend endpoint URL (overrides config)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,
    /// JSON output
    Json,
}
