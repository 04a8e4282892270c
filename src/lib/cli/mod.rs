use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "kanji-mix",
    version,
    about = "Rewrite Japanese, Chinese or English text as a kanji/English blend"
)]
pub struct Cli {
    /// Configuration file (defaults to config/kanji-mix.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, short, value_enum, default_value_t = RunMode::Rest)]
    pub mode: RunMode,
    /// REST bind address (overrides config)
    #[arg(long)]
    pub rest_addr: Option<SocketAddr>,
    /// Base URL of a running REST server; translate and check modes call
    /// it instead of the providers directly
    #[arg(long)]
    pub server: Option<String>,
    /// Read the text to translate from a file
    #[arg(long)]
    pub input_file: Option<PathBuf>,
    /// Compliance suite (JSON) for check mode
    #[arg(long)]
    pub suite: Option<PathBuf>,
    /// Text to translate
    pub text: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// REST API server
    Rest,
    /// Translate once and print the sanitized result
    Translate,
    /// Run a compliance suite against the translator
    Check,
}
