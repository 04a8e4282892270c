//! REST-only binary entry point
//!
//! Runs only the translation API server. Intended for production
//! deployment behind a static front end on another origin.

use clap::Parser;
use kanji_mix::application::FallbackTranslator;
use kanji_mix::config::AppConfig;
use kanji_mix::server;
use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "kanji-mix-rest", about = "kanji-mix REST API Server")]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// REST API bind address (overrides config if specified)
    #[arg(long)]
    addr: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    kanji_mix::init_tracing();
    info!("Starting kanji-mix REST API Server");

    let file_config = AppConfig::load(args.config.as_deref())?;
    debug!(
        primary = %file_config.primary.id,
        secondary = file_config.secondary.as_ref().map(|s| s.id.as_str()),
        "Configuration loaded"
    );

    // Use CLI addr if provided, otherwise use config bind address
    let addr = args.addr.unwrap_or(file_config.rest_server.bind);

    let translator = Arc::new(FallbackTranslator::from_config(&file_config)?);

    info!(addr = %addr, "REST server starting");
    server::serve(translator, addr).await?;

    Ok(())
}
