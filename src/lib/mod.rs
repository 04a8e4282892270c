pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{compliance, invoker, sanitizer, translator};
pub use cli::{Cli, RunMode};
pub use config::{AppConfig, ModelProviderConfig};
pub use domain::types;
pub use infrastructure::{model, server};

use application::compliance::{CaseVerdict, ComplianceSuite, SuiteSummary, run_suite};
use application::{FallbackTranslator, RemoteTranslator, Translator, translate_for_display};
use std::error::Error;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing();
    info!("Starting kanji-mix");
    debug!(
        mode = ?cli.mode,
        config = ?cli.config,
        server = ?cli.server,
        "CLI arguments parsed"
    );

    let file_config = AppConfig::load(cli.config.as_deref())?;
    if let Some(path) = &cli.config {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path");
    }

    info!(mode = ?cli.mode, "Running in selected mode");
    match cli.mode {
        RunMode::Rest => {
            let addr = cli.rest_addr.unwrap_or(file_config.rest_server.bind);
            let translator = Arc::new(FallbackTranslator::from_config(&file_config)?);
            info!(addr = %addr, "Starting REST server");
            server::serve(translator, addr).await?;
        }
        RunMode::Translate => {
            let text = load_text(&cli)?;
            let translator = build_translator(&cli, &file_config)?;
            let output = translate_for_display(translator.as_ref(), &text).await?;
            println!("{output}");
        }
        RunMode::Check => {
            let path = cli
                .suite
                .as_deref()
                .ok_or("check mode requires --suite <path>")?;
            let suite = ComplianceSuite::load(path)?;
            let translator = build_translator(&cli, &file_config)?;
            let summary = run_suite(translator.as_ref(), &suite).await;
            print_summary(&summary);
            if !summary.all_passed() {
                return Err(format!("{} of {} cases failed", summary.failed(), summary.outcomes.len()).into());
            }
        }
    }
    info!("Execution finished");
    Ok(())
}

fn build_translator(cli: &Cli, config: &AppConfig) -> Result<Box<dyn Translator>, Box<dyn Error>> {
    match &cli.server {
        Some(server) => {
            info!(server = server.as_str(), "Using remote translation service");
            Ok(Box::new(RemoteTranslator::new(server)))
        }
        None => Ok(Box::new(FallbackTranslator::from_config(config)?)),
    }
}

pub fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .with_level(true)
            .init();
    });
}

fn load_text(cli: &Cli) -> Result<String, Box<dyn Error>> {
    if let Some(path) = &cli.input_file {
        info!(path = %path.display(), "Loading text from file");
        return non_empty(fs::read_to_string(path)?);
    }

    if !cli.text.is_empty() {
        info!("Using text provided through CLI arguments");
        return non_empty(cli.text.join(" "));
    }

    if !io::stdin().is_terminal() {
        info!("Reading text from standard input");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return non_empty(buffer);
    }

    warn!("Text not provided via arguments, file, or stdin");
    Err("text required via arguments, --input-file, or stdin".into())
}

fn non_empty(text: String) -> Result<String, Box<dyn Error>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("text must not be empty".into());
    }
    Ok(trimmed.to_string())
}

fn print_summary(summary: &SuiteSummary) {
    for outcome in &summary.outcomes {
        println!("Test: {}", outcome.description);
        println!("Input: {}", outcome.input);
        match &outcome.verdict {
            CaseVerdict::Passed { output } => {
                println!("Output: {output}");
                println!("✅ passed");
            }
            CaseVerdict::Failed { output, report } => {
                println!("Output: {output}");
                println!("❌ failed");
                if !report.forbidden.is_empty() {
                    let chars: String = report.forbidden.iter().collect();
                    println!("- forbidden characters: {chars}");
                }
                for pattern in &report.missing_patterns {
                    println!("- missing pattern: {pattern}");
                }
            }
            CaseVerdict::Errored { error } => println!("❌ error: {error}"),
        }
        println!();
    }
    println!(
        "Summary: {} passed, {} failed, {} total",
        summary.passed(),
        summary.failed(),
        summary.outcomes.len()
    );
}
