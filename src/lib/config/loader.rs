use super::error::ConfigError;
use super::generation::{GenerationConfig, RawGeneration};
use super::provider::{ModelProviderConfig, RawProviderConfig};
use super::server::{RawServer, ServerConfig};
use super::{AppConfig, DEFAULT_SYSTEM_PROMPT};
use crate::constants::{CONFIG_PATH, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{debug, info};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    system_prompt: Option<String>,
    system_prompt_file: Option<String>,
    #[serde(default)]
    generation: RawGeneration,
    #[serde(default)]
    rest_server: RawServer,
    primary: Option<RawProviderConfig>,
    secondary: Option<RawProviderConfig>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration from a file path
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => {
            let default_path = Path::new(CONFIG_PATH);
            match read_config(default_path) {
                Err(ConfigError::NotFound { .. }) => {
                    info!(
                        path = %default_path.display(),
                        "No configuration file found, using built-in defaults"
                    );
                    Ok(AppConfig::default())
                }
                other => other,
            }
        }
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(&content, path)
}

pub(super) fn parse_config(content: &str, path: &Path) -> Result<AppConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let primary =
        ModelProviderConfig::try_from(parsed.primary.ok_or(ConfigError::MissingPrimary)?)?;
    let secondary = parsed
        .secondary
        .map(ModelProviderConfig::try_from)
        .transpose()?;
    if let Some(secondary) = &secondary {
        if secondary.id == primary.id {
            return Err(ConfigError::DuplicateProviderId {
                provider: primary.id,
            });
        }
    }

    let system_prompt = resolve_system_prompt(parsed.system_prompt, parsed.system_prompt_file)?;

    Ok(AppConfig {
        system_prompt,
        generation: GenerationConfig::try_from(parsed.generation)?,
        rest_server: ServerConfig::try_from(parsed.rest_server)?,
        primary,
        secondary,
    })
}

/// Inline prompt wins over a prompt file; neither means the built-in prompt.
fn resolve_system_prompt(
    inline: Option<String>,
    file: Option<String>,
) -> Result<String, ConfigError> {
    let prompt = match (inline, file) {
        (Some(inline), _) => inline,
        (None, Some(file)) => {
            let expanded = shellexpand::full(&file)
                .map(|cow| cow.into_owned())
                .unwrap_or_else(|_| file.clone());
            let path = PathBuf::from(expanded);
            debug!(path = %path.display(), "Reading system prompt file");
            fs::read_to_string(&path).map_err(|source| ConfigError::PromptFile { path, source })?
        }
        (None, None) => DEFAULT_SYSTEM_PROMPT.to_string(),
    };

    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(ConfigError::EmptyPrompt);
    }
    Ok(prompt.to_string())
}
