//! Provider factory - creates clients from config

use super::clients::{HttpClientBase, OpenAIClient};
use super::types::ProviderCallConfig;
use crate::config::{GenerationConfig, ModelProviderConfig};
use reqwest::Client;
use std::env;
use tracing::{debug, warn};

/// Resolve API key from the environment variable named in config.
///
/// Accepts both `VAR` and `${VAR}`. Unset or blank variables resolve to
/// `None`.
pub fn resolve_api_key(provider: &str, key_ref: Option<&str>) -> Option<String> {
    let raw = key_ref.map(str::trim).filter(|raw| !raw.is_empty())?;
    let var = raw
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(raw);

    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => {
            debug!(
                provider,
                env_var = var,
                key = %redact_secret(&value),
                "Resolved API key"
            );
            Some(value)
        }
        Ok(_) => {
            warn!(provider, env_var = var, "API key environment variable is empty");
            None
        }
        Err(err) => {
            warn!(
                provider,
                env_var = var,
                %err,
                "API key environment variable is not set"
            );
            None
        }
    }
}

/// Loggable form of a secret: a short prefix plus its length.
pub fn redact_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}... (len {})", secret.chars().count())
}

/// Shared connection pool for every provider; the timeout bounds each attempt.
pub fn build_http_client(generation: &GenerationConfig) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(generation.timeout).build()
}

/// Factory for creating model clients from provider config.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Creates an OpenAI-compatible client with an already-resolved key.
    pub fn create(
        config: &ModelProviderConfig,
        api_key: Option<String>,
        generation: &GenerationConfig,
        http: Client,
    ) -> OpenAIClient {
        let base = HttpClientBase::new(config.id.clone(), config.url(), api_key, http);
        OpenAIClient::new(base, ProviderCallConfig::new(config, generation))
    }
}
