//! Model types - call settings and error taxonomy

use crate::config::{GenerationConfig, ModelProviderConfig};
use reqwest::StatusCode;
use thiserror::Error;

/// Per-provider request settings sent alongside the messages.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderCallConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stream: bool,
}

impl ProviderCallConfig {
    pub fn new(provider: &ModelProviderConfig, generation: &GenerationConfig) -> Self {
        Self {
            model: provider.model.clone(),
            temperature: generation.temperature,
            max_tokens: generation.max_tokens,
            stream: false,
        }
    }
}

/// Failure of a single provider attempt.
///
/// Every variant carries the provider id so messages stay attributable
/// once the orchestrator merges them.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("provider '{provider}' requires an API key")]
    MissingApiKey { provider: String },
    #[error("{provider} API error: {status} - {body}")]
    Http {
        provider: String,
        status: StatusCode,
        body: String,
    },
    #[error("invalid response format from {provider} API: {reason}")]
    InvalidResponse { provider: String, reason: String },
    #[error("network error calling provider '{provider}': {source}")]
    Network {
        provider: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ModelError {
    pub fn missing_api_key(provider: impl Into<String>) -> Self {
        Self::MissingApiKey {
            provider: provider.into(),
        }
    }

    pub fn http(provider: impl Into<String>, status: StatusCode, body: impl Into<String>) -> Self {
        Self::Http {
            provider: provider.into(),
            status,
            body: body.into(),
        }
    }

    pub fn invalid_response(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    pub fn network(provider: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            provider: provider.into(),
            source,
        }
    }

    pub fn provider(&self) -> &str {
        match self {
            ModelError::MissingApiKey { provider }
            | ModelError::Http { provider, .. }
            | ModelError::InvalidResponse { provider, .. }
            | ModelError::Network { provider, .. } => provider,
        }
    }

    /// Short classification used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ModelError::MissingApiKey { .. } => "missing_api_key",
            ModelError::Http { .. } => "http",
            ModelError::InvalidResponse { .. } => "format",
            ModelError::Network { source, .. } if source.is_timeout() => "timeout",
            ModelError::Network { .. } => "transport",
        }
    }
}
