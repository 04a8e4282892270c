use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing required [primary] provider section in configuration")]
    MissingPrimary,

    #[error("provider '{provider}' is missing required field 'endpoint'")]
    MissingEndpoint { provider: String },

    #[error("provider '{provider}' is missing required field 'model'")]
    MissingModel { provider: String },

    #[error("primary and secondary providers must have different ids (both are '{provider}')")]
    DuplicateProviderId { provider: String },

    #[error("temperature must be within 0.0..=1.0, got {value}")]
    InvalidTemperature { value: f32 },

    #[error("max_tokens must be greater than zero")]
    InvalidMaxTokens,

    #[error("timeout_secs must be greater than zero")]
    InvalidTimeout,

    #[error("invalid bind address '{value}': {source}")]
    InvalidBind {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("failed to read system prompt from {path:?}: {source}")]
    PromptFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("system prompt must not be empty")]
    EmptyPrompt,
}
