//! # Provider Configuration
//!
//! Both the primary and the fallback provider speak the OpenAI-compatible
//! chat-completion protocol; they differ only in endpoint, model and key.
//!
//! ```toml
//! [primary]
//! id = "deepseek"
//! endpoint = "https://api.deepseek.com"
//! api_path = "/chat/completions"
//! model = "deepseek-chat"
//! api_key = "DEEPSEEK_API_KEY"
//! ```

use super::error::ConfigError;
use crate::constants::{
    DEFAULT_PRIMARY_API_PATH, DEFAULT_PRIMARY_ENDPOINT, DEFAULT_PRIMARY_ID,
    DEFAULT_PRIMARY_KEY_ENV, DEFAULT_PRIMARY_MODEL, DEFAULT_SECONDARY_API_PATH,
    DEFAULT_SECONDARY_ENDPOINT, DEFAULT_SECONDARY_ID, DEFAULT_SECONDARY_KEY_ENV,
    DEFAULT_SECONDARY_MODEL,
};
use serde::{Deserialize, Serialize};

const OPENAI_COMPAT_API_PATH: &str = "/v1/chat/completions";

/// Configuration for one chat-completion provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelProviderConfig {
    /// Name used in logs and failure messages (e.g. "deepseek")
    pub id: String,
    /// Base URL of the API
    pub endpoint: String,
    /// Path appended to `endpoint` for chat completions
    pub api_path: String,
    /// Model identifier sent in every request
    pub model: String,
    /// Name of the environment variable holding the API key.
    /// `${VAR}` is accepted as well as a bare `VAR`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl ModelProviderConfig {
    pub fn deepseek() -> Self {
        Self {
            id: DEFAULT_PRIMARY_ID.to_string(),
            endpoint: DEFAULT_PRIMARY_ENDPOINT.to_string(),
            api_path: DEFAULT_PRIMARY_API_PATH.to_string(),
            model: DEFAULT_PRIMARY_MODEL.to_string(),
            api_key: Some(DEFAULT_PRIMARY_KEY_ENV.to_string()),
        }
    }

    pub fn openai() -> Self {
        Self {
            id: DEFAULT_SECONDARY_ID.to_string(),
            endpoint: DEFAULT_SECONDARY_ENDPOINT.to_string(),
            api_path: DEFAULT_SECONDARY_API_PATH.to_string(),
            model: DEFAULT_SECONDARY_MODEL.to_string(),
            api_key: Some(DEFAULT_SECONDARY_KEY_ENV.to_string()),
        }
    }

    /// Full chat-completion URL.
    ///
    /// ```
    /// use kanji_mix::config::ModelProviderConfig;
    ///
    /// let mut provider = ModelProviderConfig::deepseek();
    /// provider.endpoint = "https://api.deepseek.com/".to_string();
    /// assert_eq!(provider.url(), "https://api.deepseek.com/chat/completions");
    /// ```
    pub fn url(&self) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = self.api_path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct RawProviderConfig {
    pub(super) id: String,
    pub(super) endpoint: Option<String>,
    #[serde(default)]
    pub(super) api_path: Option<String>,
    pub(super) model: Option<String>,
    #[serde(default)]
    pub(super) api_key: Option<String>,
}

impl TryFrom<RawProviderConfig> for ModelProviderConfig {
    type Error = ConfigError;

    fn try_from(raw: RawProviderConfig) -> Result<Self, Self::Error> {
        let endpoint = raw
            .endpoint
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEndpoint {
                provider: raw.id.clone(),
            })?;
        let model = raw
            .model
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingModel {
                provider: raw.id.clone(),
            })?;

        Ok(Self {
            id: raw.id,
            endpoint,
            api_path: raw
                .api_path
                .unwrap_or_else(|| OPENAI_COMPAT_API_PATH.to_string()),
            model,
            api_key: raw.api_key.filter(|value| !value.trim().is_empty()),
        })
    }
}
