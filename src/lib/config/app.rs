use super::defaults::DEFAULT_SYSTEM_PROMPT;
use super::error::ConfigError;
use super::generation::GenerationConfig;
use super::provider::ModelProviderConfig;
use super::server::ServerConfig;
use std::path::Path;

/// Application configuration loaded from kanji-mix.toml
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub system_prompt: String,
    pub generation: GenerationConfig,
    pub rest_server: ServerConfig,
    pub primary: ModelProviderConfig,
    pub secondary: Option<ModelProviderConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.trim().to_string(),
            generation: GenerationConfig::default(),
            rest_server: ServerConfig::default(),
            primary: ModelProviderConfig::deepseek(),
            secondary: Some(ModelProviderConfig::openai()),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path, or from the default path when
    /// `None`. A missing default file yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Parse configuration from TOML text. Relative prompt files resolve
    /// against the current directory.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        super::loader::parse_config(content, Path::new("<inline>"))
    }
}
