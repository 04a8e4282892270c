//! Primary/secondary provider orchestration.

use crate::config::AppConfig;
use crate::model::{
    ModelClient, ModelError, ProviderFactory, build_http_client, resolve_api_key,
};
use crate::types::translation_messages;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Debug, Error)]
pub enum TranslateError {
    /// The only configured provider failed.
    #[error(transparent)]
    Provider(ModelError),
    /// Both providers failed; each reason keeps its provider id.
    #[error("{primary_id} failed ({primary}), {secondary_id} fallback also failed: {secondary}")]
    Combined {
        primary_id: String,
        primary: ModelError,
        secondary_id: String,
        secondary: ModelError,
    },
    /// A remote translation boundary answered with an error payload.
    #[error("translation service returned {status}: {message}")]
    Service { status: u16, message: String },
    #[error("failed to reach translation service: {0}")]
    Unreachable(#[source] reqwest::Error),
}

/// Anything that turns raw text into mixed-script text.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, TranslateError>;

    /// Whether a second provider stands behind the first.
    fn has_fallback(&self) -> bool {
        false
    }
}

/// Sequential two-step fallback over chat-completion providers.
///
/// The secondary is attempted only after the primary has failed, and each
/// provider is attempted at most once per call. No state survives between
/// calls.
pub struct FallbackTranslator {
    system_prompt: String,
    primary: Box<dyn ModelClient>,
    secondary: Option<Box<dyn ModelClient>>,
}

impl FallbackTranslator {
    pub fn new(system_prompt: impl Into<String>, primary: Box<dyn ModelClient>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            primary,
            secondary: None,
        }
    }

    pub fn with_secondary(mut self, secondary: Box<dyn ModelClient>) -> Self {
        self.secondary = Some(secondary);
        self
    }

    /// Builds both clients over one shared connection pool. A secondary
    /// whose key cannot be resolved is left out.
    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let http = build_http_client(&config.generation)?;

        let primary_key = resolve_api_key(&config.primary.id, config.primary.api_key.as_deref());
        if primary_key.is_none() {
            warn!(
                provider = config.primary.id.as_str(),
                "Primary provider has no API key; every primary attempt will fail"
            );
        }
        let primary = ProviderFactory::create(
            &config.primary,
            primary_key,
            &config.generation,
            http.clone(),
        );
        let mut translator = Self::new(config.system_prompt.clone(), Box::new(primary));

        if let Some(secondary) = &config.secondary {
            match resolve_api_key(&secondary.id, secondary.api_key.as_deref()) {
                Some(key) => {
                    let client =
                        ProviderFactory::create(secondary, Some(key), &config.generation, http);
                    translator = translator.with_secondary(Box::new(client));
                }
                None => warn!(
                    provider = secondary.id.as_str(),
                    "Secondary provider has no API key; fallback disabled"
                ),
            }
        }

        info!(
            primary = translator.primary.id(),
            secondary = translator.secondary.as_ref().map(|c| c.id()),
            "Translator ready"
        );
        Ok(translator)
    }

    pub fn primary_id(&self) -> &str {
        self.primary.id()
    }

    pub fn secondary_id(&self) -> Option<&str> {
        self.secondary.as_deref().map(|c| c.id())
    }
}

#[async_trait]
impl Translator for FallbackTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let messages = translation_messages(&self.system_prompt, text);
        debug!(chars = text.chars().count(), "Translating text");

        let primary_error = match self.primary.complete(&messages).await {
            Ok(translated) => {
                info!(provider = self.primary.id(), "Primary provider succeeded");
                return Ok(translated);
            }
            Err(err) => err,
        };

        let Some(secondary) = &self.secondary else {
            error!(
                provider = self.primary.id(),
                kind = primary_error.kind(),
                error = %primary_error,
                "Primary provider failed and no fallback is configured"
            );
            return Err(TranslateError::Provider(primary_error));
        };

        warn!(
            provider = self.primary.id(),
            fallback = secondary.id(),
            kind = primary_error.kind(),
            error = %primary_error,
            "Primary provider failed, trying fallback"
        );

        match secondary.complete(&messages).await {
            Ok(translated) => {
                info!(provider = secondary.id(), "Fallback provider succeeded");
                Ok(translated)
            }
            Err(secondary_error) => {
                let combined = TranslateError::Combined {
                    primary_id: self.primary.id().to_string(),
                    primary: primary_error,
                    secondary_id: secondary.id().to_string(),
                    secondary: secondary_error,
                };
                error!(error = %combined, "Both providers failed");
                Err(combined)
            }
        }
    }

    fn has_fallback(&self) -> bool {
        self.secondary.is_some()
    }
}
