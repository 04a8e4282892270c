//! Caller side of the translation service.

use super::sanitizer::sanitize;
use super::translator::{TranslateError, Translator};
use crate::constants::TRANSLATE_ROUTE;
use crate::types::{TranslationRequest, TranslationResult};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

/// Talks to a running REST boundary over HTTP.
#[derive(Clone)]
pub struct RemoteTranslator {
    http: Client,
    url: String,
}

impl RemoteTranslator {
    pub fn new(server: &str) -> Self {
        Self::with_client(server, Client::new())
    }

    pub fn with_client(server: &str, http: Client) -> Self {
        let base = server.trim_end_matches('/');
        Self {
            http,
            url: format!("{base}{TRANSLATE_ROUTE}"),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Translator for RemoteTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        info!(url = %self.url, "Submitting text to translation service");
        let response = self
            .http
            .post(&self.url)
            .json(&TranslationRequest {
                text: text.to_string(),
            })
            .send()
            .await
            .map_err(TranslateError::Unreachable)?;

        let status = response.status();
        let body = response.text().await.map_err(TranslateError::Unreachable)?;
        debug!(status = status.as_u16(), bytes = body.len(), "Translation service responded");

        let result: TranslationResult =
            serde_json::from_str(&body).map_err(|_| TranslateError::Service {
                status: status.as_u16(),
                message: body.trim().to_string(),
            })?;

        match result.error {
            Some(message) => Err(TranslateError::Service {
                status: status.as_u16(),
                message,
            }),
            None if status.is_success() => Ok(result.translated_text),
            None => Err(TranslateError::Service {
                status: status.as_u16(),
                message: body.trim().to_string(),
            }),
        }
    }
}

/// Submits `text` through any [`Translator`] and cleans the result for
/// display.
pub async fn translate_for_display<T>(translator: &T, text: &str) -> Result<String, TranslateError>
where
    T: Translator + ?Sized,
{
    let raw = translator.translate(text).await?;
    let cleaned = sanitize(&raw);
    if cleaned != raw {
        debug!(
            raw_chars = raw.chars().count(),
            clean_chars = cleaned.chars().count(),
            "Sanitizer altered model output"
        );
    }
    Ok(cleaned)
}
