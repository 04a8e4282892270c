//! Base HTTP client with shared logic

use crate::constants::ERROR_BODY_SNIPPET_CHARS;
use crate::infrastructure::model::types::ModelError;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use tracing::debug;

/// Base HTTP client with shared functionality
#[derive(Clone)]
pub struct HttpClientBase {
    pub id: String,
    pub url: String,
    pub api_key: Option<String>,
    pub http: Client,
}

impl HttpClientBase {
    pub fn new(id: String, url: String, api_key: Option<String>, http: Client) -> Self {
        Self {
            id,
            url,
            api_key,
            http,
        }
    }

    /// Post JSON with bearer auth and return the raw success body.
    ///
    /// Non-2xx statuses become [`ModelError::Http`] carrying a snippet of
    /// the response body.
    pub async fn post_with_bearer<Req>(&self, body: &Req) -> Result<String, ModelError>
    where
        Req: Serialize,
    {
        let api_key = self.require_api_key()?;

        let response = self
            .http
            .post(&self.url)
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| ModelError::network(&self.id, e))?;

        let status = response.status();
        debug!(provider = self.id.as_str(), status = status.as_u16(), "Provider responded");

        let text = response
            .text()
            .await
            .map_err(|e| ModelError::network(&self.id, e))?;

        if !status.is_success() {
            return Err(ModelError::http(&self.id, status, snippet(&text)));
        }
        Ok(text)
    }

    fn require_api_key(&self) -> Result<&str, ModelError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ModelError::missing_api_key(&self.id))
    }
}

fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(ERROR_BODY_SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
