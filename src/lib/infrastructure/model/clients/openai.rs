//! OpenAI-compatible client implementation (DeepSeek, OpenAI, Groq, ...)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::base::HttpClientBase;
use crate::infrastructure::model::traits::ModelClient;
use crate::infrastructure::model::types::{ModelError, ProviderCallConfig};
use crate::types::ChatMessage;

/// OpenAI-compatible chat-completion client
#[derive(Clone)]
pub struct OpenAIClient {
    base: HttpClientBase,
    call: ProviderCallConfig,
}

impl OpenAIClient {
    pub fn new(base: HttpClientBase, call: ProviderCallConfig) -> Self {
        Self { base, call }
    }

    pub fn model(&self) -> &str {
        &self.call.model
    }
}

#[async_trait]
impl ModelClient for OpenAIClient {
    fn id(&self) -> &str {
        &self.base.id
    }

    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ModelError> {
        let payload = OpenAIRequest {
            model: &self.call.model,
            messages: messages.iter().map(OpenAIMessage::from).collect(),
            temperature: self.call.temperature,
            max_tokens: self.call.max_tokens,
            stream: self.call.stream,
        };

        info!(
            provider = self.base.id.as_str(),
            model = self.call.model.as_str(),
            messages = messages.len(),
            "Sending request to OpenAI-compatible provider"
        );

        let body = self.base.post_with_bearer(&payload).await?;
        debug!(bytes = body.len(), "Received response from OpenAI-compatible provider");

        extract_content(&self.base.id, &body)
    }
}

/// Pulls `choices[0].message.content` out of a completion body.
fn extract_content(provider: &str, body: &str) -> Result<String, ModelError> {
    let response: OpenAIResponse = serde_json::from_str(body)
        .map_err(|e| ModelError::invalid_response(provider, e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| ModelError::invalid_response(provider, "missing choices[0].message.content"))
}

#[derive(Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAIMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize)]
struct OpenAIMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a ChatMessage> for OpenAIMessage<'a> {
    fn from(message: &'a ChatMessage) -> Self {
        Self {
            role: message.role.as_str(),
            content: &message.content,
        }
    }
}

#[derive(Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    choices: Vec<OpenAIChoice>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: Option<OpenAIResponseMessage>,
}

#[derive(Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
}
