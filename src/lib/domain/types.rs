use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

impl MessageRole {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}

/// Builds the two-message sequence every provider receives: the
/// instruction prompt followed by the caller's text.
pub fn translation_messages(system_prompt: &str, text: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(system_prompt), ChatMessage::user(text)]
}

/// Text submitted for translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
}

/// Wire shape shared by the REST boundary and its callers.
///
/// `error` being present implies `translated_text` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    #[serde(default)]
    pub translated_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslationResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            translated_text: text.into(),
            error: None,
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            translated_text: String::new(),
            error: Some(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

impl<E: std::fmt::Display> From<Result<String, E>> for TranslationResult {
    fn from(result: Result<String, E>) -> Self {
        match result {
            Ok(text) => Self::success(text),
            Err(error) => Self::failure(error.to_string()),
        }
    }
}
