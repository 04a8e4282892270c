//! Model traits

use super::types::ModelError;
use crate::types::ChatMessage;
use async_trait::async_trait;

/// One chat-completion backend.
///
/// A call is a single attempt: implementations never retry.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Provider id used in logs and error attribution
    fn id(&self) -> &str;

    /// Send the messages and return the completion text
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ModelError>;
}
