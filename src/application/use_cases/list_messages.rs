use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::application::AssistantClient;
use crate::domain::{ConversationHandle, DomainError};

pub struct ListMessagesUseCase {
    assistant: Arc<dyn AssistantClient>,
}

impl ListMessagesUseCase {
    pub fn new(assistant: Arc<dyn AssistantClient>) -> Self {
        Self { assistant }
    }

    pub async fn execute(&self, thread: &ConversationHandle) -> Result<Vec<Value>, DomainError> {
        let messages = self.assistant.list_messages(thread).await?;
        debug!("Listed {} messages for {}", messages.len(), thread);
        Ok(messages)
    }
}
