use std::sync::Arc;

use tracing::debug;

use crate::application::AssistantClient;
use crate::domain::{ConversationHandle, DomainError};

pub struct StartConversationUseCase {
    assistant: Arc<dyn AssistantClient>,
}

impl StartConversationUseCase {
    pub fn new(assistant: Arc<dyn AssistantClient>) -> Self {
        Self { assistant }
    }

    pub async fn execute(&self) -> Result<ConversationHandle, DomainError> {
        let thread = self.assistant.create_thread().await?;
        debug!("Started conversation {}", thread);
        Ok(thread)
    }
}
