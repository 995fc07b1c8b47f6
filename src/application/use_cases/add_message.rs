use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::application::AssistantClient;
use crate::domain::{ConversationHandle, DomainError, Message, RunHandle};

/// Result of appending a message: the upstream message object and the run it started.
#[derive(Debug, Clone)]
pub struct AddMessageOutcome {
    pub message: Value,
    pub run: RunHandle,
}

/// Appends a message to a conversation and then starts a run over it.
///
/// The run is only started once the append has succeeded.
pub struct AddMessageUseCase {
    assistant: Arc<dyn AssistantClient>,
}

impl AddMessageUseCase {
    pub fn new(assistant: Arc<dyn AssistantClient>) -> Self {
        Self { assistant }
    }

    pub async fn execute(
        &self,
        thread: &ConversationHandle,
        message: &Message,
    ) -> Result<AddMessageOutcome, DomainError> {
        let created = self.assistant.create_message(thread, message).await?;
        let run = self.assistant.create_run(thread).await?;

        debug!("Added {} message to {} and started run {}", message.role(), thread, run);

        Ok(AddMessageOutcome {
            message: created,
            run,
        })
    }
}
