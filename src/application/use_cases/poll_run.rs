use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::application::AssistantClient;
use crate::domain::{ConversationHandle, DomainError, RunHandle};

pub struct PollRunUseCase {
    assistant: Arc<dyn AssistantClient>,
}

impl PollRunUseCase {
    pub fn new(assistant: Arc<dyn AssistantClient>) -> Self {
        Self { assistant }
    }

    /// Fetch the current run object, status included, straight from upstream.
    pub async fn execute(
        &self,
        thread: &ConversationHandle,
        run: &RunHandle,
    ) -> Result<Value, DomainError> {
        let payload = self.assistant.retrieve_run(thread, run).await?;
        let status = payload
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        debug!("Run {} on {} is {}", run, thread, status);
        Ok(payload)
    }
}
