use std::sync::Arc;

use tracing::debug;

use crate::application::AssistantClient;
use crate::domain::{ConversationHandle, DomainError, RunHandle, ToolOutput};

pub struct SubmitToolOutputsUseCase {
    assistant: Arc<dyn AssistantClient>,
}

impl SubmitToolOutputsUseCase {
    pub fn new(assistant: Arc<dyn AssistantClient>) -> Self {
        Self { assistant }
    }

    pub async fn execute(
        &self,
        thread: &ConversationHandle,
        run: &RunHandle,
        outputs: &[ToolOutput],
    ) -> Result<(), DomainError> {
        self.assistant
            .submit_tool_outputs(thread, run, outputs)
            .await?;
        debug!("Submitted {} tool outputs to run {}", outputs.len(), run);
        Ok(())
    }
}
