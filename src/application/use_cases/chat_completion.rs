use std::sync::Arc;

use tracing::debug;

use crate::application::CompletionClient;
use crate::domain::DomainError;

/// One-shot prompt completion, without any conversation state.
pub struct ChatCompletionUseCase {
    client: Arc<dyn CompletionClient>,
}

impl ChatCompletionUseCase {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, prompt: &str) -> Result<String, DomainError> {
        let text = self.client.complete(prompt).await?;
        debug!("Completion returned {} chars", text.len());
        Ok(text)
    }
}
