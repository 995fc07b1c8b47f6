use async_trait::async_trait;

use crate::domain::DomainError;

/// A single-prompt text completion endpoint.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` and return the text of the first completion choice.
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;
}
