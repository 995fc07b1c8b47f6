use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{ConversationHandle, DomainError, Message, RunHandle, ToolOutput};

/// The upstream assistant-thread API.
///
/// Every method maps onto exactly one upstream request. Payloads returned by
/// the upstream (message and run objects) are handed back as raw JSON so the
/// relay can pass them through without dropping fields.
#[async_trait]
pub trait AssistantClient: Send + Sync {
    async fn create_thread(&self) -> Result<ConversationHandle, DomainError>;

    /// Append a message to a thread, returning the upstream message object.
    async fn create_message(
        &self,
        thread: &ConversationHandle,
        message: &Message,
    ) -> Result<Value, DomainError>;

    /// Start a run of the configured assistant over a thread.
    async fn create_run(&self, thread: &ConversationHandle) -> Result<RunHandle, DomainError>;

    async fn retrieve_run(
        &self,
        thread: &ConversationHandle,
        run: &RunHandle,
    ) -> Result<Value, DomainError>;

    /// List a thread's messages in the order the upstream returns them.
    async fn list_messages(&self, thread: &ConversationHandle) -> Result<Vec<Value>, DomainError>;

    async fn submit_tool_outputs(
        &self,
        thread: &ConversationHandle,
        run: &RunHandle,
        outputs: &[ToolOutput],
    ) -> Result<(), DomainError>;
}
