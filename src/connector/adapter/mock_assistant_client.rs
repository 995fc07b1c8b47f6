use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::application::AssistantClient;
use crate::domain::{ConversationHandle, DomainError, Message, RunHandle, ToolOutput};

#[derive(Default)]
struct MockState {
    calls: Vec<String>,
    messages: Vec<Value>,
    submitted: Vec<ToolOutput>,
}

/// In-memory [`AssistantClient`] that records every call in order.
///
/// Used by tests and by `--mock-upstream` to run the relay without network access.
pub struct MockAssistantClient {
    thread_id: String,
    run_id: String,
    run_status: String,
    failing: HashSet<String>,
    state: Mutex<MockState>,
}

impl MockAssistantClient {
    pub fn new() -> Self {
        Self {
            thread_id: "thread_mock".to_string(),
            run_id: "run_mock".to_string(),
            run_status: "completed".to_string(),
            failing: HashSet::new(),
            state: Mutex::new(MockState::default()),
        }
    }

    pub fn with_thread_id(mut self, id: impl Into<String>) -> Self {
        self.thread_id = id.into();
        self
    }

    pub fn with_run_id(mut self, id: impl Into<String>) -> Self {
        self.run_id = id.into();
        self
    }

    pub fn with_run_status(mut self, status: impl Into<String>) -> Self {
        self.run_status = status.into();
        self
    }

    /// Make the named method (e.g. `"create_message"`) fail with an upstream error.
    pub fn failing_on(mut self, method: impl Into<String>) -> Self {
        self.failing.insert(method.into());
        self
    }

    /// Names of the methods called so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    pub fn submitted_outputs(&self) -> Vec<ToolOutput> {
        self.state().submitted.clone()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, method: &str) -> Result<(), DomainError> {
        self.state().calls.push(method.to_string());
        debug!("MockAssistantClient: {method}");
        if self.failing.contains(method) {
            return Err(DomainError::upstream(format!(
                "mock assistant API: {method} failed"
            )));
        }
        Ok(())
    }
}

impl Default for MockAssistantClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssistantClient for MockAssistantClient {
    async fn create_thread(&self) -> Result<ConversationHandle, DomainError> {
        self.record("create_thread")?;
        Ok(ConversationHandle::new(self.thread_id.clone()))
    }

    async fn create_message(
        &self,
        thread: &ConversationHandle,
        message: &Message,
    ) -> Result<Value, DomainError> {
        self.record("create_message")?;
        let mut state = self.state();
        let created = json!({
            "id": format!("msg_{}", state.messages.len() + 1),
            "object": "thread.message",
            "thread_id": thread.as_str(),
            "role": message.role(),
            "content": message.content(),
        });
        state.messages.push(created.clone());
        Ok(created)
    }

    async fn create_run(&self, _thread: &ConversationHandle) -> Result<RunHandle, DomainError> {
        self.record("create_run")?;
        Ok(RunHandle::new(self.run_id.clone()))
    }

    async fn retrieve_run(
        &self,
        thread: &ConversationHandle,
        run: &RunHandle,
    ) -> Result<Value, DomainError> {
        self.record("retrieve_run")?;
        Ok(json!({
            "id": run.as_str(),
            "object": "thread.run",
            "thread_id": thread.as_str(),
            "status": self.run_status,
        }))
    }

    async fn list_messages(&self, thread: &ConversationHandle) -> Result<Vec<Value>, DomainError> {
        self.record("list_messages")?;
        Ok(self
            .state()
            .messages
            .iter()
            .filter(|m| m["thread_id"] == thread.as_str())
            .cloned()
            .collect())
    }

    async fn submit_tool_outputs(
        &self,
        _thread: &ConversationHandle,
        _run: &RunHandle,
        outputs: &[ToolOutput],
    ) -> Result<(), DomainError> {
        self.record("submit_tool_outputs")?;
        self.state().submitted.extend_from_slice(outputs);
        Ok(())
    }
}
