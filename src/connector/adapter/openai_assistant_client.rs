use async_trait::async_trait;
use reqwest::{RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::AssistantClient;
use crate::domain::{ConversationHandle, DomainError, Message, RunHandle, ToolOutput};

use super::upstream_response::{endpoint, parse_base_url, read_json, request_failed};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
const ASSISTANTS_BETA: &str = "assistants=v2";
const API_NAME: &str = "OpenAI assistant API";

#[derive(Serialize)]
struct CreateRunRequest<'a> {
    assistant_id: &'a str,
}

#[derive(Serialize)]
struct SubmitToolOutputsRequest<'a> {
    tool_outputs: &'a [ToolOutput],
}

/// Any upstream object we only need the `id` of.
#[derive(Deserialize)]
struct IdOnly {
    id: String,
}

#[derive(Deserialize)]
struct MessageList {
    data: Vec<Value>,
}

/// HTTP client for the OpenAI Assistants (v2) thread API.
///
/// Runs are always started with the assistant id given at construction.
/// No request timeout is set; calls wait as long as reqwest's defaults allow.
pub struct OpenAiAssistantClient {
    client: reqwest::Client,
    api_key: String,
    assistant_id: String,
    base_url: Url,
}

impl OpenAiAssistantClient {
    pub fn new(
        api_key: impl Into<String>,
        assistant_id: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            assistant_id: assistant_id.into(),
            base_url: parse_base_url(base_url)?,
        })
    }

    fn thread_url(&self, thread: &ConversationHandle, rest: &[&str]) -> Result<Url, DomainError> {
        let mut segments = vec!["v1", "threads", thread.as_str()];
        segments.extend_from_slice(rest);
        endpoint(&self.base_url, &segments)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.api_key)
            .header("OpenAI-Beta", ASSISTANTS_BETA)
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, DomainError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| request_failed(API_NAME, e))?;
        read_json(API_NAME, response).await
    }
}

#[async_trait]
impl AssistantClient for OpenAiAssistantClient {
    async fn create_thread(&self) -> Result<ConversationHandle, DomainError> {
        let url = endpoint(&self.base_url, &["v1", "threads"])?;
        let thread: IdOnly = self
            .send(self.client.post(url).json(&serde_json::json!({})))
            .await?;
        Ok(ConversationHandle::new(thread.id))
    }

    async fn create_message(
        &self,
        thread: &ConversationHandle,
        message: &Message,
    ) -> Result<Value, DomainError> {
        let url = self.thread_url(thread, &["messages"])?;
        self.send(self.client.post(url).json(message)).await
    }

    async fn create_run(&self, thread: &ConversationHandle) -> Result<RunHandle, DomainError> {
        let url = self.thread_url(thread, &["runs"])?;
        let run: IdOnly = self
            .send(self.client.post(url).json(&CreateRunRequest {
                assistant_id: &self.assistant_id,
            }))
            .await?;
        Ok(RunHandle::new(run.id))
    }

    async fn retrieve_run(
        &self,
        thread: &ConversationHandle,
        run: &RunHandle,
    ) -> Result<Value, DomainError> {
        let url = self.thread_url(thread, &["runs", run.as_str()])?;
        self.send(self.client.get(url)).await
    }

    async fn list_messages(&self, thread: &ConversationHandle) -> Result<Vec<Value>, DomainError> {
        let url = self.thread_url(thread, &["messages"])?;
        let page: MessageList = self.send(self.client.get(url)).await?;
        Ok(page.data)
    }

    async fn submit_tool_outputs(
        &self,
        thread: &ConversationHandle,
        run: &RunHandle,
        outputs: &[ToolOutput],
    ) -> Result<(), DomainError> {
        let url = self.thread_url(thread, &["runs", run.as_str(), "submit_tool_outputs"])?;
        let _run: Value = self
            .send(self.client.post(url).json(&SubmitToolOutputsRequest {
                tool_outputs: outputs,
            }))
            .await?;
        Ok(())
    }
}
