use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::application::{AssistantClient, CatImageSearch, CompletionClient};
use crate::{
    AddMessageUseCase, CatApiClient, ChatCompletionUseCase, FetchCatImagesUseCase,
    ListMessagesUseCase, MockAssistantClient, MockCatImageSearch, MockCompletionClient,
    OpenAiAssistantClient, OpenAiCompletionClient, PollRunUseCase, StartConversationUseCase,
    SubmitToolOutputsUseCase,
};

pub struct ContainerConfig {
    pub openai_api_key: String,
    /// Assistant every run is started with.
    pub assistant_id: String,
    pub openai_base_url: String,
    pub completion_model: String,
    pub cat_api_key: Option<String>,
    pub cat_api_base_url: String,
    /// Serve from in-memory mock upstreams instead of the real APIs.
    pub mock_upstream: bool,
}

/// Process-wide wiring: the upstream clients, built once at startup and
/// shared read-only by every request.
pub struct Container {
    assistant: Arc<dyn AssistantClient>,
    completion: Arc<dyn CompletionClient>,
    cat_search: Arc<dyn CatImageSearch>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        if config.mock_upstream {
            info!("Using mock upstream clients");
            return Ok(Self::with_clients(
                Arc::new(MockAssistantClient::new()),
                Arc::new(MockCompletionClient::new("This is a mock completion.")),
                Arc::new(MockCatImageSearch::new()),
            ));
        }

        if config.openai_api_key.is_empty() {
            warn!("OPENAI_API_KEY is not set; OpenAI calls will be rejected upstream");
        }
        if config.assistant_id.is_empty() {
            warn!("ASSISTANT_ID is not set; starting runs will fail upstream");
        }
        if config.cat_api_key.as_deref().map_or(true, str::is_empty) {
            debug!("CAT_API_KEY is not set; using anonymous cat API access");
        }

        let assistant = OpenAiAssistantClient::new(
            config.openai_api_key.clone(),
            config.assistant_id.clone(),
            &config.openai_base_url,
        )
        .context("failed to configure the OpenAI assistant client")?;

        let completion = OpenAiCompletionClient::new(
            config.openai_api_key.clone(),
            config.completion_model.clone(),
            &config.openai_base_url,
        )
        .context("failed to configure the OpenAI completion client")?;

        let cat_search = CatApiClient::new(config.cat_api_key.clone(), &config.cat_api_base_url)
            .context("failed to configure the cat API client")?;

        debug!(
            "Upstreams: OpenAI at {}, cat API at {}",
            config.openai_base_url, config.cat_api_base_url
        );

        Ok(Self::with_clients(
            Arc::new(assistant),
            Arc::new(completion),
            Arc::new(cat_search),
        ))
    }

    pub fn with_clients(
        assistant: Arc<dyn AssistantClient>,
        completion: Arc<dyn CompletionClient>,
        cat_search: Arc<dyn CatImageSearch>,
    ) -> Self {
        Self {
            assistant,
            completion,
            cat_search,
        }
    }

    pub fn start_conversation_use_case(&self) -> StartConversationUseCase {
        StartConversationUseCase::new(self.assistant.clone())
    }

    pub fn add_message_use_case(&self) -> AddMessageUseCase {
        AddMessageUseCase::new(self.assistant.clone())
    }

    pub fn poll_run_use_case(&self) -> PollRunUseCase {
        PollRunUseCase::new(self.assistant.clone())
    }

    pub fn list_messages_use_case(&self) -> ListMessagesUseCase {
        ListMessagesUseCase::new(self.assistant.clone())
    }

    pub fn submit_tool_outputs_use_case(&self) -> SubmitToolOutputsUseCase {
        SubmitToolOutputsUseCase::new(self.assistant.clone())
    }

    pub fn fetch_cat_images_use_case(&self) -> FetchCatImagesUseCase {
        FetchCatImagesUseCase::new(self.cat_search.clone())
    }

    pub fn chat_completion_use_case(&self) -> ChatCompletionUseCase {
        ChatCompletionUseCase::new(self.completion.clone())
    }
}
