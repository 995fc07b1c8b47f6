pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    AddMessageOutcome, AddMessageUseCase, AssistantClient, CatImageSearch, ChatCompletionUseCase,
    CompletionClient, FetchCatImagesUseCase, ListMessagesUseCase, PollRunUseCase,
    StartConversationUseCase, SubmitToolOutputsUseCase,
};

pub use connector::{
    build_router, ApiError, CatApiClient, Container, ContainerConfig, MockAssistantClient,
    MockCatImageSearch, MockCompletionClient, OpenAiAssistantClient, OpenAiCompletionClient,
    DEFAULT_CAT_API_BASE_URL, DEFAULT_COMPLETION_MODEL, DEFAULT_OPENAI_BASE_URL,
};

pub use domain::{
    CatImage, CatQuery, ConversationHandle, DomainError, Message, MessageRole, RunHandle,
    ToolOutput,
};
