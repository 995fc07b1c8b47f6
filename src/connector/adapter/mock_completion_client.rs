use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::application::CompletionClient;
use crate::domain::DomainError;

/// [`CompletionClient`] answering every prompt with a fixed reply.
pub struct MockCompletionClient {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockCompletionClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_string());

        self.reply
            .clone()
            .ok_or_else(|| DomainError::upstream("mock completion API unavailable"))
    }
}
