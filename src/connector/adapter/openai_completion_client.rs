use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::application::CompletionClient;
use crate::domain::DomainError;

use super::upstream_response::{endpoint, parse_base_url, read_json, request_failed};

pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";
const MAX_TOKENS: u32 = 100;
const API_NAME: &str = "OpenAI completion API";

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    text: String,
}

/// HTTP client for the legacy OpenAI text completion endpoint (`/v1/completions`).
pub struct OpenAiCompletionClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: Url,
}

impl OpenAiCompletionClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, DomainError> {
        let url = endpoint(&parse_base_url(base_url)?, &["v1", "completions"])?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        let request = CompletionRequest {
            model: &self.model,
            prompt,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(self.url.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| request_failed(API_NAME, e))?;

        let completion: CompletionResponse = read_json(API_NAME, response).await?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.text)
            .unwrap_or_default())
    }
}
