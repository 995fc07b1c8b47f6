use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use crate::application::CatImageSearch;
use crate::domain::{CatImage, CatQuery, DomainError};

use super::upstream_response::{endpoint, parse_base_url, read_json, request_failed};

pub const DEFAULT_CAT_API_BASE_URL: &str = "https://api.thecatapi.com";
const API_NAME: &str = "cat API";

/// HTTP client for TheCatAPI image search (`/v1/images/search`).
///
/// The API key is optional upstream; without one the search still works but
/// breed filters and larger limits may be ignored.
pub struct CatApiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    url: Url,
}

impl CatApiClient {
    pub fn new(api_key: Option<String>, base_url: &str) -> Result<Self, DomainError> {
        let url = endpoint(&parse_base_url(base_url)?, &["v1", "images", "search"])?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|k| !k.is_empty()),
            url,
        })
    }
}

#[async_trait]
impl CatImageSearch for CatApiClient {
    async fn search(&self, query: &CatQuery) -> Result<Vec<CatImage>, DomainError> {
        let mut request = self.client.get(self.url.clone()).query(&query.to_params());
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        debug!("Searching cat images: {:?}", query.to_params());

        let response = request
            .send()
            .await
            .map_err(|e| request_failed(API_NAME, e))?;
        read_json(API_NAME, response).await
    }
}
