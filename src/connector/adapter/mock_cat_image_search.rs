use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::json;

use crate::application::CatImageSearch;
use crate::domain::{CatImage, CatQuery, DomainError};

/// Upper bound on generated records, whatever count is requested.
pub const MOCK_MAX_IMAGES: u32 = 100;

/// Deterministic [`CatImageSearch`] returning `count` synthetic image records,
/// capped at [`MOCK_MAX_IMAGES`].
pub struct MockCatImageSearch {
    fail_status: Option<u16>,
    queries: Mutex<Vec<CatQuery>>,
}

impl MockCatImageSearch {
    pub fn new() -> Self {
        Self {
            fail_status: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Simulate the upstream answering every search with `status`.
    pub fn failing_with_status(mut self, status: u16) -> Self {
        self.fail_status = Some(status);
        self
    }

    /// Queries received so far, in order.
    pub fn queries(&self) -> Vec<CatQuery> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockCatImageSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatImageSearch for MockCatImageSearch {
    async fn search(&self, query: &CatQuery) -> Result<Vec<CatImage>, DomainError> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(query.clone());

        if let Some(status) = self.fail_status {
            return Err(DomainError::upstream(format!(
                "cat API returned {status}"
            )));
        }

        let breeds = match query.breed() {
            Some(breed) => json!([{ "id": breed }]),
            None => json!([]),
        };

        Ok((0..query.count().min(MOCK_MAX_IMAGES))
            .map(|i| {
                json!({
                    "id": format!("mock{i}"),
                    "url": format!("https://cdn2.thecatapi.com/images/mock{i}.jpg"),
                    "width": 640,
                    "height": 480,
                    "breeds": breeds,
                })
            })
            .collect())
    }
}
