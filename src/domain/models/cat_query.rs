use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_count() -> u32 {
    1
}

/// Image search parameters for the cat API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatQuery {
    #[serde(default, alias = "breed_id")]
    breed: Option<String>,
    #[serde(default = "default_count")]
    count: u32,
}

impl Default for CatQuery {
    fn default() -> Self {
        Self::new(default_count())
    }
}

impl CatQuery {
    pub fn new(count: u32) -> Self {
        Self { breed: None, count }
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    /// Breed filter, ignoring blank values.
    pub fn breed(&self) -> Option<&str> {
        self.breed.as_deref().filter(|b| !b.trim().is_empty())
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Upstream query parameters: `limit` always, `breed_id` only when a breed was given.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("limit", self.count.to_string())];
        if let Some(breed) = self.breed() {
            params.push(("breed_id", breed.to_string()));
        }
        params
    }
}

/// An image record from the search API, relayed without interpretation.
pub type CatImage = Value;
