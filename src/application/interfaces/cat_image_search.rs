use async_trait::async_trait;

use crate::domain::{CatImage, CatQuery, DomainError};

#[async_trait]
pub trait CatImageSearch: Send + Sync {
    /// Run an image search. A non-success upstream status is an error, never an empty list.
    async fn search(&self, query: &CatQuery) -> Result<Vec<CatImage>, DomainError>;
}
