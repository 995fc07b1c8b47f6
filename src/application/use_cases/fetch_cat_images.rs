use std::sync::Arc;

use tracing::debug;

use crate::application::CatImageSearch;
use crate::domain::{CatImage, CatQuery, DomainError};

pub struct FetchCatImagesUseCase {
    search: Arc<dyn CatImageSearch>,
}

impl FetchCatImagesUseCase {
    pub fn new(search: Arc<dyn CatImageSearch>) -> Self {
        Self { search }
    }

    pub async fn execute(&self, query: &CatQuery) -> Result<Vec<CatImage>, DomainError> {
        let images = self.search.search(query).await?;
        debug!(
            "Fetched {} cat images (requested {}, breed {:?})",
            images.len(),
            query.count(),
            query.breed()
        );
        Ok(images)
    }
}
