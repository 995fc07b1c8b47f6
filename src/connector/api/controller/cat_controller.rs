use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;

use crate::connector::api::{ApiError, Container};
use crate::domain::{CatImage, CatQuery};

/// `GET /get_cat_image?count=&breed=`
pub async fn get_cat_image(
    State(container): State<Arc<Container>>,
    query: Result<Query<CatQuery>, QueryRejection>,
) -> Result<Json<Vec<CatImage>>, ApiError> {
    let Query(query) = query?;
    let images = container.fetch_cat_images_use_case().execute(&query).await?;
    Ok(Json(images))
}

/// `POST /get_cats` with body `{breed?, count?}`.
pub async fn get_cats(
    State(container): State<Arc<Container>>,
    payload: Result<Json<CatQuery>, JsonRejection>,
) -> Result<Json<Vec<CatImage>>, ApiError> {
    let Json(query) = payload?;
    let images = container.fetch_cat_images_use_case().execute(&query).await?;
    Ok(Json(images))
}
