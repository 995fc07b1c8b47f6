use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::connector::api::{ApiError, Container};
use crate::domain::{ConversationHandle, Message, RunHandle};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThreadResponse {
    pub thread_id: ConversationHandle,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMessageResponse {
    pub message: Value,
    pub run_id: RunHandle,
}

#[derive(Debug, Serialize)]
pub struct ListMessagesResponse {
    pub messages: Vec<Value>,
}

/// `POST /create_thread`
pub async fn create_thread(
    State(container): State<Arc<Container>>,
) -> Result<Json<CreateThreadResponse>, ApiError> {
    let thread_id = container.start_conversation_use_case().execute().await?;
    Ok(Json(CreateThreadResponse { thread_id }))
}

/// `POST /add_message/{thread_id}` with body `{content, role?}`.
pub async fn add_message(
    State(container): State<Arc<Container>>,
    thread_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<Message>, JsonRejection>,
) -> Result<Json<AddMessageResponse>, ApiError> {
    let Path(thread_id) = thread_id?;
    let thread = ConversationHandle::parse(Some(thread_id.as_str()))?;
    let Json(message) = payload?;

    let outcome = container
        .add_message_use_case()
        .execute(&thread, &message)
        .await?;

    Ok(Json(AddMessageResponse {
        message: outcome.message,
        run_id: outcome.run,
    }))
}

/// `GET /list_messages/{thread_id}`
pub async fn list_messages(
    State(container): State<Arc<Container>>,
    thread_id: Result<Path<String>, PathRejection>,
) -> Result<Json<ListMessagesResponse>, ApiError> {
    let Path(thread_id) = thread_id?;
    let thread = ConversationHandle::parse(Some(thread_id.as_str()))?;
    let messages = container.list_messages_use_case().execute(&thread).await?;
    Ok(Json(ListMessagesResponse { messages }))
}
