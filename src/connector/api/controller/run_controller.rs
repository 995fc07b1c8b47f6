use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::connector::api::{ApiError, Container};
use crate::domain::{ConversationHandle, DomainError, RunHandle, ToolOutput};

/// `?thread_id=&run_id=`; both are checked before anything goes upstream.
#[derive(Debug, Default, Deserialize)]
pub struct RunParams {
    pub thread_id: Option<String>,
    pub run_id: Option<String>,
}

impl RunParams {
    fn handles(&self) -> Result<(ConversationHandle, RunHandle), DomainError> {
        let thread = ConversationHandle::parse(self.thread_id.as_deref())?;
        let run = RunHandle::parse(self.run_id.as_deref())?;
        Ok((thread, run))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitToolOutputsRequest {
    pub tool_outputs: Vec<ToolOutput>,
}

#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub run: Value,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// `GET /retrieve_status?thread_id=&run_id=`
pub async fn retrieve_status(
    State(container): State<Arc<Container>>,
    params: Result<Query<RunParams>, QueryRejection>,
) -> Result<Json<RunResponse>, ApiError> {
    let Query(params) = params?;
    let (thread, run) = params.handles()?;

    let run = container.poll_run_use_case().execute(&thread, &run).await?;
    Ok(Json(RunResponse { run }))
}

/// `POST /submit_tool_outputs?thread_id=&run_id=` with body `{toolOutputs}`.
pub async fn submit_tool_outputs(
    State(container): State<Arc<Container>>,
    params: Result<Query<RunParams>, QueryRejection>,
    payload: Result<Json<SubmitToolOutputsRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Query(params) = params?;
    let (thread, run) = params.handles()?;
    let Json(request) = payload?;

    container
        .submit_tool_outputs_use_case()
        .execute(&thread, &run, &request.tool_outputs)
        .await?;

    Ok(Json(StatusResponse { status: "success" }))
}
