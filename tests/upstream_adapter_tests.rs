//! The reqwest adapters exercised against a throwaway local HTTP server.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use serde_json::{json, Value};

use catrelay::{
    AssistantClient, CatApiClient, CatImageSearch, CatQuery, CompletionClient,
    ConversationHandle, Message, OpenAiAssistantClient, OpenAiCompletionClient, RunHandle,
    ToolOutput,
};

type Recorded = Arc<Mutex<Vec<Value>>>;

/// Serve `app` on an ephemeral port and return its base URL.
async fn spawn(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn header(headers: &HeaderMap, name: &str) -> Value {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| json!(v))
        .unwrap_or(Value::Null)
}

// ---------------------------------------------------------------------------
// Cat API
// ---------------------------------------------------------------------------

async fn fake_cat_search(
    State(recorded): State<Recorded>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    recorded.lock().unwrap().push(json!({
        "params": params,
        "api_key": header(&headers, "x-api-key"),
    }));
    let limit: usize = params.get("limit").and_then(|l| l.parse().ok()).unwrap_or(1);
    let images: Vec<Value> = (0..limit)
        .map(|i| json!({ "id": format!("img{i}"), "url": format!("https://cdn/img{i}.jpg"), "width": 1, "height": 1, "breeds": [] }))
        .collect();
    Json(json!(images))
}

async fn cat_server() -> (String, Recorded) {
    let recorded: Recorded = Arc::default();
    let app = axum::Router::new()
        .route("/v1/images/search", get(fake_cat_search))
        .with_state(recorded.clone());
    (spawn(app).await, recorded)
}

#[tokio::test]
async fn cat_client_sends_limit_without_breed() {
    let (base, recorded) = cat_server().await;
    let client = CatApiClient::new(None, &base).unwrap();

    let images = client.search(&CatQuery::new(3)).await.unwrap();

    assert_eq!(images.len(), 3);
    let request = recorded.lock().unwrap()[0].clone();
    assert_eq!(request["params"], json!({ "limit": "3" }));
    assert_eq!(request["api_key"], Value::Null);
}

#[tokio::test]
async fn cat_client_sends_breed_id_and_key() {
    let (base, recorded) = cat_server().await;
    let client = CatApiClient::new(Some("live_key".to_string()), &base).unwrap();

    client
        .search(&CatQuery::new(5).with_breed("sibe"))
        .await
        .unwrap();

    let request = recorded.lock().unwrap()[0].clone();
    assert_eq!(request["params"], json!({ "limit": "5", "breed_id": "sibe" }));
    assert_eq!(request["api_key"], "live_key");
}

#[tokio::test]
async fn cat_client_surfaces_non_2xx_status() {
    let app = axum::Router::new().route(
        "/v1/images/search",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    );
    let base = spawn(app).await;
    let client = CatApiClient::new(None, &base).unwrap();

    let err = client.search(&CatQuery::new(3)).await.unwrap_err();

    assert!(err.is_upstream());
    assert!(err.message().contains("503"), "{err}");
}

#[tokio::test]
async fn cat_client_reports_unreachable_upstream() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = CatApiClient::new(None, &format!("http://{addr}")).unwrap();
    let err = client.search(&CatQuery::new(1)).await.unwrap_err();

    assert!(err.is_upstream());
}

// ---------------------------------------------------------------------------
// OpenAI assistant API
// ---------------------------------------------------------------------------

fn record(recorded: &Recorded, call: &str, headers: &HeaderMap, body: Value) {
    recorded.lock().unwrap().push(json!({
        "call": call,
        "auth": header(headers, "authorization"),
        "beta": header(headers, "openai-beta"),
        "body": body,
    }));
}

fn not_found(thread: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": {
                "message": format!("No thread found with id '{thread}'."),
                "type": "invalid_request_error"
            }
        })),
    )
        .into_response()
}

async fn openai_server() -> (String, Recorded) {
    let recorded: Recorded = Arc::default();

    let app = axum::Router::new()
        .route(
            "/v1/threads",
            post(
                |State(r): State<Recorded>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    record(&r, "create_thread", &headers, body);
                    Json(json!({ "id": "thread_abc123", "object": "thread" }))
                },
            ),
        )
        .route(
            "/v1/threads/{thread}/messages",
            post(
                |State(r): State<Recorded>,
                 Path(thread): Path<String>,
                 headers: HeaderMap,
                 Json(body): Json<Value>| async move {
                    if thread == "missing" {
                        return not_found(&thread);
                    }
                    record(&r, "create_message", &headers, body.clone());
                    Json(json!({
                        "id": "msg_1",
                        "object": "thread.message",
                        "thread_id": thread,
                        "role": body["role"],
                        "content": [{ "type": "text", "text": { "value": body["content"], "annotations": [] } }]
                    }))
                    .into_response()
                },
            )
            .get(|Path(thread): Path<String>| async move {
                Json(json!({
                    "object": "list",
                    "data": [
                        { "id": "msg_2", "thread_id": thread, "role": "assistant" },
                        { "id": "msg_1", "thread_id": thread, "role": "user" }
                    ],
                    "has_more": false
                }))
            }),
        )
        .route(
            "/v1/threads/{thread}/runs",
            post(
                |State(r): State<Recorded>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    record(&r, "create_run", &headers, body);
                    Json(json!({ "id": "run_xyz", "object": "thread.run", "status": "queued" }))
                },
            ),
        )
        .route(
            "/v1/threads/{thread}/runs/{run}",
            get(|Path((thread, run)): Path<(String, String)>| async move {
                Json(json!({
                    "id": run,
                    "thread_id": thread,
                    "status": "requires_action",
                    "required_action": { "type": "submit_tool_outputs" }
                }))
            }),
        )
        .route(
            "/v1/threads/{thread}/runs/{run}/submit_tool_outputs",
            post(
                |State(r): State<Recorded>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    record(&r, "submit_tool_outputs", &headers, body);
                    Json(json!({ "id": "run_xyz", "status": "queued" }))
                },
            ),
        )
        .with_state(recorded.clone());

    (spawn(app).await, recorded)
}

#[tokio::test]
async fn assistant_client_creates_thread_with_auth_headers() {
    let (base, recorded) = openai_server().await;
    let client = OpenAiAssistantClient::new("sk-test", "asst_1", &base).unwrap();

    let thread = client.create_thread().await.unwrap();

    assert_eq!(thread.as_str(), "thread_abc123");
    let request = recorded.lock().unwrap()[0].clone();
    assert_eq!(request["auth"], "Bearer sk-test");
    assert_eq!(request["beta"], "assistants=v2");
}

#[tokio::test]
async fn assistant_client_message_then_run_uses_assistant_id() {
    let (base, recorded) = openai_server().await;
    let client = OpenAiAssistantClient::new("sk-test", "asst_1", &base).unwrap();
    let thread = ConversationHandle::new("thread_abc123");

    let message = client
        .create_message(&thread, &Message::user("hello"))
        .await
        .unwrap();
    let run = client.create_run(&thread).await.unwrap();

    assert_eq!(message["thread_id"], "thread_abc123");
    assert_eq!(run.as_str(), "run_xyz");

    let calls = recorded.lock().unwrap().clone();
    assert_eq!(calls[0]["body"], json!({ "role": "user", "content": "hello" }));
    assert_eq!(calls[1]["body"], json!({ "assistant_id": "asst_1" }));
}

#[tokio::test]
async fn assistant_client_surfaces_upstream_error_message() {
    let (base, _) = openai_server().await;
    let client = OpenAiAssistantClient::new("sk-test", "asst_1", &base).unwrap();

    let err = client
        .create_message(&ConversationHandle::new("missing"), &Message::user("hi"))
        .await
        .unwrap_err();

    assert!(err.is_upstream());
    assert!(err.message().contains("404"), "{err}");
    assert!(err.message().contains("No thread found"), "{err}");
}

#[tokio::test]
async fn assistant_client_retrieves_run_and_lists_messages() {
    let (base, _) = openai_server().await;
    let client = OpenAiAssistantClient::new("sk-test", "asst_1", &base).unwrap();
    let thread = ConversationHandle::new("t1");

    let run = client
        .retrieve_run(&thread, &RunHandle::new("run_9"))
        .await
        .unwrap();
    let messages = client.list_messages(&thread).await.unwrap();

    assert_eq!(run["status"], "requires_action");
    assert_eq!(run["required_action"]["type"], "submit_tool_outputs");
    let ids: Vec<_> = messages.iter().map(|m| m["id"].clone()).collect();
    assert_eq!(ids, vec![json!("msg_2"), json!("msg_1")]);
}

#[tokio::test]
async fn assistant_client_submits_tool_outputs_verbatim() {
    let (base, recorded) = openai_server().await;
    let client = OpenAiAssistantClient::new("sk-test", "asst_1", &base).unwrap();
    let output: ToolOutput =
        serde_json::from_value(json!({ "tool_call_id": "call_1", "output": "3 cats" })).unwrap();

    client
        .submit_tool_outputs(
            &ConversationHandle::new("t1"),
            &RunHandle::new("run_xyz"),
            &[output],
        )
        .await
        .unwrap();

    let request = recorded.lock().unwrap()[0].clone();
    assert_eq!(
        request["body"],
        json!({ "tool_outputs": [{ "tool_call_id": "call_1", "output": "3 cats" }] })
    );
}

// ---------------------------------------------------------------------------
// OpenAI completion API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn completion_client_returns_first_choice() {
    let recorded: Recorded = Arc::default();
    let app = axum::Router::new()
        .route(
            "/v1/completions",
            post(
                |State(r): State<Recorded>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    record(&r, "complete", &headers, body);
                    Json(json!({ "choices": [{ "text": " Cats sleep a lot." }, { "text": "other" }] }))
                },
            ),
        )
        .with_state(recorded.clone());
    let base = spawn(app).await;
    let client = OpenAiCompletionClient::new("sk-test", "gpt-3.5-turbo-instruct", &base).unwrap();

    let text = client.complete("Tell me about cats").await.unwrap();

    assert_eq!(text, " Cats sleep a lot.");
    let request = recorded.lock().unwrap()[0].clone();
    assert_eq!(
        request["body"],
        json!({ "model": "gpt-3.5-turbo-instruct", "prompt": "Tell me about cats", "max_tokens": 100 })
    );
}

#[tokio::test]
async fn completion_client_without_choices_returns_empty() {
    let app = axum::Router::new().route(
        "/v1/completions",
        post(|| async { Json(json!({ "choices": [] })) }),
    );
    let base = spawn(app).await;
    let client = OpenAiCompletionClient::new("sk-test", "m", &base).unwrap();

    assert_eq!(client.complete("hi").await.unwrap(), "");
}
