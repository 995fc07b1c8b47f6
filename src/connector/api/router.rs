use std::sync::Arc;

use axum::routing::{get, post};
use axum::Json;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::container::Container;
use super::controller::{cat_controller, chat_controller, conversation_controller, run_controller};

/// Build the relay's HTTP surface over a shared [`Container`].
///
/// Cross-origin requests are allowed from any origin, with any method and header.
pub fn build_router(container: Arc<Container>) -> axum::Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    axum::Router::new()
        .route("/health", get(health))
        .route("/create_thread", post(conversation_controller::create_thread))
        .route(
            "/add_message/{thread_id}",
            post(conversation_controller::add_message),
        )
        .route(
            "/list_messages/{thread_id}",
            get(conversation_controller::list_messages),
        )
        .route("/retrieve_status", get(run_controller::retrieve_status))
        .route(
            "/submit_tool_outputs",
            post(run_controller::submit_tool_outputs),
        )
        .route("/get_cat_image", get(cat_controller::get_cat_image))
        .route("/get_cats", post(cat_controller::get_cats))
        .route("/chat", post(chat_controller::chat))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(container)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
