//! NLP HTTP Routes
//!
//! Filter extraction and chat reply generation via the external
//! chat-completion service.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::nlp::{extract_criteria, generate_reply, ChatMessage, ChatModel};
use crate::query::SearchCriteria;

use super::errors::{ApiError, ApiResult};
use super::response::ApiResponse;

/// NLP state shared across handlers
pub struct NlpState {
    pub model: Arc<dyn ChatModel>,
}

/// Create NLP routes
pub fn nlp_routes(state: Arc<NlpState>) -> Router {
    Router::new()
        .route("/extract", post(extract_handler))
        .route("/chat", post(chat_handler))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtractRequest {
    #[serde(default)]
    message: String,

    #[serde(default)]
    conversation_history: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,

    #[serde(default)]
    context: Value,
}

/// Extract search filters from a natural-language message
async fn extract_handler(
    State(state): State<Arc<NlpState>>,
    Json(payload): Json<ExtractRequest>,
) -> ApiResult<Json<ApiResponse<SearchCriteria>>> {
    if payload.message.trim().is_empty() {
        return Err(ApiError::MissingField("message"));
    }

    let criteria = extract_criteria(
        state.model.as_ref(),
        &payload.message,
        &payload.conversation_history,
    )
    .await?;

    Ok(Json(ApiResponse::ok(criteria)))
}

/// Generate a chatbot reply grounded in search context
async fn chat_handler(
    State(state): State<Arc<NlpState>>,
    Json(payload): Json<ChatRequest>,
) -> ApiResult<Json<ApiResponse<String>>> {
    if payload.message.trim().is_empty() {
        return Err(ApiError::MissingField("message"));
    }

    let reply = generate_reply(state.model.as_ref(), &payload.message, &payload.context).await?;

    Ok(Json(ApiResponse::ok(reply)))
}
