use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{ChatRequest, ChatResponse};
use crate::services::chat::route_chat;
use crate::state::AppState;

// POST /chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "rejected chat payload");
        AppError::BadRequest(rejection.body_text())
    })?;

    let message = payload
        .message
        .as_ref()
        .and_then(|m| m.as_str())
        .ok_or_else(|| AppError::BadRequest("missing message".to_string()))?;

    tracing::info!(len = message.len(), "incoming chat message");

    Ok(Json(ChatResponse {
        response: route_chat(&state.directory, message),
    }))
}
