//! HTTP handler for the AI chat assistant proxy

use axum::{extract::State, Json};

use crate::error::{AppError, AppResult};
use crate::AppState;
use shared::{ChatRequest, ChatResponse};

/// Forward a farmer's message (and optional photo) to the chat provider
pub async fn chat_with_assistant(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let client = state.chat.as_ref().ok_or_else(|| {
        AppError::Configuration("chat provider API key not configured".to_string())
    })?;

    let response = client
        .send_message(
            &request.message,
            request.image.as_deref(),
            request.language.as_deref(),
        )
        .await?;

    Ok(Json(ChatResponse { response }))
}
