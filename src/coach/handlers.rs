use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::instrument;

use super::dto::{ChatRequest, ChatResponse};
use super::services::coach_reply;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}

#[instrument(skip(state, body))]
async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    if body.message.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "message is required".into()));
    }
    let profile = body.profile.unwrap_or_default();
    let reply = coach_reply(state.llm.as_ref(), body.message.trim(), &profile).await;
    Ok(Json(ChatResponse { reply }))
}
