use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{error, instrument};

use super::dto::{TargetsResponse, UserProfile};
use super::services;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profile", put(put_profile).get(get_profile))
        .route("/profile/targets", get(get_targets))
}

#[instrument(skip(state, body))]
async fn put_profile(
    State(state): State<AppState>,
    Json(body): Json<UserProfile>,
) -> Result<Json<UserProfile>, (StatusCode, String)> {
    services::validate(&body).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let value = serde_json::to_value(&body).map_err(internal)?;
    state.store.save("profile", &value).await.map_err(|e| {
        error!(error = %e, "failed to persist profile");
        internal(e)
    })?;

    *state.profile.write().await = Some(body.clone());
    tracing::info!(name = %body.name, goal = ?body.goal, "profile updated");
    Ok(Json(body))
}

#[instrument(skip(state))]
async fn get_profile(
    State(state): State<AppState>,
) -> Result<Json<UserProfile>, (StatusCode, String)> {
    state
        .profile
        .read()
        .await
        .clone()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Profile not set".into()))
}

#[instrument(skip(state))]
async fn get_targets(
    State(state): State<AppState>,
) -> Result<Json<TargetsResponse>, (StatusCode, String)> {
    let profile = state
        .profile
        .read()
        .await
        .clone()
        .ok_or((StatusCode::NOT_FOUND, "Profile not set".into()))?;

    let bmi = services::bmi(&profile);
    Ok(Json(TargetsResponse {
        targets: services::targets(&profile),
        bmi,
        bmi_label: services::bmi_label(bmi),
        prediction: services::prediction_text(&profile),
    }))
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
