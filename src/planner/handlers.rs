use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tracing::{error, instrument};

use super::dto::{DinnerIdea, DinnerRequest, PlanRequest, WeeklyPlan};
use super::services;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dinner", post(suggest_dinner))
        .route("/meal-plan", get(get_meal_plan).post(generate_meal_plan))
}

#[instrument(skip(state, body))]
async fn suggest_dinner(
    State(state): State<AppState>,
    Json(body): Json<DinnerRequest>,
) -> Json<DinnerIdea> {
    Json(services::dinner_idea(state.llm.as_ref(), &body).await)
}

#[instrument(skip(state, body))]
async fn generate_meal_plan(
    State(state): State<AppState>,
    Json(body): Json<PlanRequest>,
) -> Result<Json<WeeklyPlan>, (StatusCode, String)> {
    let plan = services::weekly_plan(state.llm.as_ref(), &body).await;

    let value = serde_json::to_value(&plan).map_err(internal)?;
    state.store.save("mealPlan", &value).await.map_err(|e| {
        error!(error = %e, "failed to persist meal plan");
        internal(e)
    })?;

    Ok(Json(plan))
}

#[instrument(skip(state))]
async fn get_meal_plan(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let saved = state.store.load("mealPlan").await.map_err(internal)?;
    saved
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "No meal plan saved yet".into()))
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
