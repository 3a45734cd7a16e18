use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::instrument;

use super::dto::{DetectRequest, ResolveRequest, SearchQuery};
use super::{candidate_query, normalize_servings, resolve, FoodRecord, ResolvedFood};
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/foods", get(search_foods))
}

pub fn resolve_routes() -> Router<AppState> {
    Router::new()
        .route("/foods/resolve", post(resolve_food))
        .route("/foods/detect", post(detect_food))
}

#[instrument(skip(state))]
async fn search_foods(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<FoodRecord>> {
    let hits = state
        .catalog
        .search(&params.q)
        .into_iter()
        .cloned()
        .collect();
    Json(hits)
}

#[instrument(skip(state))]
async fn resolve_food(
    State(state): State<AppState>,
    Json(body): Json<ResolveRequest>,
) -> Result<Json<ResolvedFood>, (StatusCode, String)> {
    if body.name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Please select or detect a food".into(),
        ));
    }
    let servings = normalize_servings(body.servings).ok_or((
        StatusCode::BAD_REQUEST,
        "Servings must be a positive number".to_string(),
    ))?;
    resolve(&state.catalog, body.name.trim(), &body.unit, servings)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Food not recognized".into()))
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub query: String,
    pub matches: Vec<FoodRecord>,
}

/// Vision labels come from the external classifier; we only triage them into
/// a search query and return what the catalog knows about it.
#[instrument(skip(state))]
async fn detect_food(
    State(state): State<AppState>,
    Json(body): Json<DetectRequest>,
) -> Result<Json<DetectResponse>, (StatusCode, String)> {
    let Some(query) = candidate_query(&body.labels) else {
        return Err((
            StatusCode::NOT_FOUND,
            "Could not identify food. Please select manually.".into(),
        ));
    };
    let matches = state
        .catalog
        .search(&query)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(DetectResponse { query, matches }))
}
