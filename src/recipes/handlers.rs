use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{instrument, warn};

use super::dto::{Recipe, RecipeRequest};
use super::services;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/recipe", post(generate_recipes))
}

#[instrument(skip(state, body))]
async fn generate_recipes(
    State(state): State<AppState>,
    Json(body): Json<RecipeRequest>,
) -> Result<Json<Vec<Recipe>>, (StatusCode, String)> {
    if body.food.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "food is required".into()));
    }

    match services::generate(state.llm.as_ref(), &body).await {
        Ok(recipes) => Ok(Json(recipes)),
        Err(e) => {
            warn!(error = %e, food = %body.food, "recipe generation failed");
            Err((
                StatusCode::BAD_GATEWAY,
                "Recipe AI failed. Please try again.".into(),
            ))
        }
    }
}
