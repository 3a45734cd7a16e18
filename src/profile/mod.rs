mod dto;
pub mod handlers;
pub mod services;

pub use dto::{Goal, NutritionTargets, UserProfile};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
