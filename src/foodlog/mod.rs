pub mod dto;
pub mod handlers;
pub mod services;

pub use dto::{EntryType, LoggedEntry};
pub use services::FoodLog;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
