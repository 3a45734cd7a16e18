use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{error, instrument};

use super::dto::{
    DaySummary, LogFoodRequest, LogQuery, LogRecipeRequest, LoggedEntry, RemoveResponse,
};
use super::services::{self, clock_time, today};
use crate::catalog::{normalize_servings, resolve};
use crate::foodlog::dto::EntryType;
use crate::profile::services as profile_services;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/log", get(list_entries).post(log_food))
        .route("/log/recipe", post(log_recipe))
        .route("/log/:id", delete(remove_entry))
        .route("/log/summary", get(day_summary))
}

#[instrument(skip(state))]
async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<LogQuery>,
) -> Json<Vec<LoggedEntry>> {
    let date = params.date.unwrap_or_else(today);
    let log = state.log.read().await;
    let entries = log
        .entries_for_date(&date)
        .into_iter()
        .cloned()
        .collect();
    Json(entries)
}

#[instrument(skip(state))]
async fn log_food(
    State(state): State<AppState>,
    Json(body): Json<LogFoodRequest>,
) -> Result<(StatusCode, Json<LoggedEntry>), (StatusCode, String)> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Please select or detect a food".into(),
        ));
    }
    let servings = normalize_servings(body.servings).ok_or((
        StatusCode::BAD_REQUEST,
        "Servings must be a positive number".to_string(),
    ))?;

    let resolved = resolve(&state.catalog, name, &body.unit, servings)
        .ok_or((StatusCode::NOT_FOUND, "Food not recognized".into()))?;

    let entry = LoggedEntry {
        id: 0,
        name: resolved.name,
        calories: resolved.calories,
        protein: resolved.protein,
        fats: resolved.fats,
        fiber: resolved.fiber,
        servings: resolved.servings,
        unit: resolved.unit,
        time: clock_time(),
        date: today(),
        entry_type: EntryType::Scan,
        image: resolved.image,
    };

    append_and_persist(&state, entry).await
}

#[instrument(skip(state))]
async fn log_recipe(
    State(state): State<AppState>,
    Json(body): Json<LogRecipeRequest>,
) -> Result<(StatusCode, Json<LoggedEntry>), (StatusCode, String)> {
    if body.title.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "title is required".into()));
    }
    if body.calories < 0 || body.protein < 0 || body.fats < 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "Nutrition values cannot be negative".into(),
        ));
    }
    if body.calories == 0 && body.protein == 0 && body.fats == 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "Recipe has no nutrition to log".into(),
        ));
    }

    let entry = LoggedEntry {
        id: 0,
        name: body.title,
        calories: body.calories,
        protein: body.protein,
        fats: body.fats,
        fiber: 0,
        servings: 1.0,
        unit: "serving".into(),
        time: clock_time(),
        date: today(),
        entry_type: EntryType::AiRecipe,
        image: None,
    };

    append_and_persist(&state, entry).await
}

/// Mutation discipline: append in memory, persist the whole collection, and
/// roll the append back if the store write fails so a 500 leaves prior state
/// unchanged.
async fn append_and_persist(
    state: &AppState,
    entry: LoggedEntry,
) -> Result<(StatusCode, Json<LoggedEntry>), (StatusCode, String)> {
    let (id, stored) = {
        let mut log = state.log.write().await;
        let id = log.append(entry);
        let stored = log
            .entries()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or((
                StatusCode::INTERNAL_SERVER_ERROR,
                "entry vanished after append".to_string(),
            ))?;
        (id, stored)
    };

    if let Err(e) = persist(state).await {
        error!(error = %e, "failed to persist food log; rolling back append");
        state.log.write().await.remove(id);
        return Err((StatusCode::INTERNAL_SERVER_ERROR, "Could not save food log".into()));
    }

    Ok((StatusCode::CREATED, Json(stored)))
}

#[instrument(skip(state))]
async fn remove_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RemoveResponse>, (StatusCode, String)> {
    let taken = state.log.write().await.take(id);

    let Some((idx, entry)) = taken else {
        return Ok(Json(RemoveResponse { removed: false }));
    };

    if let Err(e) = persist(&state).await {
        error!(error = %e, id, "failed to persist food log; restoring entry");
        state.log.write().await.restore(idx, entry);
        return Err((StatusCode::INTERNAL_SERVER_ERROR, "Could not save food log".into()));
    }

    Ok(Json(RemoveResponse { removed: true }))
}

#[instrument(skip(state))]
async fn day_summary(
    State(state): State<AppState>,
    Query(params): Query<LogQuery>,
) -> Json<DaySummary> {
    let date = params.date.unwrap_or_else(today);

    let (totals, log_empty) = {
        let log = state.log.read().await;
        (log.totals_for_date(&date), log.is_empty())
    };

    let profile = state.profile.read().await.clone();
    let (remaining, notes) = match profile {
        Some(p) => {
            let targets = profile_services::targets(&p);
            (
                Some(targets.calories - totals.calories),
                services::notifications(&totals, &targets, log_empty),
            )
        }
        None => {
            let mut notes = Vec::new();
            if log_empty {
                notes.push("⏰ No food logged today".to_string());
            }
            (None, notes)
        }
    };

    Json(DaySummary {
        date,
        totals,
        remaining_calories: remaining,
        notifications: notes,
    })
}

async fn persist(state: &AppState) -> anyhow::Result<()> {
    let value = {
        let log = state.log.read().await;
        serde_json::to_value(log.entries())?
    };
    state.store.save("foodLog", &value).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_req(name: &str, servings: f64) -> LogFoodRequest {
        LogFoodRequest {
            name: name.into(),
            unit: "bowl".into(),
            servings,
        }
    }

    #[tokio::test]
    async fn scan_entry_is_logged_persisted_and_removable() {
        let state = AppState::fake();

        let (status, Json(entry)) = log_food(State(state.clone()), Json(scan_req("roti", 2.0)))
            .await
            .expect("log should succeed");
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(entry.name, "Roti");
        assert_eq!(entry.calories, 240);
        assert_eq!(entry.entry_type, EntryType::Scan);
        assert_eq!(entry.date, today());

        let Json(entries) = list_entries(
            State(state.clone()),
            Query(LogQuery { date: None }),
        )
        .await;
        assert_eq!(entries.len(), 1);

        // The whole collection is persisted after the mutation.
        let saved = state
            .store
            .load("foodLog")
            .await
            .expect("load")
            .expect("food log saved");
        assert_eq!(saved.as_array().map(Vec::len), Some(1));

        let Json(resp) = remove_entry(State(state.clone()), Path(entry.id))
            .await
            .expect("remove should succeed");
        assert!(resp.removed);

        // Removing again is a no-op, not an error.
        let Json(resp) = remove_entry(State(state.clone()), Path(entry.id))
            .await
            .expect("remove should succeed");
        assert!(!resp.removed);
        assert!(state.log.read().await.is_empty());
    }

    #[tokio::test]
    async fn empty_and_unknown_names_are_rejected_distinctly() {
        let state = AppState::fake();

        let (status, _) = log_food(State(state.clone()), Json(scan_req("  ", 1.0)))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, msg) = log_food(
            State(state.clone()),
            Json(scan_req("totally-unknown-food-xyz", 1.0)),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(msg, "Food not recognized");

        assert!(state.log.read().await.is_empty());
    }

    #[tokio::test]
    async fn non_positive_servings_never_reach_the_log() {
        let state = AppState::fake();

        for servings in [0.0, -2.0, f64::NAN] {
            let (status, msg) = log_food(State(state.clone()), Json(scan_req("roti", servings)))
                .await
                .unwrap_err();
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(msg, "Servings must be a positive number");
        }

        assert!(state.log.read().await.is_empty());
        assert_eq!(state.store.load("foodLog").await.expect("load"), None);
    }

    #[tokio::test]
    async fn servings_snap_to_the_half_grid_before_logging() {
        let state = AppState::fake();

        let (_, Json(entry)) = log_food(State(state.clone()), Json(scan_req("roti", 1.3)))
            .await
            .expect("log should succeed");
        assert_eq!(entry.servings, 1.5);
        assert_eq!(entry.calories, 180);
    }

    #[tokio::test]
    async fn recipe_nutrition_must_be_non_negative_and_non_zero() {
        let state = AppState::fake();

        let recipe = |calories, protein, fats| LogRecipeRequest {
            title: "Paneer Bhurji".into(),
            calories,
            protein,
            fats,
        };

        let (status, msg) = log_recipe(State(state.clone()), Json(recipe(-320, 18, 24)))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "Nutrition values cannot be negative");

        let (status, _) = log_recipe(State(state.clone()), Json(recipe(0, 0, 0)))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert!(state.log.read().await.is_empty());
    }

    #[tokio::test]
    async fn recipe_entries_carry_the_ai_recipe_type() {
        let state = AppState::fake();

        let (_, Json(entry)) = log_recipe(
            State(state.clone()),
            Json(LogRecipeRequest {
                title: "Paneer Bhurji".into(),
                calories: 320,
                protein: 18,
                fats: 24,
            }),
        )
        .await
        .expect("log should succeed");

        assert_eq!(entry.entry_type, EntryType::AiRecipe);
        assert_eq!(entry.servings, 1.0);
    }

    #[tokio::test]
    async fn summary_reports_remaining_only_with_a_profile() {
        let state = AppState::fake();

        let Json(summary) = day_summary(
            State(state.clone()),
            Query(LogQuery { date: None }),
        )
        .await;
        assert_eq!(summary.remaining_calories, None);
        assert!(summary
            .notifications
            .iter()
            .any(|n| n.contains("No food logged")));

        *state.profile.write().await = Some(crate::profile::UserProfile {
            name: "Test".into(),
            sex: "Male".into(),
            age: 25,
            height: 175.0,
            weight: 70.0,
            goal: crate::profile::Goal::Maintenance,
            condition: "none".into(),
            calorie_goal: Some(2000),
        });
        let (status, _) = log_food(State(state.clone()), Json(scan_req("dal", 1.0)))
            .await
            .expect("log should succeed");
        assert_eq!(status, StatusCode::CREATED);

        let Json(summary) = day_summary(
            State(state.clone()),
            Query(LogQuery { date: None }),
        )
        .await;
        assert_eq!(summary.totals.calories, 180);
        assert_eq!(summary.remaining_calories, Some(2000 - 180));
    }
}
