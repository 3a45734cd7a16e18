use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use tracing::instrument;

use super::dto::ReportRequest;
use super::services::render_report;
use crate::foodlog::services::today;
use crate::profile::services as profile_services;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/report", post(export_report))
}

#[instrument(skip(state, body))]
async fn export_report(
    State(state): State<AppState>,
    Json(body): Json<ReportRequest>,
) -> Result<(HeaderMap, Bytes), (StatusCode, String)> {
    let profile = match body.profile {
        Some(p) => p,
        None => state
            .profile
            .read()
            .await
            .clone()
            .ok_or((StatusCode::BAD_REQUEST, "Profile is required".into()))?,
    };
    let targets = body
        .nutrition
        .unwrap_or_else(|| profile_services::targets(&profile));

    let date = today();
    let totals = state.log.read().await.totals_for_date(&date);

    let doc = render_report(state.llm.as_ref(), &profile, &targets, &date, &totals).await;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        "text/plain; charset=utf-8".parse().map_err(internal)?,
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        "attachment; filename=\"NutriScan_Medical_Report.txt\""
            .parse()
            .map_err(internal)?,
    );

    Ok((headers, doc))
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
