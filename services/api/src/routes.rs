use crate::infra::AppState;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use habit_eval::error::AppError;
use habit_eval::evaluation::HabitEvaluator;
use habit_eval::habit_log::{collect_entries, HabitEntryRecord};
use habit_eval::normalize::MonthKey;
use habit_eval::periods::{evaluate_periods, PeriodReport, StudentDirectory, StudentProfile};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EvaluationQuery {
    #[serde(default)]
    pub(crate) month: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluationRequest {
    #[serde(default)]
    pub(crate) entries: Vec<HabitEntryRecord>,
    #[serde(default)]
    pub(crate) students: Vec<StudentProfile>,
}

pub(crate) fn evaluation_router(evaluator: Arc<HabitEvaluator>) -> Router {
    Router::new()
        .route("/api/v1/evaluations", post(evaluations_endpoint))
        .with_state(evaluator)
}

pub(crate) fn with_evaluation_routes(evaluator: Arc<HabitEvaluator>) -> Router {
    evaluation_router(evaluator)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn evaluations_endpoint(
    State(evaluator): State<Arc<HabitEvaluator>>,
    Query(query): Query<EvaluationQuery>,
    Json(payload): Json<EvaluationRequest>,
) -> Result<Json<PeriodReport>, AppError> {
    let month = match query.month.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(MonthKey::parse(raw)?),
        _ => None,
    };

    let EvaluationRequest { entries, students } = payload;
    let (entries, skipped) = collect_entries(entries);
    if skipped > 0 {
        warn!(skipped, "dropping entries without a readable date");
    }
    let directory: StudentDirectory = students.into_iter().collect();

    let report = evaluate_periods(&evaluator, &entries, &directory, month.into());
    info!(
        entries = entries.len(),
        students = report.results.len(),
        "habit evaluation completed"
    );

    Ok(Json(report))
}
