use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use hba_core::assessment::{compute_scores, format_report, AssessmentDraft, ScoreResult};
use hba_core::error::AppError;
use serde::Serialize;
use serde_json::json;

/// Routes for assessment evaluation plus the operational endpoints.
///
/// The caller layers an [`AppState`] extension for `/ready` and `/metrics`.
pub fn assessment_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route(
            "/api/v1/assessment/evaluate",
            post(evaluate_endpoint),
        )
}

#[derive(Debug, Serialize)]
pub(crate) struct EvaluateResponse {
    #[serde(flatten)]
    pub(crate) result: ScoreResult,
    pub(crate) decision_statement: &'static str,
    pub(crate) report: String,
}

pub(crate) async fn evaluate_endpoint(
    Json(draft): Json<AssessmentDraft>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let input = draft.finalize().map_err(AppError::from)?;
    let result = compute_scores(&input);
    let report = format_report(&input, &result);

    Ok(Json(EvaluateResponse {
        decision_statement: result.decision.statement(),
        result,
        report,
    }))
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
