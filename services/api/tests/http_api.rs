//! HTTP surface tests for the assessment service, driven through the router
//! with `tower::ServiceExt` so no socket is bound.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::{Extension, Router};
use hba_api::{assessment_router, AppState};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tower::ServiceExt;

fn test_router(ready: bool) -> Router {
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let state = AppState {
        readiness: Arc::new(AtomicBool::new(ready)),
        metrics: Arc::new(handle),
    };

    assessment_router().layer(Extension(state))
}

fn complete_payload() -> Value {
    json!({
        "title": "Cortical plasticity under enriched housing",
        "construct_validity": 3,
        "internal_validity": 3,
        "external_validity": 2,
        "replacement_available": false,
        "reduction_justified": true,
        "refinement_implemented": true,
        "severity_grade": 2,
        "societal_interests": ["life_health"],
        "anticipated_gain": 2,
        "likelihood": 2
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let response = test_router(true)
        .oneshot(
            Request::get("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn readiness_reflects_startup_state() {
    let response = test_router(false)
        .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = test_router(true)
        .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn evaluate_returns_scores_decision_and_report() {
    let response = test_router(true)
        .oneshot(
            Request::post("/api/v1/assessment/evaluate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(complete_payload().to_string()))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["decision"], "DOES_NOT_FAVOUR_APPROVAL");
    assert!((body["strain_score"].as_f64().expect("strain") - 2.0).abs() < 1e-9);
    assert!(body["decision_statement"]
        .as_str()
        .expect("statement")
        .starts_with("DOES NOT FAVOUR APPROVAL"));
    assert!(body["report"]
        .as_str()
        .expect("report")
        .contains("## Overall decision"));
}

#[tokio::test]
async fn incomplete_draft_is_rejected_with_bad_request() {
    let mut payload = complete_payload();
    payload
        .as_object_mut()
        .expect("object payload")
        .remove("replacement_available");

    let response = test_router(true)
        .oneshot(
            Request::post("/api/v1/assessment/evaluate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("replacement_available"));
}

#[tokio::test]
async fn metrics_endpoint_renders_prometheus_text() {
    let response = test_router(true)
        .oneshot(
            Request::get("/metrics")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .expect("content type");
    assert!(content_type.starts_with("text/plain"));
}
