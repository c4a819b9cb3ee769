/// Black-box tests for the HTTP surface
///
/// Routes are exercised through the assembled router, the same way a client
/// would see them: the static acknowledgement, schema enforcement at the
/// boundary, prediction determinism, and the web form.
mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use stage_duration_predictor::api::{build_router, handlers::ACK_MESSAGE};
use tower::ServiceExt;

fn sample_request_body() -> Value {
    json!({
        "issue_type": "Feature",
        "priority": "High",
        "team": "Team A",
        "current_stage": "Testing",
        "story_points": 8,
        "previous_stages_count": 1,
        "num_dependencies": 2,
    })
}

fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn response_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_root_returns_static_acknowledgement() {
    let app = build_router(common::test_state());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], ACK_MESSAGE);
}

#[tokio::test]
async fn test_health_reports_status_and_version() {
    let app = build_router(common::test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_model_info_reports_artifact_metadata() {
    let app = build_router(common::test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/model")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["name"], "stage-duration");
    assert_eq!(body["model"], "random_forest");
    assert_eq!(body["n_features"], 18);
}

#[tokio::test]
async fn test_predict_echoes_input_and_returns_estimate() {
    let app = build_router(common::test_state());

    let response = app
        .oneshot(json_request("/predict", &sample_request_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["input"]["team"], "Team A");
    assert_eq!(body["input"]["story_points"], 8);

    let days = body["predicted_days_in_stage"].as_f64().unwrap();
    assert!(days.is_finite());
    assert!(days >= 0.0);
}

#[tokio::test]
async fn test_predict_is_deterministic() {
    let app = build_router(common::test_state());

    let first = app
        .clone()
        .oneshot(json_request("/predict", &sample_request_body()))
        .await
        .unwrap();
    let second = app
        .oneshot(json_request("/predict", &sample_request_body()))
        .await
        .unwrap();

    let first_days = response_json(first).await["predicted_days_in_stage"]
        .as_f64()
        .unwrap();
    let second_days = response_json(second).await["predicted_days_in_stage"]
        .as_f64()
        .unwrap();

    assert_eq!(first_days, second_days);
}

#[tokio::test]
async fn test_predict_rejects_missing_field() {
    let app = build_router(common::test_state());

    let mut body = sample_request_body();
    body.as_object_mut().unwrap().remove("team");

    let response = app.oneshot(json_request("/predict", &body)).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_predict_rejects_mistyped_field() {
    let app = build_router(common::test_state());

    let mut body = sample_request_body();
    body["story_points"] = json!("eight");

    let response = app.oneshot(json_request("/predict", &body)).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_predict_rejects_zero_story_points() {
    let app = build_router(common::test_state());

    let mut body = sample_request_body();
    body["story_points"] = json!(0);

    let response = app.oneshot(json_request("/predict", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_predict_rejects_unknown_category() {
    let app = build_router(common::test_state());

    let mut body = sample_request_body();
    body["team"] = json!("Team Z");

    let response = app.oneshot(json_request("/predict", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "UNKNOWN_CATEGORY");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("team"));
}

#[tokio::test]
async fn test_form_page_lists_model_vocabulary() {
    let app = build_router(common::test_state());

    let response = app
        .oneshot(Request::builder().uri("/ui").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = response_text(response).await;
    assert!(html.contains("<form"));
    assert!(html.contains("Team A"));
    assert!(html.contains("Code Review"));
}

#[tokio::test]
async fn test_form_submission_renders_estimate_and_band() {
    let app = build_router(common::test_state());

    let form_body = "issue_type=Feature&priority=High&team=Team%20A&current_stage=Testing\
                     &story_points=8&previous_stages_count=1&num_dependencies=2";

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ui")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form_body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = response_text(response).await;
    assert!(html.contains("Estimated:"));
    assert!(html.contains("risk"));
}
