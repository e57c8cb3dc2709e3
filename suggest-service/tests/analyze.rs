//! Router-level tests for the analyze and test endpoints.
//!
//! These use the mock completion provider; no network access is required.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use std::sync::Arc;
use suggest_service::config::{SuggestConfig, UpstreamConfig};
use suggest_service::services::providers::CompletionProvider;
use suggest_service::services::providers::mock::MockCompletionProvider;
use suggest_service::startup::{AppState, build_router};
use tower::util::ServiceExt;

fn test_config() -> SuggestConfig {
    SuggestConfig {
        common: service_core::config::Config {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        upstream: UpstreamConfig {
            api_key: "test-api-key".to_string(),
            base_url: "http://localhost:9".to_string(),
            model: "test-model".to_string(),
        },
    }
}

fn test_app(provider: MockCompletionProvider) -> axum::Router {
    let provider: Arc<dyn CompletionProvider> = Arc::new(provider);
    build_router(AppState {
        config: test_config(),
        provider,
    })
}

fn post_analyze(body: Body) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn analyze_returns_suggestions_for_valid_text() {
    let app = test_app(MockCompletionProvider::new(true));

    let response = app
        .oneshot(post_analyze(Body::from(
            json!({"text": "climate change"}).to_string(),
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // The echoing mock pins the exact prompt sent upstream.
    let body = response_json(response).await;
    assert_eq!(
        body["result"],
        "Mock response for: Given this text: \"climate change\", \
         suggest 2-3 related search queries or questions."
    );
}

#[tokio::test]
async fn analyze_trims_upstream_whitespace() {
    let app = test_app(MockCompletionProvider::with_reply(
        "  1. solar power\n2. wind power  \n",
    ));

    let response = app
        .oneshot(post_analyze(Body::from(
            json!({"text": "renewables"}).to_string(),
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["result"], "1. solar power\n2. wind power");
}

#[tokio::test]
async fn analyze_rejects_empty_object() {
    let app = test_app(MockCompletionProvider::new(true));

    let response = app
        .oneshot(post_analyze(Body::from("{}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "No text provided");
}

#[tokio::test]
async fn analyze_rejects_empty_text() {
    let app = test_app(MockCompletionProvider::new(true));

    let response = app
        .oneshot(post_analyze(Body::from(json!({"text": ""}).to_string())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "No text provided");
}

#[tokio::test]
async fn analyze_rejects_invalid_json() {
    let app = test_app(MockCompletionProvider::new(true));

    let response = app
        .oneshot(post_analyze(Body::from("this is not json")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn analyze_rejects_missing_body() {
    let app = test_app(MockCompletionProvider::new(true));

    // No content type, no body.
    let request = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn analyze_rejects_null_body() {
    let app = test_app(MockCompletionProvider::new(true));

    let response = app
        .oneshot(post_analyze(Body::from("null")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn analyze_maps_provider_failure_to_500() {
    let app = test_app(MockCompletionProvider::new(false));

    let response = app
        .oneshot(post_analyze(Body::from(
            json!({"text": "climate change"}).to_string(),
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    let error = body["error"].as_str().unwrap();
    assert!(
        error.starts_with("An error occurred: "),
        "unexpected error body: {}",
        error
    );
}

#[tokio::test]
async fn api_test_returns_status() {
    let app = test_app(MockCompletionProvider::new(true));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/test")
                .header("x-extra-header", "ignored")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body, json!({"status": "API is working!"}));
}

#[tokio::test]
async fn api_test_only_routes_get() {
    let app = test_app(MockCompletionProvider::new(true));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
