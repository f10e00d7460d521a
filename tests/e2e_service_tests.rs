//! End-to-end tests for service metadata and health endpoints

mod common;

use common::{FailingClassifier, TestClient, TestServer, HAPPY_MESSAGE};
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;

#[tokio::test]
async fn test_home_reports_service_metadata() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.home().await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Invalid response body");
    assert_eq!(body["message"], "🎯 EmotionEye API is running");
    assert_eq!(body["version"], "2.0.0");
    assert_eq!(body["status"], "active");

    let features = body["features"].as_array().expect("features is not a list");
    assert_eq!(features.len(), 4);
}

#[tokio::test]
async fn test_health_reports_healthy_backend() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.health().await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Invalid response body");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_loaded"], true);
    assert!(body.get("error").is_none());

    // RFC 3339 timestamp
    let timestamp = body["timestamp"].as_str().expect("timestamp missing");
    assert!(timestamp.contains('T'));
}

#[tokio::test]
async fn test_health_reports_unhealthy_backend() {
    let server = TestServer::spawn_with_classifier(Arc::new(FailingClassifier)).await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.health().await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json().await.expect("Invalid response body");
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["model_loaded"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_cross_origin_requests_are_allowed() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client
        .client
        .post(format!("{}/analyze", server.base_url))
        .header("origin", "http://localhost:3000")
        .json(&serde_json::json!({ "message": HAPPY_MESSAGE }))
        .send()
        .await
        .expect("Analyze request failed");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}
