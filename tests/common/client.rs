//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all server endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

/// HTTP test client, one method per endpoint
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /
    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Home request failed")
    }

    /// GET /health
    pub async fn health(&self) -> Response {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .expect("Health request failed")
    }

    /// POST /analyze
    pub async fn analyze(&self, message: &str) -> Response {
        self.client
            .post(format!("{}/analyze", self.base_url))
            .json(&json!({ "message": message }))
            .send()
            .await
            .expect("Analyze request failed")
    }

    /// POST /analyze with a raw body instead of a well-formed JSON object
    ///
    /// Useful for testing malformed and incomplete payloads.
    pub async fn analyze_raw(&self, body: &str) -> Response {
        self.client
            .post(format!("{}/analyze", self.base_url))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Analyze request failed")
    }

    /// GET /sentiment-trend
    pub async fn sentiment_trend(&self) -> Response {
        self.client
            .get(format!("{}/sentiment-trend", self.base_url))
            .send()
            .await
            .expect("Sentiment trend request failed")
    }
}
