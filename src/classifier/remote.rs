//! HTTP client for a hosted text-classification model.
//!
//! Speaks the HuggingFace inference protocol: POST `{base}/models/{model}`
//! with `{"inputs": text}`, answered by a list of scored labels (possibly
//! nested one level, one inner list per input).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{ClassifierError, Prediction, Ranking, TextClassifier};
use crate::emotion::EmotionLabel;

/// Classifier that delegates to a hosted inference service.
pub struct RemoteModelClassifier {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_token: Option<String>,
}

/// One raw scored label as returned by the service. Labels are free-form
/// strings at this point; anything outside the known set gets discarded.
#[derive(Debug, Deserialize)]
struct RawPrediction {
    label: String,
    score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<RawPrediction>>),
    Flat(Vec<RawPrediction>),
}

impl InferenceResponse {
    /// Predictions for the first (and only) input we sent.
    fn into_raw(self) -> Vec<RawPrediction> {
        match self {
            InferenceResponse::Nested(mut outer) => {
                if outer.is_empty() {
                    Vec::new()
                } else {
                    outer.swap_remove(0)
                }
            }
            InferenceResponse::Flat(raw) => raw,
        }
    }
}

fn ranking_from_raw(raw: Vec<RawPrediction>) -> Result<Ranking, ClassifierError> {
    let predictions = raw
        .into_iter()
        .filter_map(|prediction| {
            EmotionLabel::from_raw(&prediction.label).map(|label| Prediction {
                label,
                score: prediction.score,
            })
        })
        .collect();
    Ranking::new(predictions)
}

impl RemoteModelClassifier {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the inference service (e.g., "https://api-inference.huggingface.co")
    /// * `model` - Model identifier appended to the request path
    /// * `timeout_sec` - Request timeout in seconds
    /// * `api_token` - Optional bearer token for the service
    pub fn new(
        base_url: String,
        model: String,
        timeout_sec: u64,
        api_token: Option<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .expect("Failed to create HTTP client");

        // Ensure base_url doesn't have trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            model,
            api_token,
        }
    }

    /// Get the base URL of the inference service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TextClassifier for RemoteModelClassifier {
    async fn classify(&self, text: &str) -> Result<Ranking, ClassifierError> {
        let url = format!("{}/models/{}", self.base_url, self.model);
        let mut request = self.client.post(&url).json(&json!({ "inputs": text }));
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::Service { status, body });
        }

        let raw = response.json::<InferenceResponse>().await?.into_raw();
        ranking_from_raw(raw)
    }

    fn describe(&self) -> String {
        format!("model {} at {}", self.model, self.base_url)
    }
}
