mod keyword;
mod remote;

pub use keyword::KeywordClassifier;
pub use remote::RemoteModelClassifier;

use async_trait::async_trait;
use thiserror::Error;

use crate::emotion::EmotionLabel;

/// One scored label from a classifier backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    pub label: EmotionLabel,
    pub score: f64,
}

/// Non-empty list of predictions, ordered by descending score.
#[derive(Clone, Debug, PartialEq)]
pub struct Ranking(Vec<Prediction>);

impl Ranking {
    /// Build a ranking from raw predictions.
    ///
    /// Sorts by descending score (ties keep their given order) and rejects
    /// an empty list, so `top()` is always available to consumers.
    pub fn new(mut predictions: Vec<Prediction>) -> Result<Ranking, ClassifierError> {
        if predictions.is_empty() {
            return Err(ClassifierError::NoUsablePredictions);
        }
        predictions.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(Ranking(predictions))
    }

    /// The top-ranked prediction.
    pub fn top(&self) -> &Prediction {
        &self.0[0]
    }

    /// Everything after the top prediction, still in descending order.
    pub fn rest(&self) -> &[Prediction] {
        &self.0[1..]
    }

    pub fn as_slice(&self) -> &[Prediction] {
        &self.0
    }
}

/// Failures surfaced by classifier backends.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The request to the backend failed or its payload could not be decoded.
    #[error("classifier request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("classifier service returned status {status}: {body}")]
    Service { status: u16, body: String },

    /// Nothing in the backend output maps into the known label set.
    #[error("classifier returned no usable predictions")]
    NoUsablePredictions,
}

/// A text classification backend.
///
/// Implementations rank the emotional tone of a message. They know nothing
/// about the correction pipeline layered on top and must not apply it
/// themselves. Picked once at startup and shared across requests.
#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// Classify a message, returning every label the backend scored,
    /// ordered by descending score. Non-empty for non-empty input.
    async fn classify(&self, text: &str) -> Result<Ranking, ClassifierError>;

    /// Human-readable description of the backend, for logs and probes.
    fn describe(&self) -> String;
}
