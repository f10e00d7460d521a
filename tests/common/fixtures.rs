//! Classifier stubs for end-to-end tests

use async_trait::async_trait;
use emotioneye_server::classifier::{ClassifierError, Prediction, Ranking, TextClassifier};
use emotioneye_server::emotion::EmotionLabel;

/// Classifier that answers every request with the same ranking.
pub struct FixedClassifier(Vec<Prediction>);

impl FixedClassifier {
    pub fn of(predictions: &[(EmotionLabel, f64)]) -> Self {
        Self(
            predictions
                .iter()
                .map(|(label, score)| Prediction {
                    label: *label,
                    score: *score,
                })
                .collect(),
        )
    }
}

#[async_trait]
impl TextClassifier for FixedClassifier {
    async fn classify(&self, _text: &str) -> Result<Ranking, ClassifierError> {
        Ranking::new(self.0.clone())
    }

    fn describe(&self) -> String {
        "fixed predictions".to_string()
    }
}

/// Classifier that fails every request.
pub struct FailingClassifier;

#[async_trait]
impl TextClassifier for FailingClassifier {
    async fn classify(&self, _text: &str) -> Result<Ranking, ClassifierError> {
        Err(ClassifierError::Service {
            status: 500,
            body: "model unavailable".to_string(),
        })
    }

    fn describe(&self) -> String {
        "always failing".to_string()
    }
}
