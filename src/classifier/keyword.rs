//! Deterministic keyword backend. No model service required, which makes it
//! the backend of choice for tests and air-gapped deployments.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;

use super::{ClassifierError, Prediction, Ranking, TextClassifier};
use crate::emotion::EmotionLabel;

/// Keyword vocabulary per emotion, checked in this order. Substring
/// matching, so "mad" also fires inside "madly".
const KEYWORD_TABLE: [(EmotionLabel, &[&str]); 6] = [
    (
        EmotionLabel::Joy,
        &[
            "happy",
            "excited",
            "great",
            "wonderful",
            "amazing",
            "fantastic",
            "good",
            "excellent",
        ],
    ),
    (
        EmotionLabel::Sadness,
        &[
            "sad",
            "depressed",
            "unhappy",
            "down",
            "upset",
            "not good",
            "bad",
            "terrible",
        ],
    ),
    (
        EmotionLabel::Anger,
        &["angry", "mad", "furious", "annoyed", "frustrated", "hate"],
    ),
    (
        EmotionLabel::Fear,
        &["scared", "afraid", "worried", "anxious", "nervous", "frightened"],
    ),
    (
        EmotionLabel::Love,
        &["love", "adore", "cherish", "affection", "romantic"],
    ),
    (
        EmotionLabel::Surprise,
        &["surprised", "shocked", "amazed", "unexpected", "wow"],
    ),
];

const NEGATIVE_SHORTCUT_CONFIDENCE: f64 = 0.8;
const KEYWORD_MATCH_CONFIDENCE: f64 = 0.75;
const NEUTRAL_CONFIDENCE: f64 = 0.6;

lazy_static! {
    static ref NEGATIVE_SHORTCUT: Regex =
        Regex::new(r"not.*good|not.*well|not.*happy|feeling.*bad|feel.*bad")
            .expect("Failed to compile negative shortcut pattern");
}

/// Classifier backed by keyword lookup tables instead of a model.
///
/// Produces a single prediction with a fixed pseudo-confidence per tier:
/// negated wellbeing beats keyword hits, keyword hits beat the neutral
/// default.
#[derive(Debug, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    fn detect(&self, text: &str) -> Prediction {
        let text = text.to_lowercase();

        if NEGATIVE_SHORTCUT.is_match(&text) {
            return Prediction {
                label: EmotionLabel::Sadness,
                score: NEGATIVE_SHORTCUT_CONFIDENCE,
            };
        }

        for (label, keywords) in KEYWORD_TABLE.iter() {
            if keywords.iter().any(|keyword| text.contains(keyword)) {
                return Prediction {
                    label: *label,
                    score: KEYWORD_MATCH_CONFIDENCE,
                };
            }
        }

        Prediction {
            label: EmotionLabel::Neutral,
            score: NEUTRAL_CONFIDENCE,
        }
    }
}

#[async_trait]
impl TextClassifier for KeywordClassifier {
    async fn classify(&self, text: &str) -> Result<Ranking, ClassifierError> {
        Ranking::new(vec![self.detect(text)])
    }

    fn describe(&self) -> String {
        "keyword tables".to_string()
    }
}
