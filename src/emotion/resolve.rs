//! The emotion-resolution pipeline: turns a classifier ranking plus the raw
//! message text into the final reported emotion.

use crate::classifier::Ranking;

use super::negative::contains_negative_phrase;
use super::EmotionLabel;

/// Confidence asserted when a distrusted joy result has no usable
/// alternative in the ranking. A policy constant, not derived from the
/// classifier.
const FALLBACK_CONFIDENCE: f64 = 0.7;

/// Outcome of resolving one message.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    /// The emotion the service reports.
    pub emotion: EmotionLabel,
    /// Confidence for the reported emotion, rounded to two decimals.
    pub confidence: f64,
    /// What the classifier ranked first, before any correction.
    pub original: EmotionLabel,
}

impl Resolution {
    /// Whether the negative-phrase correction changed the outcome.
    pub fn corrected(&self) -> bool {
        self.emotion != self.original
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Decide the final emotion for a message.
///
/// The top-ranked prediction wins, with one exception: a top-ranked "joy"
/// on text containing a negative phrase is distrusted. In that case the
/// first non-joy alternative further down the ranking takes over; if the
/// ranking offers none, the result falls back to sadness at a fixed
/// confidence.
///
/// Pure decision logic: never fails, touches no shared state. Recording the
/// outcome in the trend counter is the caller's job.
pub fn resolve(ranking: &Ranking, text: &str) -> Resolution {
    let top = ranking.top();
    let original = top.label;

    let (emotion, confidence) = if original == EmotionLabel::Joy && contains_negative_phrase(text)
    {
        match ranking
            .rest()
            .iter()
            .find(|prediction| prediction.label != EmotionLabel::Joy)
        {
            Some(alternative) => (alternative.label, alternative.score),
            None => (EmotionLabel::Sadness, FALLBACK_CONFIDENCE),
        }
    } else {
        (original, top.score)
    };

    Resolution {
        emotion,
        confidence: round2(confidence),
        original,
    }
}
