mod negative;
mod resolve;
mod trend;

pub use negative::contains_negative_phrase;
pub use resolve::{resolve, Resolution};
pub use trend::{TrendCounter, TrendSnapshot};

use serde::{Deserialize, Serialize};

/// The closed set of emotions the service can report.
///
/// The declaration order is canonical: it drives the field order of trend
/// payloads and the discriminants used to index counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Joy,
    Sadness,
    Anger,
    Fear,
    Love,
    Surprise,
    Neutral,
}

impl EmotionLabel {
    /// All labels in canonical order.
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Joy,
        EmotionLabel::Sadness,
        EmotionLabel::Anger,
        EmotionLabel::Fear,
        EmotionLabel::Love,
        EmotionLabel::Surprise,
        EmotionLabel::Neutral,
    ];

    /// Parse a raw classifier label. Case-insensitive; labels outside the
    /// known set yield `None` and are discarded at the adapter boundary.
    pub fn from_raw(raw: &str) -> Option<EmotionLabel> {
        match raw.to_ascii_lowercase().as_str() {
            "joy" => Some(EmotionLabel::Joy),
            "sadness" => Some(EmotionLabel::Sadness),
            "anger" => Some(EmotionLabel::Anger),
            "fear" => Some(EmotionLabel::Fear),
            "love" => Some(EmotionLabel::Love),
            "surprise" => Some(EmotionLabel::Surprise),
            "neutral" => Some(EmotionLabel::Neutral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Joy => "joy",
            EmotionLabel::Sadness => "sadness",
            EmotionLabel::Anger => "anger",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Love => "love",
            EmotionLabel::Surprise => "surprise",
            EmotionLabel::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
