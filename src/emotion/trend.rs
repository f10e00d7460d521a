use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use super::EmotionLabel;

/// Running tally of resolved emotions since process start.
///
/// Purely in-memory: initialized to zero at startup, never persisted, never
/// reset. One cell per emotion label, indexed by discriminant.
#[derive(Debug, Default)]
pub struct TrendCounter {
    counts: [AtomicU64; 7],
}

impl TrendCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one resolved emotion.
    pub fn record(&self, emotion: EmotionLabel) {
        self.counts[emotion as usize].fetch_add(1, Ordering::Relaxed);
    }

    /// Read all counters. Labels that never occurred report zero.
    pub fn snapshot(&self) -> TrendSnapshot {
        let count = |label: EmotionLabel| self.counts[label as usize].load(Ordering::Relaxed);
        TrendSnapshot {
            joy: count(EmotionLabel::Joy),
            sadness: count(EmotionLabel::Sadness),
            anger: count(EmotionLabel::Anger),
            fear: count(EmotionLabel::Fear),
            love: count(EmotionLabel::Love),
            surprise: count(EmotionLabel::Surprise),
            neutral: count(EmotionLabel::Neutral),
        }
    }
}

/// One count per emotion label, always all seven. Field order matches the
/// canonical label order and fixes the serialized key order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TrendSnapshot {
    pub joy: u64,
    pub sadness: u64,
    pub anger: u64,
    pub fear: u64,
    pub love: u64,
    pub surprise: u64,
    pub neutral: u64,
}

impl TrendSnapshot {
    /// Sum across all labels, equal to the number of analyses recorded.
    pub fn total(&self) -> u64 {
        self.joy + self.sadness + self.anger + self.fear + self.love + self.surprise + self.neutral
    }
}
