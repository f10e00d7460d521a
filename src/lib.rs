//! EmotionEye Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod classifier;
pub mod emotion;
pub mod guidance;
pub mod server;

// Re-export commonly used types for convenience
pub use classifier::{
    ClassifierError, KeywordClassifier, Prediction, Ranking, RemoteModelClassifier, TextClassifier,
};
pub use emotion::{resolve, EmotionLabel, Resolution, TrendCounter, TrendSnapshot};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
