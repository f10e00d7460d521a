use axum::extract::FromRef;

use crate::classifier::TextClassifier;
use crate::emotion::TrendCounter;
use std::sync::Arc;

use super::ServerConfig;

pub type GuardedClassifier = Arc<dyn TextClassifier>;
pub type GuardedTrendCounter = Arc<TrendCounter>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub classifier: GuardedClassifier,
    pub trend: GuardedTrendCounter,
}

impl FromRef<ServerState> for GuardedClassifier {
    fn from_ref(input: &ServerState) -> Self {
        input.classifier.clone()
    }
}

impl FromRef<ServerState> for GuardedTrendCounter {
    fn from_ref(input: &ServerState) -> Self {
        input.trend.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
