use anyhow::Result;

use tracing::{error, info};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use super::{log_requests, metrics, state::*, RequestsLoggingLevel, ServerConfig};
use crate::emotion::{resolve, EmotionLabel};
use crate::guidance;

const NO_MESSAGE_ERROR: &str = "No message provided.";

#[derive(Serialize)]
struct HomeResponse {
    message: &'static str,
    version: &'static str,
    status: &'static str,
    features: [&'static str; 4],
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    model_loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    timestamp: String,
}

#[derive(Deserialize, Debug)]
struct AnalyzeBody {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
struct AnalyzeResponse {
    emotion: EmotionLabel,
    confidence: f64,
    reply: String,
    quranic_aayat: &'static str,
    translation: &'static str,
    original_classification: EmotionLabel,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

async fn home() -> impl IntoResponse {
    Json(HomeResponse {
        message: "🎯 EmotionEye API is running",
        version: env!("CARGO_PKG_VERSION"),
        status: "active",
        features: [
            "Emotion analysis with DistilBERT",
            "Quranic guidance integration",
            "Negative phrase detection",
            "Sentiment trend tracking",
        ],
    })
}

async fn health(State(classifier): State<GuardedClassifier>) -> Response {
    let timestamp = Utc::now().to_rfc3339();
    match classifier.classify("test").await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                model_loaded: true,
                error: None,
                timestamp,
            }),
        )
            .into_response(),
        Err(err) => {
            error!("Health probe failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                    model_loaded: false,
                    error: Some(err.to_string()),
                    timestamp,
                }),
            )
                .into_response()
        }
    }
}

async fn analyze(
    State(state): State<ServerState>,
    body: Result<Json<AnalyzeBody>, JsonRejection>,
) -> Response {
    // A body that is not valid JSON carries no message either.
    let message = match body {
        Ok(Json(body)) => body.message,
        Err(_) => String::new(),
    };
    let message = message.trim();

    if message.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, NO_MESSAGE_ERROR.to_string());
    }

    let ranking = match state.classifier.classify(message).await {
        Ok(ranking) => ranking,
        Err(err) => {
            error!("Classification failed: {}", err);
            metrics::record_classifier_failure();
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string());
        }
    };

    let resolution = resolve(&ranking, message);
    if resolution.corrected() {
        info!(
            "Corrected {} to {} on negative phrasing",
            resolution.original, resolution.emotion
        );
        metrics::record_correction();
    }

    state.trend.record(resolution.emotion);
    metrics::record_analyzed_emotion(resolution.emotion.as_str());

    let verse = guidance::verse_for(resolution.emotion);
    let reply = guidance::reply_for(resolution.emotion, message);

    Json(AnalyzeResponse {
        emotion: resolution.emotion,
        confidence: resolution.confidence,
        reply,
        quranic_aayat: verse.verse,
        translation: verse.translation,
        original_classification: resolution.original,
    })
    .into_response()
}

async fn sentiment_trend(State(trend): State<GuardedTrendCounter>) -> impl IntoResponse {
    Json(trend.snapshot())
}

impl ServerState {
    fn new(
        config: ServerConfig,
        classifier: GuardedClassifier,
        trend: GuardedTrendCounter,
    ) -> ServerState {
        ServerState {
            config,
            classifier,
            trend,
        }
    }
}

pub fn make_app(
    config: ServerConfig,
    classifier: GuardedClassifier,
    trend: GuardedTrendCounter,
) -> Router {
    let state = ServerState::new(config, classifier, trend);

    let mut app: Router = Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/sentiment-trend", get(sentiment_trend))
        .with_state(state.clone());

    app = app.layer(CorsLayer::permissive());
    app = app.layer(middleware::from_fn_with_state(state, log_requests));

    app
}

pub async fn run_server(
    classifier: GuardedClassifier,
    trend: GuardedTrendCounter,
    requests_logging_level: RequestsLoggingLevel,
    host: String,
    port: u16,
    metrics_port: u16,
) -> Result<()> {
    let config = ServerConfig {
        requests_logging_level,
        host: host.clone(),
        port,
    };
    let app = make_app(config, classifier, trend);

    let metrics_app = Router::new().route("/metrics", get(metrics::metrics_handler));
    let metrics_listener =
        tokio::net::TcpListener::bind(format!("{}:{}", host, metrics_port)).await?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(metrics_listener, metrics_app).await {
            error!("Metrics server terminated: {}", err);
        }
    });

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;

    Ok(axum::serve(listener, app).await?)
}
