use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all EmotionEye metrics
const PREFIX: &str = "emotioneye";

lazy_static! {
    // Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Analysis Metrics
    pub static ref ANALYZED_EMOTIONS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_analyzed_emotions_total"), "Resolved emotions by label"),
        &["emotion"]
    ).expect("Failed to create analyzed_emotions_total metric");

    pub static ref CORRECTIONS_TOTAL: Counter = Counter::new(
        format!("{PREFIX}_corrections_total"),
        "Joy classifications overridden because of negative phrasing"
    ).expect("Failed to create corrections_total metric");

    pub static ref CLASSIFIER_FAILURES_TOTAL: Counter = Counter::new(
        format!("{PREFIX}_classifier_failures_total"),
        "Classification requests that ended in an error"
    ).expect("Failed to create classifier_failures_total metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Register all metrics - ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(ANALYZED_EMOTIONS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(CORRECTIONS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(CLASSIFIER_FAILURES_TOTAL.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// Record an HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration.as_secs_f64());
}

/// Record a resolved emotion
pub fn record_analyzed_emotion(emotion: &str) {
    ANALYZED_EMOTIONS_TOTAL.with_label_values(&[emotion]).inc();
}

/// Record a fired correction heuristic
pub fn record_correction() {
    CORRECTIONS_TOTAL.inc();
}

/// Record a failed classification request
pub fn record_classifier_failure() {
    CLASSIFIER_FAILURES_TOTAL.inc();
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_else(|_| String::from(""));
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}
