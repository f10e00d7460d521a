use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use emotioneye_server::classifier::{KeywordClassifier, RemoteModelClassifier, TextClassifier};
use emotioneye_server::emotion::TrendCounter;
use emotioneye_server::server::{metrics, run_server, RequestsLoggingLevel};

#[derive(Clone, Debug, clap::ValueEnum)]
enum ClassifierBackend {
    /// Hosted text-classification model reached over HTTP.
    Remote,
    /// Deterministic keyword tables, no external service.
    Keyword,
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Address to bind the servers to.
    #[clap(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// The port to listen on.
    #[clap(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, env = "METRICS_PORT", default_value_t = 9091)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Which classification backend to use.
    #[clap(long, env = "CLASSIFIER_BACKEND", value_enum, default_value = "remote")]
    pub classifier_backend: ClassifierBackend,

    /// Model identifier requested from the inference service.
    #[clap(
        long,
        env = "MODEL_NAME",
        default_value = "bhadresh-savani/distilbert-base-uncased-emotion"
    )]
    pub model_name: String,

    /// Base URL of the inference service.
    #[clap(
        long,
        env = "INFERENCE_URL",
        default_value = "https://api-inference.huggingface.co"
    )]
    pub inference_url: String,

    /// Timeout in seconds for inference requests.
    #[clap(long, env = "INFERENCE_TIMEOUT_SEC", default_value_t = 30)]
    pub inference_timeout_sec: u64,

    /// Bearer token for the inference service, if it requires one.
    #[clap(long, env = "INFERENCE_API_TOKEN", hide_env_values = true)]
    pub inference_api_token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    // Initialize metrics system
    info!("Initializing metrics...");
    metrics::init_metrics();

    let classifier: Arc<dyn TextClassifier> = match cli_args.classifier_backend {
        ClassifierBackend::Remote => Arc::new(RemoteModelClassifier::new(
            cli_args.inference_url,
            cli_args.model_name,
            cli_args.inference_timeout_sec,
            cli_args.inference_api_token,
        )),
        ClassifierBackend::Keyword => Arc::new(KeywordClassifier::new()),
    };

    // A classifier that cannot answer the probe must not start serving.
    info!("Probing classifier ({})...", classifier.describe());
    classifier
        .classify("test")
        .await
        .context("Classifier probe failed")?;
    info!("Classifier ready: {}", classifier.describe());

    let trend = Arc::new(TrendCounter::new());

    info!("Ready to serve at port {}!", cli_args.port);
    info!("Metrics available at port {}!", cli_args.metrics_port);
    run_server(
        classifier,
        trend,
        cli_args.logging_level,
        cli_args.host,
        cli_args.port,
        cli_args.metrics_port,
    )
    .await
}
