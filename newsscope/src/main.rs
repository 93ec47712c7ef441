use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newsscope::api::{create_router, AppState};
use newsscope::config::Config;
use newsscope::embeddings::EmbeddingProvider;
use newsscope::inference::InferenceProvider;

#[derive(Parser)]
#[command(name = "newsscope")]
#[command(about = "News analysis service: headlines in, summaries, entities, sentiment and topic clusters out")]
struct Args {
    /// Skip loading the local embedding model (clustering falls back to TF-IDF)
    #[arg(long)]
    no_embeddings: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsscope=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    if config.news.api_key.is_empty() {
        tracing::warn!("NEWS_API_KEY is not set - topic and search endpoints will fail");
    }

    if let Some(inference_config) = &config.inference {
        tracing::info!("Using inference service at {}", inference_config.base_url);
    }
    let inference = InferenceProvider::new(config.inference.as_ref());
    if !inference.is_available() {
        tracing::warn!("Inference unavailable - model-backed stages will use local fallbacks");
    }

    let embeddings = if args.no_embeddings {
        None
    } else {
        tracing::info!("Loading embedding model: {}...", config.embeddings.model);
        match EmbeddingProvider::new(&config.embeddings) {
            Ok(provider) => Some(provider),
            Err(e) => {
                tracing::warn!("Failed to load embedding model: {} - clustering will use TF-IDF", e);
                None
            }
        }
    };

    let state = AppState::new(config.clone(), inference, embeddings);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("NewsScope starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/health", addr);
    tracing::info!("  Topics:       http://{}/topics", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
