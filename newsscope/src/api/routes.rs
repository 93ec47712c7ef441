use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/topics", get(handlers::topics))
        .route("/topic/{name}", get(handlers::topic_news))
        .route("/search", get(handlers::search_news))
        .route("/summarize", post(handlers::summarize))
        .route("/summarize/joined", post(handlers::summarize_joined))
        .route("/cluster", post(handlers::cluster))
        .route("/visualize/wordcloud", post(handlers::visualize_wordcloud))
        .route("/visualize/heatmap", post(handlers::visualize_heatmap))
        .route("/visualize/network", post(handlers::visualize_network))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
