use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsScopeError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("News provider error: {0}")]
    News(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Inference unavailable: {0}")]
    InferenceUnavailable(String),

    #[error("Inference rate limit exceeded, retry after {retry_after:?} seconds")]
    InferenceRateLimit { retry_after: Option<u64> },

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Clustering error: {0}")]
    Clustering(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for NewsScopeError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            NewsScopeError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            NewsScopeError::News(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            NewsScopeError::Inference(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            NewsScopeError::InferenceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, msg.clone())
            }
            NewsScopeError::InferenceRateLimit { .. } => {
                (StatusCode::TOO_MANY_REQUESTS, self.to_string())
            }
            NewsScopeError::Embedding(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            NewsScopeError::Clustering(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            NewsScopeError::Http(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            NewsScopeError::Json(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            NewsScopeError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            NewsScopeError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, NewsScopeError>;
