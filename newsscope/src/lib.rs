//! NewsScope: a news analysis service. Fetches headlines, runs a
//! summarization / NER / sentiment / keyword / clustering pipeline over
//! them and serves the results plus visualization payloads over HTTP.
//! Every model-backed stage degrades to a local fallback, so the service
//! stays useful without an inference endpoint configured.

pub mod analysis;
pub mod api;
pub mod cluster;
pub mod config;
pub mod embeddings;
pub mod error;
pub mod inference;
pub mod models;
pub mod news;
pub mod text;
pub mod viz;

pub use error::{NewsScopeError, Result};
