//! News retrieval: NewsAPI client plus a TTL cache for fetched batches.

pub mod cache;
pub mod client;

pub use cache::ArticleCache;
pub use client::NewsApiClient;

/// Topics offered by the service. A superset of the provider's native
/// categories; the client downgrades the extras to keyword queries.
pub const TOPICS: [&str; 8] = [
    "business",
    "technology",
    "science",
    "health",
    "sports",
    "entertainment",
    "politics",
    "world",
];
