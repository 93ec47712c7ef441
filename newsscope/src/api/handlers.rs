use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::analysis::ContentGraphBuilder;
use crate::cluster::ClusterAssignment;
use crate::error::{NewsScopeError, Result};
use crate::models::{Article, ContentGraph};
use crate::news::TOPICS;
use crate::{text, viz};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub inference: String,
    pub embeddings: String,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let inference = if state.inference.is_available() {
        "available"
    } else {
        "unavailable"
    };
    let embeddings = if state.clusterer.has_embeddings() {
        "available"
    } else {
        "unavailable"
    };
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        inference: inference.to_string(),
        embeddings: embeddings.to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
}

pub async fn topics() -> Json<TopicsResponse> {
    Json(TopicsResponse {
        topics: TOPICS.iter().map(|t| t.to_string()).collect(),
    })
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page_size: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct TopicResponse {
    pub topic: String,
    pub articles: Vec<Article>,
    pub count: usize,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub async fn topic_news(
    State(state): State<AppState>,
    Path(topic): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<TopicResponse>> {
    let page_size = query
        .page_size
        .unwrap_or(state.config.news.default_page_size);
    let articles = state.news.top_headlines(&topic, page_size).await?;

    if articles.is_empty() {
        return Ok(Json(TopicResponse {
            topic,
            articles: Vec::new(),
            count: 0,
            timestamp: Utc::now().to_rfc3339(),
            message: Some("No news found for this topic".to_string()),
        }));
    }

    let processed = analyze_batch(&state, articles).await;
    Ok(Json(TopicResponse {
        topic,
        count: processed.len(),
        articles: processed,
        timestamp: Utc::now().to_rfc3339(),
        message: None,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    pub page_size: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub articles: Vec<Article>,
    pub count: usize,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub async fn search_news(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    let page_size = query
        .page_size
        .unwrap_or(state.config.news.default_page_size);
    let articles = state.news.search(&query.q, page_size).await?;

    if articles.is_empty() {
        return Ok(Json(SearchResponse {
            query: query.q,
            articles: Vec::new(),
            count: 0,
            timestamp: Utc::now().to_rfc3339(),
            message: Some("No news found for this query".to_string()),
        }));
    }

    let processed = analyze_batch(&state, articles).await;
    Ok(Json(SearchResponse {
        query: query.q,
        count: processed.len(),
        articles: processed,
        timestamp: Utc::now().to_rfc3339(),
        message: None,
    }))
}

/// Analyze each fetched article in turn. Articles left empty by
/// normalization are dropped; per-article analysis itself never fails.
async fn analyze_batch(state: &AppState, articles: Vec<Article>) -> Vec<Article> {
    let mut processed = Vec::with_capacity(articles.len());
    for mut article in articles {
        if text::normalize(article.body()).is_empty() {
            continue;
        }
        state.pipeline.analyze_article(&mut article).await;
        processed.push(article);
    }
    processed
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub texts: Vec<String>,
    pub max_length: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summaries: Vec<String>,
}

pub async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>> {
    if request.texts.is_empty() {
        return Err(NewsScopeError::Validation("No texts provided".to_string()));
    }
    let summaries = state
        .summarizer
        .summarize(&request.texts, request.max_length)
        .await;
    Ok(Json(SummarizeResponse { summaries }))
}

#[derive(Debug, Serialize)]
pub struct JoinedSummaryResponse {
    pub summary: String,
}

pub async fn summarize_joined(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<JoinedSummaryResponse>> {
    if request.texts.is_empty() {
        return Err(NewsScopeError::Validation("No texts provided".to_string()));
    }
    let summary = state
        .summarizer
        .summarize_joined(&request.texts, request.max_length)
        .await;
    Ok(Json(JoinedSummaryResponse { summary }))
}

#[derive(Debug, Deserialize)]
pub struct ClusterRequest {
    #[serde(default)]
    pub texts: Vec<String>,
    pub n_clusters: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ClusterResponse {
    pub clusters: ClusterAssignment,
}

pub async fn cluster(
    State(state): State<AppState>,
    Json(request): Json<ClusterRequest>,
) -> Result<Json<ClusterResponse>> {
    if request.texts.is_empty() {
        return Err(NewsScopeError::Validation("No texts provided".to_string()));
    }
    let n_clusters = request
        .n_clusters
        .unwrap_or(state.config.analysis.default_clusters);
    if n_clusters == 0 {
        return Err(NewsScopeError::Validation(
            "n_clusters must be at least 1".to_string(),
        ));
    }
    let clusters = state.clusterer.cluster(&request.texts, n_clusters).await;
    Ok(Json(ClusterResponse { clusters }))
}

#[derive(Debug, Deserialize)]
pub struct WordCloudRequest {
    #[serde(default)]
    pub texts: Vec<String>,
}

pub async fn visualize_wordcloud(
    State(state): State<AppState>,
    Json(request): Json<WordCloudRequest>,
) -> Json<viz::WordCloudPayload> {
    Json(viz::wordcloud(
        &request.texts,
        state.config.analysis.keyword_top_n,
    ))
}

#[derive(Debug, Deserialize)]
pub struct ArticlesRequest {
    #[serde(default)]
    pub articles: Vec<Article>,
}

pub async fn visualize_heatmap(
    Json(request): Json<ArticlesRequest>,
) -> Json<viz::HeatmapPayload> {
    let scores: Vec<f64> = request
        .articles
        .iter()
        .map(|a| a.analysis.as_ref().map(|r| r.sentiment.score).unwrap_or(0.0))
        .collect();
    Json(viz::heatmap(&scores))
}

pub async fn visualize_network(Json(request): Json<ArticlesRequest>) -> Json<ContentGraph> {
    if request.articles.is_empty() {
        return Json(ContentGraph::new());
    }
    let graph = ContentGraphBuilder::build(&request.articles);
    Json(viz::network(&graph))
}
