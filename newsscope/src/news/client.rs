use std::collections::HashSet;
use std::sync::OnceLock;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use regex::Regex;
use serde::Deserialize;

use crate::config::NewsConfig;
use crate::error::{NewsScopeError, Result};
use crate::models::Article;
use crate::news::cache::{ArticleCache, CACHE_VERSION};

/// Categories NewsAPI's /top-headlines endpoint understands natively.
const SUPPORTED_CATEGORIES: [&str; 7] = [
    "business",
    "entertainment",
    "general",
    "health",
    "science",
    "sports",
    "technology",
];

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-z0-9]+").unwrap())
}

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    status: String,
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Article>,
}

/// NewsAPI client with TTL-memoized fetches. Headline and search responses
/// for identical parameters are reused for the cache TTL, keeping the
/// analysis pipeline off the provider's rate limits.
#[derive(Clone)]
pub struct NewsApiClient {
    http: reqwest::Client,
    config: NewsConfig,
    cache: ArticleCache,
}

impl NewsApiClient {
    pub fn new(config: NewsConfig) -> Self {
        let cache = ArticleCache::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl_secs),
        );
        Self {
            http: reqwest::Client::new(),
            config,
            cache,
        }
    }

    /// Top headlines for a topic. Unsupported topics (world, politics)
    /// downgrade to `general` plus a keyword query, and empty headline
    /// results fall back to the broader /everything endpoint.
    pub async fn top_headlines(&self, category: &str, page_size: u32) -> Result<Vec<Article>> {
        let cat = category.trim().to_lowercase();
        let cache_key = format!("{CACHE_VERSION}:th:{cat}_{page_size}");
        if let Some(hit) = self.cache.get(&cache_key) {
            tracing::debug!(category = %cat, "Headline cache hit");
            return Ok(hit);
        }

        let page_size_s = page_size.to_string();
        let query;
        let mut params: Vec<(&str, &str)> = vec![
            ("apiKey", &self.config.api_key),
            ("pageSize", &page_size_s),
            ("language", "en"),
            ("sortBy", "publishedAt"),
            ("country", "us"),
        ];
        if SUPPORTED_CATEGORIES.contains(&cat.as_str()) {
            params.push(("category", &cat));
        } else {
            params.push(("category", "general"));
            query = if cat.is_empty() { "world" } else { cat.as_str() }.to_string();
            params.push(("q", &query));
        }

        let mut articles = self.fetch("top-headlines", &params).await?;

        if articles.is_empty() {
            articles = self.everything_fallback(&cat, page_size).await?;
        }

        self.cache.put(cache_key, articles.clone());
        Ok(articles)
    }

    async fn everything_fallback(&self, cat: &str, page_size: u32) -> Result<Vec<Article>> {
        let q = match cat {
            "world" => "world OR international OR global",
            "politics" => "politics OR government OR election",
            "science" => "science OR research",
            "health" => "health OR medicine",
            "sports" => "sports OR game",
            "" => "world",
            other => other,
        };
        let page_size_s = page_size.to_string();
        let params: Vec<(&str, &str)> = vec![
            ("apiKey", &self.config.api_key),
            ("q", q),
            ("language", "en"),
            ("pageSize", &page_size_s),
            ("sortBy", "publishedAt"),
        ];
        self.fetch("everything", &params).await
    }

    /// Free-text search over article titles. The raw query becomes a
    /// boolean title query (exact phrase OR all terms), results are kept
    /// only when their title contains every query token, ranked by
    /// exact-phrase, per-token and prefix hits, then trimmed to page_size.
    pub async fn search(&self, query: &str, page_size: u32) -> Result<Vec<Article>> {
        let q_norm = query.trim().to_lowercase();
        if q_norm.is_empty() {
            return Ok(Vec::new());
        }

        let cache_key = format!("{CACHE_VERSION}:search:{q_norm}::{page_size}");
        if let Some(hit) = self.cache.get(&cache_key) {
            tracing::debug!(query = %q_norm, "Search cache hit");
            return Ok(hit);
        }

        let terms: Vec<String> = word_regex()
            .find_iter(&q_norm)
            .map(|m| m.as_str().to_string())
            .collect();
        let phrase = if terms.len() > 1 {
            format!("\"{q_norm}\"")
        } else {
            q_norm.clone()
        };
        let and_terms = terms.join(" AND ");
        let boolean_q = if !phrase.is_empty() && !and_terms.is_empty() {
            format!("{phrase} OR {and_terms}")
        } else if !phrase.is_empty() {
            phrase
        } else {
            and_terms
        };
        // Over-fetch so the strict title filter still fills a page.
        let fetch_size = 100.min((page_size * 3).max(30));

        let from_date = (Utc::now() - ChronoDuration::days(self.config.search_days_back))
            .format("%Y-%m-%d")
            .to_string();
        let fetch_size_s = fetch_size.to_string();
        let params: Vec<(&str, &str)> = vec![
            ("apiKey", &self.config.api_key),
            ("q", &boolean_q),
            ("language", "en"),
            ("pageSize", &fetch_size_s),
            ("sortBy", "publishedAt"),
            ("from", &from_date),
            ("searchIn", "title"),
        ];

        let articles = self.fetch("everything", &params).await?;

        let key_words: HashSet<&str> = terms.iter().map(String::as_str).collect();
        let mut ranked: Vec<(i64, Article)> = articles
            .into_iter()
            .filter(|a| {
                let title_words = token_words(a.title.as_deref().unwrap_or(""));
                key_words.iter().all(|w| title_words.contains(*w))
            })
            .map(|a| (relevance(&a, &q_norm, &key_words), a))
            .collect();
        ranked.sort_by_key(|(score, _)| std::cmp::Reverse(*score));

        let trimmed: Vec<Article> = ranked
            .into_iter()
            .map(|(_, a)| a)
            .take(page_size as usize)
            .collect();

        self.cache.put(cache_key, trimmed.clone());
        Ok(trimmed)
    }

    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Vec<Article>> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let response = self.http.get(&url).query(params).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NewsScopeError::News(format!(
                "News API returned {status} for /{endpoint}"
            )));
        }

        let body: NewsApiResponse = response.json().await?;
        if body.status != "ok" {
            return Err(NewsScopeError::News(
                body.message
                    .unwrap_or_else(|| "API request failed".to_string()),
            ));
        }
        Ok(body.articles)
    }
}

fn token_words(text: &str) -> HashSet<String> {
    word_regex()
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

fn relevance(article: &Article, q_norm: &str, key_words: &HashSet<&str>) -> i64 {
    let title = article.title.as_deref().unwrap_or("").to_lowercase();
    let title_words = token_words(&title);
    let exact = if key_words.len() > 1 && title.contains(q_norm) {
        10
    } else {
        0
    };
    let hits = key_words
        .iter()
        .filter(|w| title_words.contains(**w))
        .count() as i64;
    let starts = if !key_words.is_empty() && title.starts_with(q_norm) {
        3
    } else {
        0
    };
    exact + hits * 2 + starts
}
