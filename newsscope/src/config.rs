use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub news: NewsConfig,
    pub inference: Option<InferenceConfig>,
    pub summarizer: SummarizerConfig,
    pub classifier: ClassifierConfig,
    pub embeddings: EmbeddingsConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsConfig {
    pub api_key: String,
    pub base_url: String,
    pub cache_ttl_secs: u64,
    pub cache_capacity: usize,
    pub default_page_size: u32,
    pub search_days_back: i64,
}

/// Connection settings for the model inference service. Absent when no
/// endpoint is configured; every model-backed tier then reports itself
/// unavailable and the pipeline runs on its fallbacks.
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerConfig {
    pub model: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    pub model: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingsConfig {
    pub model: String,
    pub batch_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    pub sentiment_model: String,
    pub ner_model: String,
    pub keyword_top_n: usize,
    pub default_clusters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("NEWSSCOPE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("NEWSSCOPE_PORT", 8000),
            },
            news: NewsConfig {
                api_key: env::var("NEWS_API_KEY").unwrap_or_default(),
                base_url: env::var("NEWS_API_BASE_URL")
                    .unwrap_or_else(|_| "https://newsapi.org/v2".to_string()),
                cache_ttl_secs: parse_env_or("NEWS_CACHE_TTL_SECS", 900),
                cache_capacity: parse_env_or("NEWS_CACHE_CAPACITY", 128),
                default_page_size: parse_env_or("NEWS_PAGE_SIZE", 10),
                search_days_back: parse_env_or("NEWS_SEARCH_DAYS_BACK", 30),
            },
            inference: env::var("INFERENCE_BASE_URL").ok().map(|base_url| {
                InferenceConfig {
                    base_url,
                    api_key: env::var("INFERENCE_API_KEY").ok(),
                    timeout_secs: parse_env_or("INFERENCE_TIMEOUT", 30),
                    max_retries: parse_env_or("INFERENCE_MAX_RETRIES", 2),
                }
            }),
            summarizer: SummarizerConfig {
                model: env::var("SUMMARIZER_MODEL")
                    .unwrap_or_else(|_| "sshleifer/distilbart-cnn-12-6".to_string()),
                enabled: parse_env_or("ENABLE_ABSTRACTIVE", true),
            },
            classifier: ClassifierConfig {
                model: env::var("TITLE_CLASSIFIER_MODEL").unwrap_or_else(|_| {
                    "mrm8488/t5-base-finetuned-news-title-classification".to_string()
                }),
                enabled: parse_env_or("ENABLE_TITLE_CLASSIFIER", true),
            },
            embeddings: EmbeddingsConfig {
                model: env::var("EMBEDDING_MODEL")
                    .unwrap_or_else(|_| "all-MiniLM-L6-v2".to_string()),
                batch_size: parse_env_or("EMBEDDING_BATCH_SIZE", 64),
            },
            analysis: AnalysisConfig {
                sentiment_model: env::var("SENTIMENT_MODEL").unwrap_or_else(|_| {
                    "distilbert-base-uncased-finetuned-sst-2-english".to_string()
                }),
                ner_model: env::var("NER_MODEL")
                    .unwrap_or_else(|_| "dslim/bert-base-NER".to_string()),
                keyword_top_n: parse_env_or("KEYWORD_TOP_N", 20),
                default_clusters: parse_env_or("DEFAULT_CLUSTERS", 5),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
