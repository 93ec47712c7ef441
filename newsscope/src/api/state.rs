use std::sync::Arc;

use crate::analysis::{AnalysisPipeline, ModelBackedSummarizer};
use crate::cluster::TopicClusterer;
use crate::config::Config;
use crate::embeddings::EmbeddingProvider;
use crate::inference::InferenceProvider;
use crate::news::NewsApiClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub news: NewsApiClient,
    pub inference: InferenceProvider,
    pub pipeline: Arc<AnalysisPipeline>,
    pub summarizer: Arc<ModelBackedSummarizer>,
    pub clusterer: Arc<TopicClusterer>,
}

impl AppState {
    pub fn new(
        config: Config,
        inference: InferenceProvider,
        embeddings: Option<EmbeddingProvider>,
    ) -> Self {
        let news = NewsApiClient::new(config.news.clone());
        let pipeline = Arc::new(AnalysisPipeline::new(inference.clone(), &config));
        let summarizer = Arc::new(ModelBackedSummarizer::new(
            inference.clone(),
            &config.summarizer,
        ));
        let clusterer = Arc::new(TopicClusterer::new(embeddings));

        Self {
            config: Arc::new(config),
            news,
            inference,
            pipeline,
            summarizer,
            clusterer,
        }
    }
}
