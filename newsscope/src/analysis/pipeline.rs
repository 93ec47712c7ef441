use crate::analysis::classifier::TitleClassifier;
use crate::analysis::entities::EntityExtractor;
use crate::analysis::sentiment::SentimentScorer;
use crate::analysis::summarizer::ModelBackedSummarizer;
use crate::config::Config;
use crate::inference::InferenceProvider;
use crate::models::{AnalysisRecord, Article};
use crate::text;

/// Full per-article analysis: summary, entities, sentiment, keywords and an
/// optional category. Infallible by construction. Any stage that cannot
/// produce a real value leaves its field at the neutral default instead of
/// failing the article.
pub struct AnalysisPipeline {
    summarizer: ModelBackedSummarizer,
    entities: EntityExtractor,
    sentiment: SentimentScorer,
    classifier: Option<TitleClassifier>,
    keyword_top_n: usize,
}

impl AnalysisPipeline {
    pub fn new(inference: InferenceProvider, config: &Config) -> Self {
        Self {
            summarizer: ModelBackedSummarizer::new(inference.clone(), &config.summarizer),
            entities: EntityExtractor::new(inference.clone(), &config.analysis.ner_model),
            sentiment: SentimentScorer::new(inference.clone(), &config.analysis.sentiment_model),
            classifier: TitleClassifier::maybe_new(inference, &config.classifier),
            keyword_top_n: config.analysis.keyword_top_n,
        }
    }

    /// Analyze one article body. `title` feeds the category classifier only.
    pub async fn analyze(&self, title: &str, body: &str) -> AnalysisRecord {
        let text = text::normalize(body);
        if text.is_empty() {
            return AnalysisRecord::default();
        }

        let word_count = text.split_whitespace().count() as u32;
        let max_length = (word_count / 2).clamp(20, 130);

        let batch = vec![text.clone()];
        let summaries = self.summarizer.summarize(&batch, Some(max_length)).await;
        let summary = summaries.into_iter().next().unwrap_or_default();

        let entities = self
            .entities
            .extract(&batch)
            .await
            .into_iter()
            .next()
            .unwrap_or_default();

        let sentiment = self
            .sentiment
            .score(&batch)
            .await
            .into_iter()
            .next()
            .unwrap_or_default();

        let keywords = text::keywords(&text, self.keyword_top_n);

        let category = match &self.classifier {
            Some(classifier) => classifier.classify(title).await,
            None => None,
        };

        AnalysisRecord {
            summary,
            entities,
            sentiment,
            keywords,
            category,
        }
    }

    /// Analyze an article in place, normalizing its content field.
    pub async fn analyze_article(&self, article: &mut Article) {
        let body = article.body().to_string();
        let title = article.title.as_deref().unwrap_or("");
        let record = self.analyze(title, &body).await;
        article.content = Some(text::normalize(&body));
        article.timestamp = article.published_at.clone();
        article.analysis = Some(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentLabel;

    fn offline_pipeline() -> AnalysisPipeline {
        AnalysisPipeline::new(InferenceProvider::unavailable("test"), &Config::default())
    }

    #[tokio::test]
    async fn test_empty_body_yields_default_record() {
        let pipeline = offline_pipeline();
        let record = pipeline.analyze("Some title", "   ").await;
        assert_eq!(record, AnalysisRecord::default());
    }

    #[tokio::test]
    async fn test_offline_analysis_is_structurally_complete() {
        let pipeline = offline_pipeline();
        let record = pipeline
            .analyze(
                "Markets rally",
                "I love how the markets performed today. Investors celebrated record gains \
                 across every major index as confidence returned to the trading floor.",
            )
            .await;
        assert!(!record.summary.is_empty());
        assert_eq!(record.sentiment.label, SentimentLabel::Positive);
        assert!(!record.keywords.is_empty());
        assert!(record.category.is_none());
    }
}
