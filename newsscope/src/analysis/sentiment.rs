use serde_json::json;

use crate::inference::InferenceProvider;
use crate::models::{SentimentLabel, SentimentResult};

use super::lexicon::SentimentLexicon;

const POSITIVE_THRESHOLD: f64 = 0.05;
const NEGATIVE_THRESHOLD: f64 = -0.05;
const TRANSFORMER_INPUT_CAP: usize = 512;

/// Per-batch sentiment scoring ladder: lexicon first, transformer
/// classifier when the lexicon is unavailable, constant neutral last.
/// The tier is picked once per call; every input always gets a result.
pub struct SentimentScorer {
    lexicon: Option<SentimentLexicon>,
    inference: InferenceProvider,
    model: String,
}

impl SentimentScorer {
    pub fn new(inference: InferenceProvider, model: &str) -> Self {
        Self {
            lexicon: Some(SentimentLexicon::new()),
            inference,
            model: model.to_string(),
        }
    }

    /// Scorer without the lexicon tier, exercising the transformer and
    /// neutral fallbacks.
    pub fn without_lexicon(inference: InferenceProvider, model: &str) -> Self {
        Self {
            lexicon: None,
            inference,
            model: model.to_string(),
        }
    }

    pub async fn score(&self, texts: &[String]) -> Vec<SentimentResult> {
        if let Some(lexicon) = &self.lexicon {
            return texts.iter().map(|t| Self::lexicon_result(lexicon, t)).collect();
        }

        if self.inference.is_available() {
            return self.transformer_batch(texts).await;
        }

        vec![SentimentResult::neutral(); texts.len()]
    }

    fn lexicon_result(lexicon: &SentimentLexicon, text: &str) -> SentimentResult {
        let scores = lexicon.score(text);
        SentimentResult {
            label: label_for(scores.compound),
            score: scores.compound,
            detail: Some(json!({
                "pos": scores.positive,
                "neg": scores.negative,
                "neu": scores.neutral,
                "compound": scores.compound,
            })),
        }
    }

    async fn transformer_batch(&self, texts: &[String]) -> Vec<SentimentResult> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            let truncated: String = text.chars().take(TRANSFORMER_INPUT_CAP).collect();
            let result = match self.inference.classify(&self.model, &truncated).await {
                Ok(class) => {
                    let label = match class.label.to_uppercase().as_str() {
                        "POSITIVE" => SentimentLabel::Positive,
                        "NEGATIVE" => SentimentLabel::Negative,
                        _ => SentimentLabel::Neutral,
                    };
                    SentimentResult {
                        label,
                        score: class.score,
                        detail: None,
                    }
                }
                Err(e) => {
                    tracing::warn!("Transformer sentiment failed: {e}");
                    SentimentResult::neutral()
                }
            };
            results.push(result);
        }
        results
    }
}

fn label_for(compound: f64) -> SentimentLabel {
    if compound >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
