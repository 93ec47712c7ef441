use crate::config::SummarizerConfig;
use crate::inference::InferenceProvider;
use crate::text::textrank;

const SNIPPET_CAP: usize = 280;
const SUMMARY_CAP: usize = 400;
const SENTENCE_FALLBACK_CAP: usize = 300;
const MIN_INPUT_CHARS: usize = 50;
const CHUNK_CHARS: usize = 1500;
const MULTI_DOC_MAX_LENGTH: u32 = 200;

/// Abstractive summarizer with a three-tier degradation ladder: model,
/// extractive TextRank, leading sentences. Never fails, only degrades.
pub struct ModelBackedSummarizer {
    inference: InferenceProvider,
    model: String,
    enabled: bool,
}

impl ModelBackedSummarizer {
    pub fn new(inference: InferenceProvider, config: &SummarizerConfig) -> Self {
        if !config.enabled {
            tracing::info!("Abstractive summarizer disabled by config, using extractive fallback");
        } else if !inference.is_available() {
            tracing::warn!(
                "Abstractive summarizer enabled but no inference service configured, \
                 using extractive fallback"
            );
        }
        Self {
            inference,
            model: config.model.clone(),
            enabled: config.enabled,
        }
    }

    fn model_ready(&self) -> bool {
        self.enabled && self.inference.is_available()
    }

    /// Summarize each text independently; one output per input, in order.
    /// `max_length` overrides the per-text dynamic target when given.
    pub async fn summarize(&self, texts: &[String], max_length: Option<u32>) -> Vec<String> {
        let mut summaries = Vec::with_capacity(texts.len());
        for text in texts {
            summaries.push(self.summarize_one(text, max_length).await);
        }
        summaries
    }

    async fn summarize_one(&self, text: &str, max_length: Option<u32>) -> String {
        if text.trim().len() < MIN_INPUT_CHARS {
            // Short input: a compact snippet beats a degenerate model call.
            return truncate(text, SNIPPET_CAP);
        }

        let word_count = text.split_whitespace().count() as u32;
        let dynamic_max = (word_count / 3).clamp(20, 130);
        let final_max = max_length.unwrap_or(dynamic_max);
        let min_length = 10.min(final_max.saturating_sub(1));

        if self.model_ready() {
            match self.model_summary(text, final_max, min_length).await {
                Ok(summary) => return truncate(&summary, SUMMARY_CAP),
                Err(e) => {
                    tracing::warn!("Summarization error, falling back to extractive: {e}");
                }
            }
        }

        let extractive = textrank::summarize(text, 3);
        if !extractive.is_empty() {
            return truncate(&extractive, SUMMARY_CAP);
        }
        truncate(&textrank::leading_sentences(text, 2), SENTENCE_FALLBACK_CAP)
    }

    /// One summary over all texts joined by a blank line, used by the
    /// standalone summarize endpoint for digest-style output.
    pub async fn summarize_joined(&self, texts: &[String], max_length: Option<u32>) -> String {
        let joined = texts.join("\n\n");
        let final_max = max_length.unwrap_or(MULTI_DOC_MAX_LENGTH);
        let min_length = 10.max(final_max / 4);

        if self.model_ready() {
            match self.model_summary(&joined, final_max, min_length).await {
                Ok(summary) => return summary,
                Err(e) => {
                    tracing::warn!("Multi-document summarization error: {e}");
                    return textrank::summarize(&joined, 3);
                }
            }
        }
        textrank::summarize(&joined, 4)
    }

    /// Model invocation with character chunking for long inputs: each
    /// chunk is summarized, then the joined chunk summaries are condensed
    /// once more.
    async fn model_summary(
        &self,
        text: &str,
        max_length: u32,
        min_length: u32,
    ) -> crate::error::Result<String> {
        if text.chars().count() <= CHUNK_CHARS {
            return self
                .inference
                .summarize(&self.model, text, max_length, min_length)
                .await;
        }

        let chars: Vec<char> = text.chars().collect();
        let mut chunk_summaries = Vec::new();
        for chunk in chars.chunks(CHUNK_CHARS) {
            let chunk: String = chunk.iter().collect();
            let summary = self
                .inference
                .summarize(&self.model, &chunk, max_length, min_length)
                .await?;
            chunk_summaries.push(summary);
        }
        let joined = chunk_summaries.join(" ");
        self.inference
            .summarize(&self.model, &joined, max_length, min_length)
            .await
    }
}

fn truncate(text: &str, cap: usize) -> String {
    text.chars().take(cap).collect()
}
