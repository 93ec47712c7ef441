use std::sync::Arc;

use crate::config::InferenceConfig;
use crate::error::{NewsScopeError, Result};
use crate::inference::api::{ClassScore, EntitySpan, InferenceApiClient, TaskParameters};

/// Shared read-only handle to the model inference service.
///
/// Availability is decided once at construction: no configured endpoint
/// means every call answers `InferenceUnavailable`, which each analysis
/// component treats as "take the next fallback tier". Per-call failures do
/// not flip availability; a loaded capability stays enabled for future
/// calls.
#[derive(Debug, Clone)]
pub struct InferenceProvider {
    client: Option<Arc<InferenceApiClient>>,
    reason: String,
}

impl InferenceProvider {
    pub fn new(config: Option<&InferenceConfig>) -> Self {
        let Some(config) = config else {
            return Self::unavailable("No inference service configured");
        };

        match InferenceApiClient::new(config) {
            Ok(client) => Self {
                client: Some(Arc::new(client)),
                reason: String::new(),
            },
            Err(e) => {
                tracing::warn!("Inference client init failed: {e}");
                Self::unavailable(&e.to_string())
            }
        }
    }

    pub fn unavailable(reason: &str) -> Self {
        Self {
            client: None,
            reason: reason.to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.client.is_some()
    }

    fn client(&self) -> Result<&InferenceApiClient> {
        self.client
            .as_deref()
            .ok_or_else(|| NewsScopeError::InferenceUnavailable(self.reason.clone()))
    }

    pub async fn summarize(
        &self,
        model: &str,
        text: &str,
        max_length: u32,
        min_length: u32,
    ) -> Result<String> {
        let parameters = TaskParameters {
            max_length: Some(max_length),
            min_length: Some(min_length),
            do_sample: Some(false),
            ..Default::default()
        };
        self.client()?.summarization(model, text, &parameters).await
    }

    pub async fn generate(
        &self,
        model: &str,
        text: &str,
        max_new_tokens: u32,
        num_beams: u32,
    ) -> Result<String> {
        let parameters = TaskParameters {
            max_new_tokens: Some(max_new_tokens),
            num_beams: Some(num_beams),
            ..Default::default()
        };
        self.client()?.text2text(model, text, &parameters).await
    }

    pub async fn entities(&self, model: &str, text: &str) -> Result<Vec<EntitySpan>> {
        self.client()?.token_classification(model, text).await
    }

    pub async fn classify(&self, model: &str, text: &str) -> Result<ClassScore> {
        self.client()?.text_classification(model, text).await
    }
}
