use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::InferenceConfig;
use crate::error::{NewsScopeError, Result};

/// Decoding parameters forwarded to the inference service. Serialized with
/// absent fields omitted so each task only sees what it understands.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_new_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_beams: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_sample: Option<bool>,
}

#[derive(Debug, Serialize)]
struct TaskRequest<'a> {
    inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<&'a TaskParameters>,
}

#[derive(Debug, Deserialize)]
struct SummaryOutput {
    summary_text: String,
}

#[derive(Debug, Deserialize)]
struct GeneratedOutput {
    generated_text: String,
}

/// One aggregated entity span from a token-classification model.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitySpan {
    pub entity_group: String,
    pub word: String,
    #[serde(default)]
    pub score: f64,
}

/// One label/score pair from a text-classification model.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassScore {
    pub label: String,
    pub score: f64,
}

/// HTTP client for a Hugging Face-style model inference service: one
/// endpoint per model id, task-shaped JSON in and out. Thin and stateless;
/// availability and fallback policy live in [`super::InferenceProvider`].
#[derive(Debug, Clone)]
pub struct InferenceApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    max_retries: u32,
}

impl InferenceApiClient {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                NewsScopeError::Inference(format!("Failed to create inference HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            max_retries: config.max_retries,
        })
    }

    pub async fn summarization(
        &self,
        model: &str,
        text: &str,
        parameters: &TaskParameters,
    ) -> Result<String> {
        let value = self.call(model, text, Some(parameters)).await?;
        let outputs: Vec<SummaryOutput> = serde_json::from_value(value)
            .map_err(|e| NewsScopeError::Inference(format!("Bad summarization response: {e}")))?;
        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or_else(|| NewsScopeError::Inference("Empty summarization response".to_string()))
    }

    pub async fn text2text(
        &self,
        model: &str,
        text: &str,
        parameters: &TaskParameters,
    ) -> Result<String> {
        let value = self.call(model, text, Some(parameters)).await?;
        let outputs: Vec<GeneratedOutput> = serde_json::from_value(value)
            .map_err(|e| NewsScopeError::Inference(format!("Bad generation response: {e}")))?;
        outputs
            .into_iter()
            .next()
            .map(|o| o.generated_text)
            .ok_or_else(|| NewsScopeError::Inference("Empty generation response".to_string()))
    }

    pub async fn token_classification(&self, model: &str, text: &str) -> Result<Vec<EntitySpan>> {
        let value = self.call(model, text, None).await?;
        serde_json::from_value(value)
            .map_err(|e| NewsScopeError::Inference(format!("Bad NER response: {e}")))
    }

    /// Returns the top label/score pair. Classification endpoints answer
    /// with one ranked list per input, so the shape is a nested array.
    pub async fn text_classification(&self, model: &str, text: &str) -> Result<ClassScore> {
        let value = self.call(model, text, None).await?;
        let ranked: Vec<Vec<ClassScore>> = serde_json::from_value(value)
            .map_err(|e| NewsScopeError::Inference(format!("Bad classification response: {e}")))?;
        ranked
            .into_iter()
            .next()
            .and_then(|scores| scores.into_iter().next())
            .ok_or_else(|| NewsScopeError::Inference("Empty classification response".to_string()))
    }

    async fn call(
        &self,
        model: &str,
        inputs: &str,
        parameters: Option<&TaskParameters>,
    ) -> Result<Value> {
        if inputs.trim().is_empty() {
            return Err(NewsScopeError::Validation(
                "Inference input cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/models/{}", self.base_url, model);
        let body = TaskRequest { inputs, parameters };

        let mut last_error: Option<NewsScopeError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay_ms = 100 * 2_u64.pow(attempt - 1);
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }

            let mut request = self.http.post(&url).json(&body);
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }

            let response = match request.send().await {
                Ok(response) => response,
                Err(e) => {
                    let mapped = NewsScopeError::Inference(format!("Request failed: {e}"));
                    if attempt < self.max_retries {
                        last_error = Some(mapped);
                        continue;
                    }
                    return Err(mapped);
                }
            };

            let status = response.status();
            match status {
                StatusCode::TOO_MANY_REQUESTS => {
                    return Err(NewsScopeError::InferenceRateLimit { retry_after: None });
                }
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    return Err(NewsScopeError::Inference(format!(
                        "Inference authentication failed: {status}"
                    )));
                }
                s if s.is_server_error() => {
                    let mapped =
                        NewsScopeError::Inference(format!("Inference service error: {status}"));
                    if attempt < self.max_retries {
                        last_error = Some(mapped);
                        continue;
                    }
                    return Err(mapped);
                }
                s if !s.is_success() => {
                    let detail = response.text().await.unwrap_or_default();
                    return Err(NewsScopeError::Inference(format!(
                        "Inference request rejected ({status}): {detail}"
                    )));
                }
                _ => {}
            }

            return response
                .json::<Value>()
                .await
                .map_err(|e| NewsScopeError::Inference(format!("Bad inference payload: {e}")));
        }

        Err(last_error
            .unwrap_or_else(|| NewsScopeError::Inference("Inference failed after retries".into())))
    }
}
