use crate::config::ClassifierConfig;
use crate::inference::InferenceProvider;
use crate::models::ClassificationResult;

const OUTPUT_TOKEN_BUDGET: u32 = 8;
const BEAM_COUNT: u32 = 4;

/// Optional text-to-text title classifier. Construction yields `None` when
/// the feature is switched off or the inference capability is missing at
/// startup; the pipeline then simply omits categories.
pub struct TitleClassifier {
    inference: InferenceProvider,
    model: String,
}

impl TitleClassifier {
    pub fn maybe_new(inference: InferenceProvider, config: &ClassifierConfig) -> Option<Self> {
        if !config.enabled {
            tracing::info!("Title classifier disabled by config");
            return None;
        }
        if !inference.is_available() {
            tracing::warn!("Title classifier enabled but no inference service configured, continuing without it");
            return None;
        }
        Some(Self {
            inference,
            model: config.model.clone(),
        })
    }

    /// Classify a title into a category label. A per-call failure returns
    /// `None`: the category is omitted and the analysis proceeds.
    pub async fn classify(&self, title: &str) -> Option<ClassificationResult> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let prompt = format!("news title: {title}");
        match self
            .inference
            .generate(&self.model, &prompt, OUTPUT_TOKEN_BUDGET, BEAM_COUNT)
            .await
        {
            Ok(raw) => Some(ClassificationResult {
                label: raw.trim().to_string(),
                raw,
            }),
            Err(e) => {
                tracing::warn!("Title classification error: {e}");
                None
            }
        }
    }
}
