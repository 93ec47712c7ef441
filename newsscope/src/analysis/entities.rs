use crate::inference::InferenceProvider;
use crate::models::EntityMention;

/// Named-entity extraction over a batch of texts. Fails open: any error,
/// whether an unavailable capability or a mid-batch failure, yields an
/// empty mention list for every input rather than propagating.
pub struct EntityExtractor {
    inference: InferenceProvider,
    model: String,
}

impl EntityExtractor {
    pub fn new(inference: InferenceProvider, model: &str) -> Self {
        Self {
            inference,
            model: model.to_string(),
        }
    }

    pub async fn extract(&self, texts: &[String]) -> Vec<Vec<EntityMention>> {
        match self.try_extract(texts).await {
            Ok(mentions) => mentions,
            Err(e) => {
                tracing::warn!("Entity extraction failed, returning empty mentions: {e}");
                vec![Vec::new(); texts.len()]
            }
        }
    }

    async fn try_extract(&self, texts: &[String]) -> crate::error::Result<Vec<Vec<EntityMention>>> {
        let mut all = Vec::with_capacity(texts.len());
        for text in texts {
            if text.trim().is_empty() {
                all.push(Vec::new());
                continue;
            }
            let spans = self.inference.entities(&self.model, text).await?;
            all.push(
                spans
                    .into_iter()
                    .map(|span| EntityMention {
                        text: span.word,
                        label: span.entity_group,
                    })
                    .collect(),
            );
        }
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_capability_fails_open() {
        let extractor = EntityExtractor::new(InferenceProvider::unavailable("test"), "ner");
        let texts = vec!["NASA launched a rocket.".to_string(), "Hello.".to_string()];
        let mentions = extractor.extract(&texts).await;
        assert_eq!(mentions.len(), 2);
        assert!(mentions.iter().all(|m| m.is_empty()));
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let extractor = EntityExtractor::new(InferenceProvider::unavailable("test"), "ner");
        let mentions = extractor.extract(&[]).await;
        assert!(mentions.is_empty());
    }
}
