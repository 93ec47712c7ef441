//! Topic clustering over article texts with a three-tier degradation
//! ladder: semantic embeddings, TF-IDF vectors, then naive round-robin.

pub mod kmeans;
pub mod tfidf;

use std::collections::BTreeMap;

use crate::embeddings::EmbeddingProvider;

/// Cluster index -> article indices, every input index in exactly one
/// cluster.
pub type ClusterAssignment = BTreeMap<usize, Vec<usize>>;

const KMEANS_SEED: u64 = 42;
const TFIDF_MAX_FEATURES: usize = 1000;

/// Groups texts by topic. The embedding provider is decided at startup;
/// when it is absent or an embed call fails, clustering falls back to
/// TF-IDF vectors, and as a last resort to round-robin bucketing.
#[derive(Clone)]
pub struct TopicClusterer {
    embeddings: Option<EmbeddingProvider>,
}

impl TopicClusterer {
    pub fn new(embeddings: Option<EmbeddingProvider>) -> Self {
        Self { embeddings }
    }

    pub fn has_embeddings(&self) -> bool {
        self.embeddings.is_some()
    }

    pub async fn cluster(&self, texts: &[String], n_clusters: usize) -> ClusterAssignment {
        if texts.is_empty() {
            return ClusterAssignment::new();
        }

        let k = n_clusters.min(texts.len());

        if let Some(embeddings) = &self.embeddings {
            match embeddings.embed(texts.to_vec()).await {
                Ok(vectors) => {
                    let labels = kmeans::kmeans(&vectors, k, KMEANS_SEED);
                    return group(&labels);
                }
                Err(e) => {
                    tracing::warn!("Embedding clustering failed, trying TF-IDF: {e}");
                }
            }
        }

        let vectors = tfidf::vectors(texts, TFIDF_MAX_FEATURES);
        if vectors.iter().any(|v| !v.is_empty()) {
            let labels = kmeans::kmeans(&vectors, k, KMEANS_SEED);
            return group(&labels);
        }

        tracing::warn!("TF-IDF produced an empty vocabulary, using round-robin buckets");
        // Round-robin keeps the historical behavior of bucketing by the
        // requested cluster count without clamping to the text count.
        let mut clusters = ClusterAssignment::new();
        for i in 0..texts.len() {
            clusters.entry(i % n_clusters).or_default().push(i);
        }
        clusters
    }
}

fn group(labels: &[usize]) -> ClusterAssignment {
    let mut clusters = ClusterAssignment::new();
    for (i, &label) in labels.iter().enumerate() {
        clusters.entry(label).or_default().push(i);
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_empty_input_yields_empty_assignment() {
        let clusterer = TopicClusterer::new(None);
        let assignment = clusterer.cluster(&[], 5).await;
        assert!(assignment.is_empty());
    }

    #[tokio::test]
    async fn test_k_clamped_and_every_index_assigned_once() {
        let clusterer = TopicClusterer::new(None);
        let input = texts(&[
            "rockets launch into orbit today",
            "satellites orbit the planet quietly",
            "parliament debated the budget bill",
            "the budget vote passed narrowly",
            "bakers held a bread festival",
        ]);
        let assignment = clusterer.cluster(&input, 8).await;

        let mut seen: Vec<usize> = assignment.values().flatten().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        // Clamped tiers never produce more clusters than texts.
        assert!(assignment.len() <= 5);
        assert!(assignment.keys().all(|&c| c < 5));
    }

    #[tokio::test]
    async fn test_round_robin_fallback_uses_unclamped_cluster_count() {
        let clusterer = TopicClusterer::new(None);
        // Stopword-only texts defeat TF-IDF, forcing the final tier.
        let input = texts(&["the and of", "a an but", "is was were"]);
        let assignment = clusterer.cluster(&input, 5).await;

        let mut seen: Vec<usize> = assignment.values().flatten().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2]);
        // cluster_id = index % 5, so ids 0..=2 appear, each with one member.
        assert_eq!(assignment.len(), 3);
        for members in assignment.values() {
            assert_eq!(members.len(), 1);
        }
    }

    #[tokio::test]
    async fn test_deterministic_assignments() {
        let clusterer = TopicClusterer::new(None);
        let input = texts(&[
            "markets rallied on strong earnings",
            "stocks climbed after earnings beat",
            "volcano erupted near the coast",
            "lava flows reached the village",
        ]);
        let a = clusterer.cluster(&input, 2).await;
        let b = clusterer.cluster(&input, 2).await;
        assert_eq!(a, b);
    }
}
