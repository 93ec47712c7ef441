//! Visualization payload builders. The service ships data, not pixels:
//! each builder returns a JSON-serializable payload the frontend renders.

use serde::Serialize;

use crate::models::{ContentGraph, KeywordCount};
use crate::text;

/// Node budget for the network view.
const NETWORK_NODE_LIMIT: usize = 30;

/// Weighted word list for a word cloud.
#[derive(Debug, Serialize)]
pub struct WordCloudPayload {
    pub words: Vec<KeywordCount>,
}

/// One sentiment column: score per article plus an axis label per row.
#[derive(Debug, Serialize)]
pub struct HeatmapPayload {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

/// Keyword weights over the combined text of a batch.
pub fn wordcloud(texts: &[String], top_n: usize) -> WordCloudPayload {
    let combined = texts.join(" ");
    WordCloudPayload {
        words: text::keywords(&combined, top_n),
    }
}

/// Per-article sentiment scores as a single heatmap column, labeled 1..n.
pub fn heatmap(scores: &[f64]) -> HeatmapPayload {
    HeatmapPayload {
        values: scores.to_vec(),
        labels: (1..=scores.len()).map(|i| i.to_string()).collect(),
    }
}

/// The article/entity graph trimmed for display.
pub fn network(graph: &ContentGraph) -> ContentGraph {
    graph.top_by_degree(NETWORK_NODE_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GraphNode;

    #[test]
    fn test_wordcloud_over_combined_texts() {
        let texts = vec![
            "rockets launch from florida".to_string(),
            "rockets return to florida".to_string(),
        ];
        let payload = wordcloud(&texts, 5);
        assert_eq!(payload.words[0].word, "rockets");
        assert_eq!(payload.words[0].count, 2);
    }

    #[test]
    fn test_heatmap_labels_match_values() {
        let payload = heatmap(&[0.5, -0.2, 0.0]);
        assert_eq!(payload.values.len(), 3);
        assert_eq!(payload.labels, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_network_trims_to_budget() {
        let mut graph = ContentGraph::new();
        for i in 0..40 {
            graph.add_node(GraphNode::article(i, "t"));
        }
        let trimmed = network(&graph);
        assert_eq!(trimmed.node_count(), 30);
    }
}
