use crate::models::{Article, ContentGraph, GraphNode};

/// Projects analyzed articles onto a bipartite article/entity graph for the
/// network visualization.
pub struct ContentGraphBuilder;

impl ContentGraphBuilder {
    /// Build the graph from already-analyzed articles. Articles without an
    /// analysis record, or with no recognized entities, contribute an
    /// isolated article node. The full graph is returned; display-side
    /// degree pruning happens in the visualization layer.
    pub fn build(articles: &[Article]) -> ContentGraph {
        let mut graph = ContentGraph::new();

        for (index, article) in articles.iter().enumerate() {
            let title = article.title.as_deref().unwrap_or("Untitled");
            let article_node = GraphNode::article(index, title);
            let article_id = article_node.id.clone();
            graph.add_node(article_node);

            let Some(analysis) = &article.analysis else {
                continue;
            };
            for mention in &analysis.entities {
                let entity_node = GraphNode::entity(&mention.text, &mention.label);
                let entity_id = entity_node.id.clone();
                graph.add_node(entity_node);
                graph.add_edge(&article_id, &entity_id);
            }
        }

        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisRecord, EntityMention};

    fn article_with_entities(title: &str, entities: &[(&str, &str)]) -> Article {
        Article {
            title: Some(title.to_string()),
            analysis: Some(AnalysisRecord {
                entities: entities
                    .iter()
                    .map(|(text, label)| EntityMention {
                        text: text.to_string(),
                        label: label.to_string(),
                    })
                    .collect(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_shared_entity_links_both_articles() {
        let articles = vec![
            article_with_entities("Launch day", &[("NASA", "ORG")]),
            article_with_entities("Budget review", &[("NASA", "ORG"), ("Congress", "ORG")]),
        ];
        let graph = ContentGraphBuilder::build(&articles);

        // One shared entity node, two article nodes, one extra entity.
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.degree("entity_NASA"), 2);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_unanalyzed_article_stays_isolated() {
        let articles = vec![Article {
            title: Some("No analysis yet".to_string()),
            ..Default::default()
        }];
        let graph = ContentGraphBuilder::build(&articles);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_large_batch_keeps_every_article_node() {
        let articles: Vec<Article> = (0..40)
            .map(|i| article_with_entities(&format!("Story {i}"), &[("Reuters", "ORG")]))
            .collect();
        let graph = ContentGraphBuilder::build(&articles);

        let article_nodes = graph
            .nodes
            .iter()
            .filter(|n| n.id.starts_with("article_"))
            .count();
        assert_eq!(article_nodes, 40);
        assert_eq!(graph.node_count(), 41);
    }

    #[test]
    fn test_repeated_mention_is_one_edge() {
        let articles = vec![article_with_entities(
            "Double mention",
            &[("NASA", "ORG"), ("NASA", "ORG")],
        )];
        let graph = ContentGraphBuilder::build(&articles);
        assert_eq!(graph.edge_count(), 1);
    }
}
