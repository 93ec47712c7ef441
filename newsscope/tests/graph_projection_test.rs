use newsscope::analysis::ContentGraphBuilder;
use newsscope::models::{AnalysisRecord, Article, EntityMention, GraphNodeType};

fn analyzed_article(title: &str, entities: &[(&str, &str)]) -> Article {
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
fn shared_entity_yields_one_node_and_two_edges() {
    let articles = vec![
        analyzed_article("NASA confirms launch window", &[("NASA", "ORG")]),
        analyzed_article("Senate debates NASA budget", &[("NASA", "ORG")]),
    ];

    let graph = ContentGraphBuilder::build(&articles);

    let nasa_nodes: Vec<_> = graph
        .nodes
        .iter()
        .filter(|n| n.id == "entity_NASA")
        .collect();
    assert_eq!(nasa_nodes.len(), 1);
    assert_eq!(nasa_nodes[0].node_type, GraphNodeType::Entity);
    assert_eq!(graph.degree("entity_NASA"), 2);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn graph_serializes_d3_compatible_shape() {
    let articles = vec![analyzed_article("Launch", &[("NASA", "ORG")])];
    let graph = ContentGraphBuilder::build(&articles);

    let json = serde_json::to_value(&graph).unwrap();
    assert!(json.get("nodes").is_some());
    assert!(json.get("links").is_some());
    assert_eq!(json["nodes"][0]["type"], "article");
    assert_eq!(json["nodes"][0]["id"], "article_0");
}

#[test]
fn dense_batches_keep_full_graph_until_display_pruning() {
    // 40 articles each mentioning one common entity plus a unique one.
    let articles: Vec<Article> = (0..40)
        .map(|i| {
            let unique = format!("Entity{i}");
            analyzed_article(&format!("Story {i}"), &[("Reuters", "ORG"), (&unique, "ORG")])
        })
        .collect();

    // The builder preserves every article and entity node.
    let graph = ContentGraphBuilder::build(&articles);
    assert_eq!(graph.node_count(), 81);

    // Display-side pruning trims to the highest-degree nodes.
    let trimmed = newsscope::viz::network(&graph);
    assert!(trimmed.node_count() <= 30);
    // The hub entity survives pruning.
    assert!(trimmed.nodes.iter().any(|n| n.id == "entity_Reuters"));
}
