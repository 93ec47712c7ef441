use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Graph node types for visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphNodeType {
    Article,
    Entity,
}

/// A node in the article/entity content graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    /// `article_{index}` or `entity_{surface text}`.
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: GraphNodeType,
    /// Article title (article nodes only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Entity surface form (entity nodes only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Entity type tag, e.g. PERSON/ORG (entity nodes only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

/// An undirected edge between an article node and an entity node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

/// Bipartite article/entity graph. Explicit node and edge lists; nodes are
/// unique by id and parallel edges collapse, so repeated mentions of the
/// same entity within one article produce a single edge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentGraph {
    pub nodes: Vec<GraphNode>,
    /// Named "links" on the wire for D3.js compatibility.
    pub links: Vec<GraphEdge>,
}

impl ContentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, keeping the first occurrence of an id. Entity nodes
    /// are keyed purely by surface text, so identical text with different
    /// type tags collapses into the first-seen node.
    pub fn add_node(&mut self, node: GraphNode) {
        if !self.nodes.iter().any(|n| n.id == node.id) {
            self.nodes.push(node);
        }
    }

    /// Insert an undirected edge with set semantics.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        let exists = self.links.iter().any(|e| {
            (e.source == source && e.target == target)
                || (e.source == target && e.target == source)
        });
        if !exists {
            self.links.push(GraphEdge {
                source: source.to_string(),
                target: target.to_string(),
            });
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.links.len()
    }

    pub fn degree(&self, id: &str) -> usize {
        self.links
            .iter()
            .filter(|e| e.source == id || e.target == id)
            .count()
    }

    /// Subgraph of the `n` highest-degree nodes, used to declutter the
    /// network visualization. Edges survive only when both endpoints are
    /// kept. Node order is preserved from the original graph.
    pub fn top_by_degree(&self, n: usize) -> ContentGraph {
        let mut degrees: HashMap<&str, usize> = HashMap::new();
        for edge in &self.links {
            *degrees.entry(edge.source.as_str()).or_insert(0) += 1;
            *degrees.entry(edge.target.as_str()).or_insert(0) += 1;
        }

        let mut ranked: Vec<&GraphNode> = self.nodes.iter().collect();
        ranked.sort_by(|a, b| {
            let da = degrees.get(a.id.as_str()).copied().unwrap_or(0);
            let db = degrees.get(b.id.as_str()).copied().unwrap_or(0);
            db.cmp(&da)
        });
        let keep: HashSet<&str> = ranked.iter().take(n).map(|n| n.id.as_str()).collect();

        let nodes = self
            .nodes
            .iter()
            .filter(|n| keep.contains(n.id.as_str()))
            .cloned()
            .collect();
        let links = self
            .links
            .iter()
            .filter(|e| keep.contains(e.source.as_str()) && keep.contains(e.target.as_str()))
            .cloned()
            .collect();

        ContentGraph { nodes, links }
    }
}

impl GraphNode {
    pub fn article(index: usize, title: &str) -> Self {
        Self {
            id: format!("article_{index}"),
            node_type: GraphNodeType::Article,
            title: Some(title.to_string()),
            label: None,
            entity_type: None,
        }
    }

    pub fn entity(text: &str, entity_type: &str) -> Self {
        Self {
            id: format!("entity_{text}"),
            node_type: GraphNodeType::Entity,
            title: None,
            label: Some(text.to_string()),
            entity_type: Some(entity_type.to_string()),
        }
    }
}
