//! JSON file handling for graph data

use crate::config::Config;
use crate::error::{Error, Result};
use crate::graph::{GraphBuilder, NodeId, WeightedGraph};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One `{source, target, weight}` record of a graph document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

/// Top-level `{"nodes": [...], "edges": [...]}` document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// Build a graph keeping only edges with `weight >= weight_min`
    pub fn into_graph(self, weight_min: f64) -> WeightedGraph {
        let mut builder = GraphBuilder::with_capacity(self.nodes.len());

        // Declared nodes first so isolated ones survive the threshold
        for id in self.nodes {
            builder.add_node(id);
        }

        let mut dropped = 0usize;
        for edge in self.edges {
            if edge.weight >= weight_min {
                builder.add_edge(edge.source, edge.target, edge.weight);
            } else {
                dropped += 1;
            }
        }

        log::debug!("Dropped {} edges below weight {}", dropped, weight_min);

        builder.build()
    }
}

/// Load a graph document from `path`, dropping edges lighter than `weight_min`
pub fn load_graph(path: impl AsRef<Path>, weight_min: f64) -> Result<WeightedGraph> {
    let path = path.as_ref();
    log::info!("Reading graph file: {}", path.display());

    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let graph = parse_graph(&contents, weight_min)?;

    log::info!(
        "Loaded graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Load a graph using the threshold from `config`
pub fn load_graph_with_config(path: impl AsRef<Path>, config: &Config) -> Result<WeightedGraph> {
    load_graph(path, config.weight_min)
}

/// Parse an in-memory graph document
pub fn parse_graph(contents: &str, weight_min: f64) -> Result<WeightedGraph> {
    let document: GraphDocument = serde_json::from_str(contents)?;
    Ok(document.into_graph(weight_min))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "nodes": ["a", "b", "c", "d"],
        "edges": [
            {"source": "a", "target": "b", "weight": 3},
            {"source": "b", "target": "c", "weight": 1},
            {"source": "c", "target": "d", "weight": 0.5}
        ]
    }"#;

    #[test]
    fn test_threshold_is_inclusive() {
        let g = parse_graph(DOC, 1.0).unwrap();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edge_weight(&"b".into(), &"c".into()), Some(1.0));
        assert_eq!(g.edge_weight(&"c".into(), &"d".into()), None);
    }

    #[test]
    fn test_isolated_nodes_kept() {
        let g = parse_graph(DOC, 10.0).unwrap();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_undeclared_endpoint_is_created() {
        let doc = r#"{"nodes": [1], "edges": [{"source": 1, "target": 2, "weight": 5}]}"#;
        let g = parse_graph(doc, 1.0).unwrap();
        assert!(g.contains_node(&NodeId::Int(2)));
        assert_eq!(g.edge_weight(&NodeId::Int(1), &NodeId::Int(2)), Some(5.0));
    }

    #[test]
    fn test_missing_key_is_json_error() {
        let doc = r#"{"nodes": ["a"]}"#;
        assert!(matches!(parse_graph(doc, 1.0), Err(Error::Json(_))));

        let doc = r#"{"nodes": ["a", "b"], "edges": [{"source": "a", "target": "b"}]}"#;
        assert!(matches!(parse_graph(doc, 1.0), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_graph("/definitely/not/here.json", 1.0).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(err.to_string(), "File not found: /definitely/not/here.json");
    }
}
