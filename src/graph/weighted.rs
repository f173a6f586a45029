//! Undirected weighted graph representation

use crate::error::{Error, Result};
use crate::graph::NodeId;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How edge weights are read by the metric functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeWeighting {
    /// Use the `weight` stored on each edge
    #[default]
    Weighted,

    /// Treat every edge as weight 1
    Unweighted,
}

impl EdgeWeighting {
    /// Effective weight of an edge carrying `weight`
    pub fn apply(self, weight: f64) -> f64 {
        match self {
            EdgeWeighting::Weighted => weight,
            EdgeWeighting::Unweighted => 1.0,
        }
    }
}

/// Basic size statistics of a loaded graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub total_weight: f64,
    pub isolated_nodes: usize,
}

/// Undirected graph with at most one weighted edge per node pair.
///
/// Nodes keep their insertion order; every metric iterates them in that order.
/// The graph is read-only once built (see [`GraphBuilder`](crate::graph::builder::GraphBuilder)).
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    pub(crate) graph: UnGraph<NodeId, f64>,
    pub(crate) index: HashMap<NodeId, NodeIndex>,
}

impl WeightedGraph {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.graph.node_weights()
    }

    /// All edges as `(source, target, weight)`, each undirected edge once
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId, f64)> + '_ {
        self.graph
            .edge_references()
            .map(move |e| (&self.graph[e.source()], &self.graph[e.target()], *e.weight()))
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Weight of the edge between `a` and `b`, if any
    pub fn edge_weight(&self, a: &NodeId, b: &NodeId) -> Option<f64> {
        let a = *self.index.get(a)?;
        let b = *self.index.get(b)?;
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
    }

    /// Neighbours of `id` with the weight of the connecting edge
    pub fn neighbors(&self, id: &NodeId) -> Result<Vec<(&NodeId, f64)>> {
        let idx = self
            .node_index(id)
            .ok_or_else(|| Error::UnknownNode(id.to_string()))?;

        Ok(self
            .graph
            .edges(idx)
            .map(|e| {
                let other = if e.source() == idx { e.target() } else { e.source() };
                (&self.graph[other], *e.weight())
            })
            .collect())
    }

    /// Sum of all edge weights, each edge counted once
    pub fn total_weight(&self) -> f64 {
        self.graph.edge_weights().sum()
    }

    pub fn summary(&self) -> GraphSummary {
        let isolated_nodes = self
            .graph
            .node_indices()
            .filter(|&n| self.graph.edges(n).next().is_none())
            .count();

        GraphSummary {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            total_weight: self.total_weight(),
            isolated_nodes,
        }
    }

    pub(crate) fn node_index(&self, id: &NodeId) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Dense adjacency keyed by node position.
    ///
    /// Returns neighbour lists (self-loops excluded) and the self-loop weight per node.
    pub(crate) fn dense_adjacency(&self, weighting: EdgeWeighting) -> (Vec<Vec<(usize, f64)>>, Vec<f64>) {
        let n = self.node_count();
        let mut adjacency = vec![Vec::new(); n];
        let mut self_loops = vec![0.0; n];

        for edge in self.graph.edge_references() {
            let u = edge.source().index();
            let v = edge.target().index();
            let w = weighting.apply(*edge.weight());
            if u == v {
                self_loops[u] += w;
            } else {
                adjacency[u].push((v, w));
                adjacency[v].push((u, w));
            }
        }

        (adjacency, self_loops)
    }
}
