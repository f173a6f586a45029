//! Graph construction module

use crate::graph::{NodeId, WeightedGraph};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// Builder for incrementally constructing a WeightedGraph
pub struct GraphBuilder {
    /// Graph under construction
    graph: UnGraph<NodeId, f64>,

    /// Mapping from node IDs to node indices
    id_to_index: HashMap<NodeId, NodeIndex>,
}

impl GraphBuilder {
    /// Create a new graph builder with the given node capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(capacity, capacity),
            id_to_index: HashMap::with_capacity(capacity),
        }
    }

    /// Get or create a node index for the given ID
    pub fn add_node(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&idx) = self.id_to_index.get(&id) {
            return idx;
        }

        let idx = self.graph.add_node(id.clone());
        self.id_to_index.insert(id, idx);
        idx
    }

    /// Add an undirected edge, creating missing endpoints.
    ///
    /// An existing edge between the same pair keeps its place but takes the new weight.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: f64) {
        let src_idx = self.add_node(source);
        let dst_idx = self.add_node(target);
        self.graph.update_edge(src_idx, dst_idx, weight);
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Freeze the graph
    pub fn build(self) -> WeightedGraph {
        WeightedGraph {
            graph: self.graph,
            index: self.id_to_index,
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
