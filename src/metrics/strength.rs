//! Weighted degree (strength)

use crate::graph::{NodeId, WeightedGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Map each node to the sum of the weights of its incident edges.
///
/// A self-loop contributes its weight once. Isolated nodes map to 0.
pub fn compute_strength(graph: &WeightedGraph) -> HashMap<NodeId, f64> {
    let mut strength = vec![0.0; graph.node_count()];

    for edge in graph.graph.edge_references() {
        let u = edge.source().index();
        let v = edge.target().index();
        let w = *edge.weight();
        strength[u] += w;
        if u != v {
            strength[v] += w;
        }
    }

    graph.nodes().cloned().zip(strength).collect()
}
