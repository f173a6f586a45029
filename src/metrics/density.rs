//! Intra- and inter-community edge densities

use crate::graph::{NodeId, WeightedGraph};
use crate::metrics::community::Partition;
use itertools::Itertools;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Unweighted densities over the communities of a partition.
///
/// `intra` has one value per community, in order of first appearance in the
/// partition. `inter` has one value per unordered pair of distinct communities,
/// enumerated as combinations in that same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityDensities {
    pub intra: Vec<f64>,
    pub inter: Vec<f64>,
}

impl From<CommunityDensities> for (Vec<f64>, Vec<f64>) {
    fn from(densities: CommunityDensities) -> Self {
        (densities.intra, densities.inter)
    }
}

/// Members of one community resolved against the graph
struct Community<'a> {
    /// Partition entries, including ids the graph does not know
    size: usize,
    /// Members present in the graph
    present: Vec<NodeIndex>,
    set: HashSet<&'a NodeId>,
}

/// Compute intra- and inter-community densities of `partition` on `graph`.
///
/// Intra density of a community whose induced subgraph has `n` nodes and `m`
/// edges is `2m / (n(n-1))`, or 0 when `n <= 1`. Members unknown to the graph
/// are not part of the induced subgraph. Inter density of a pair is the number
/// of edges joining them divided by `|C1| * |C2|`, counting every partition
/// entry. Graph nodes absent from the partition belong to no community.
pub fn community_densities(graph: &WeightedGraph, partition: &Partition) -> CommunityDensities {
    let communities: Vec<Community> = partition
        .communities()
        .into_iter()
        .map(|(_, members)| Community {
            size: members.len(),
            present: members.iter().filter_map(|id| graph.node_index(id)).collect(),
            set: members.into_iter().collect(),
        })
        .collect();

    let intra = communities
        .iter()
        .map(|community| {
            let n = community.present.len();
            if n <= 1 {
                return 0.0;
            }
            let m = induced_edge_count(graph, community);
            2.0 * m as f64 / (n * (n - 1)) as f64
        })
        .collect();

    let inter = communities
        .iter()
        .tuple_combinations()
        .map(|(c1, c2)| {
            let edges_between = edges_between(graph, c1, c2);
            edges_between as f64 / (c1.size * c2.size) as f64
        })
        .collect();

    CommunityDensities { intra, inter }
}

/// Edges with both endpoints in `community`, self-loops included, each counted once
fn induced_edge_count(graph: &WeightedGraph, community: &Community) -> usize {
    let mut count = 0;
    for &u in &community.present {
        for v in graph.graph.neighbors(u) {
            if v.index() >= u.index() && community.set.contains(&graph.graph[v]) {
                count += 1;
            }
        }
    }
    count
}

/// For every member of `c1`, count neighbours that fall in `c2`
fn edges_between(graph: &WeightedGraph, c1: &Community, c2: &Community) -> usize {
    c1.present
        .iter()
        .map(|&u| {
            graph
                .graph
                .neighbors(u)
                .filter(|&v| c2.set.contains(&graph.graph[v]))
                .count()
        })
        .sum()
}
