//! Dense weighted network used by the modularity optimizers

use crate::graph::{EdgeWeighting, WeightedGraph};
use std::collections::{BTreeMap, HashMap};

/// Position-indexed view of a graph with precomputed weighted degrees.
///
/// `adjacency[i]` lists every neighbour `j != i` once; self-loop weight is kept
/// apart in `self_loops` and counts twice towards a node's degree.
#[derive(Debug, Clone)]
pub(crate) struct Network {
    pub adjacency: Vec<Vec<(usize, f64)>>,
    pub self_loops: Vec<f64>,
    pub degrees: Vec<f64>,
    /// Sum of edge weights, each edge once (m)
    pub total_weight: f64,
}

impl Network {
    pub fn from_graph(graph: &WeightedGraph, weighting: EdgeWeighting) -> Self {
        let (adjacency, self_loops) = graph.dense_adjacency(weighting);
        Self::from_parts(adjacency, self_loops)
    }

    pub fn from_parts(adjacency: Vec<Vec<(usize, f64)>>, self_loops: Vec<f64>) -> Self {
        let degrees: Vec<f64> = adjacency
            .iter()
            .zip(&self_loops)
            .map(|(neighbors, &sl)| neighbors.iter().map(|&(_, w)| w).sum::<f64>() + 2.0 * sl)
            .collect();
        let total_weight = degrees.iter().sum::<f64>() / 2.0;

        Self {
            adjacency,
            self_loops,
            degrees,
            total_weight,
        }
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Newman modularity of the labelling produced by `community_of`.
    ///
    /// Nodes labelled `None` belong to no community and add nothing.
    pub fn modularity<F>(&self, community_of: F, resolution: f64) -> f64
    where
        F: Fn(usize) -> Option<usize>,
    {
        let m = self.total_weight;
        if m == 0.0 {
            return 0.0;
        }

        // community -> (internal weight, degree sum)
        let mut sums: HashMap<usize, (f64, f64)> = HashMap::new();
        for i in 0..self.len() {
            let Some(c) = community_of(i) else {
                continue;
            };
            let entry = sums.entry(c).or_insert((0.0, 0.0));
            entry.0 += self.self_loops[i];
            entry.1 += self.degrees[i];
            for &(j, w) in &self.adjacency[i] {
                if j > i && community_of(j) == Some(c) {
                    entry.0 += w;
                }
            }
        }

        sums.values()
            .map(|&(internal, degree)| {
                internal / m - resolution * (degree / (2.0 * m)).powi(2)
            })
            .sum()
    }

    /// Collapse each community into a single node.
    ///
    /// `labels` must be contiguous in `0..count`. Edges inside a community
    /// become self-loop weight on the new node.
    pub fn aggregate(&self, labels: &[usize], count: usize) -> Network {
        let mut self_loops = vec![0.0; count];
        let mut weights: Vec<BTreeMap<usize, f64>> = vec![BTreeMap::new(); count];

        for i in 0..self.len() {
            let a = labels[i];
            self_loops[a] += self.self_loops[i];

            for &(j, w) in &self.adjacency[i] {
                if j < i {
                    continue;
                }
                let b = labels[j];
                if a == b {
                    self_loops[a] += w;
                } else {
                    *weights[a].entry(b).or_insert(0.0) += w;
                    *weights[b].entry(a).or_insert(0.0) += w;
                }
            }
        }

        let adjacency = weights
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();

        Network::from_parts(adjacency, self_loops)
    }
}

/// Relabel `communities` to `0..count` in order of first appearance
pub(crate) fn renumber(communities: &[usize]) -> (Vec<usize>, usize) {
    let mut mapping: HashMap<usize, usize> = HashMap::new();
    let labels = communities
        .iter()
        .map(|&c| {
            let next = mapping.len();
            *mapping.entry(c).or_insert(next)
        })
        .collect();
    (labels, mapping.len())
}
