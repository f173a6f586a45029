//! Greedy modularity maximization (Clauset, Newman & Moore 2004).
//!
//! Starts from singleton communities and repeatedly merges the connected pair
//! whose union increases modularity the most, stopping once every remaining
//! merge would lower it. Communities are returned largest first with
//! sequential ids.

use super::network::Network;
use super::{CommunityDetector, Partition};
use crate::error::Result;
use crate::graph::{EdgeWeighting, WeightedGraph};
use std::collections::BTreeMap;

/// Clauset-Newman-Moore agglomerative community detection
#[derive(Debug, Clone)]
pub struct GreedyModularity {
    resolution: f64,
    weighting: EdgeWeighting,
}

impl GreedyModularity {
    pub fn new() -> Self {
        Self {
            resolution: 1.0,
            weighting: EdgeWeighting::Weighted,
        }
    }

    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_weighting(mut self, weighting: EdgeWeighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Merge communities and return their member positions, unordered
    fn agglomerate(&self, net: &Network) -> Vec<Vec<usize>> {
        let n = net.len();
        let mut members: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
        if net.total_weight == 0.0 {
            return members;
        }

        let two_m = 2.0 * net.total_weight;
        let mut a: Vec<f64> = net.degrees.iter().map(|k| k / two_m).collect();

        // dq[i][j]: modularity change from merging communities i and j
        let mut dq: Vec<BTreeMap<usize, f64>> = vec![BTreeMap::new(); n];
        for i in 0..n {
            for &(j, w) in &net.adjacency[i] {
                dq[i].insert(j, 2.0 * (w / two_m - self.resolution * a[i] * a[j]));
            }
        }

        let mut alive = vec![true; n];
        loop {
            let mut best: Option<(f64, usize, usize)> = None;
            for i in (0..n).filter(|&i| alive[i]) {
                for (&j, &delta) in dq[i].range(i + 1..) {
                    if best.map_or(true, |(d, _, _)| delta > d) {
                        best = Some((delta, i, j));
                    }
                }
            }

            let Some((delta, i, j)) = best else {
                break;
            };
            if delta < 0.0 {
                break;
            }

            // Fold j into i
            let row_i = std::mem::take(&mut dq[i]);
            let row_j = std::mem::take(&mut dq[j]);
            let mut merged = BTreeMap::new();

            for (&k, &d) in row_i.iter().chain(row_j.iter()) {
                if k == i || k == j || merged.contains_key(&k) {
                    continue;
                }
                let value = match (row_i.get(&k), row_j.get(&k)) {
                    (Some(x), Some(y)) => x + y,
                    (Some(x), None) => x - 2.0 * self.resolution * a[j] * a[k],
                    // only j was adjacent to k; `d` comes from row_j
                    (None, _) => d - 2.0 * self.resolution * a[i] * a[k],
                };
                merged.insert(k, value);
            }

            for (&k, &value) in &merged {
                dq[k].remove(&j);
                dq[k].insert(i, value);
            }
            dq[i] = merged;

            a[i] += a[j];
            a[j] = 0.0;
            alive[j] = false;
            let moved = std::mem::take(&mut members[j]);
            members[i].extend(moved);
        }

        members.into_iter().filter(|m| !m.is_empty()).collect()
    }
}

impl Default for GreedyModularity {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityDetector for GreedyModularity {
    fn detect(&self, graph: &WeightedGraph) -> Result<Partition> {
        let net = Network::from_graph(graph, self.weighting);
        let mut communities = self.agglomerate(&net);

        for community in &mut communities {
            community.sort_unstable();
        }
        // Largest first; equal sizes keep node order
        communities.sort_by(|x, y| y.len().cmp(&x.len()).then(x[0].cmp(&y[0])));

        log::info!(
            "Greedy modularity found {} communities over {} nodes",
            communities.len(),
            net.len()
        );

        let ids: Vec<_> = graph.nodes().collect();
        Ok(Partition::from_communities(
            communities
                .into_iter()
                .map(|members| members.into_iter().map(|pos| ids[pos].clone()).collect::<Vec<_>>()),
        ))
    }

    fn name(&self) -> &'static str {
        "greedy_modularity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphBuilder, NodeId};

    fn community(partition: &Partition, id: &str) -> usize {
        partition.get(&NodeId::from(id)).unwrap()
    }

    #[test]
    fn test_two_cliques_largest_first() {
        let mut builder = GraphBuilder::default();
        // 4-clique and a triangle joined by a light bridge
        let big = ["p", "q", "r", "s"];
        for (x, u) in big.iter().enumerate() {
            for v in &big[x + 1..] {
                builder.add_edge((*u).into(), (*v).into(), 1.0);
            }
        }
        for (u, v) in [("x", "y"), ("y", "z"), ("x", "z")] {
            builder.add_edge(u.into(), v.into(), 1.0);
        }
        builder.add_edge("s".into(), "x".into(), 1.0);
        let partition = GreedyModularity::new().detect(&builder.build()).unwrap();

        for id in big {
            assert_eq!(community(&partition, id), 0);
        }
        for id in ["x", "y", "z"] {
            assert_eq!(community(&partition, id), 1);
        }

        // Entries are grouped community by community
        let ids: Vec<usize> = partition.iter().map(|(_, c)| c).collect();
        assert_eq!(ids, vec![0, 0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_edgeless_graph_gives_singletons() {
        let mut builder = GraphBuilder::default();
        builder.add_node("a".into());
        builder.add_node("b".into());
        let partition = GreedyModularity::new().detect(&builder.build()).unwrap();

        assert_eq!(community(&partition, "a"), 0);
        assert_eq!(community(&partition, "b"), 1);
    }

    #[test]
    fn test_disconnected_components_stay_apart() {
        let mut builder = GraphBuilder::default();
        builder.add_edge("a".into(), "b".into(), 1.0);
        builder.add_edge("c".into(), "d".into(), 1.0);
        let partition = GreedyModularity::new().detect(&builder.build()).unwrap();

        assert_eq!(community(&partition, "a"), community(&partition, "b"));
        assert_eq!(community(&partition, "c"), community(&partition, "d"));
        assert_ne!(community(&partition, "a"), community(&partition, "c"));
        assert_eq!(partition.community_count(), 2);
    }

    #[test]
    fn test_empty_graph() {
        let partition = GreedyModularity::new().detect(&WeightedGraph::default()).unwrap();
        assert!(partition.is_empty());
    }
}
