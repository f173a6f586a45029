//! Louvain algorithm for community detection.
//!
//! Multi-level greedy modularity optimization (Blondel et al. 2008):
//!
//! 1. **Local moving**: every node starts alone; nodes are visited in random
//!    order and moved to the neighbouring community with the best modularity
//!    gain until a pass changes nothing or the gain drops below a threshold.
//! 2. **Aggregation**: communities become nodes of a coarser network, internal
//!    edges become self-loops.
//! 3. Repeat on the coarse network while modularity keeps improving.
//!
//! The visiting order comes from a seeded RNG when a seed is set, so runs are
//! reproducible; without a seed results may differ between runs.

use super::network::{renumber, Network};
use super::{CommunityDetector, Partition};
use crate::error::Result;
use crate::graph::{EdgeWeighting, WeightedGraph};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Minimum modularity improvement to keep iterating
const MIN_GAIN: f64 = 1e-7;

/// Louvain community detection
#[derive(Debug, Clone)]
pub struct Louvain {
    /// Resolution parameter (gamma)
    resolution: f64,
    /// RNG seed for the node visiting order
    seed: Option<u64>,
    weighting: EdgeWeighting,
}

impl Louvain {
    pub fn new() -> Self {
        Self {
            resolution: 1.0,
            seed: None,
            weighting: EdgeWeighting::Weighted,
        }
    }

    /// Higher values produce smaller communities.
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_weighting(mut self, weighting: EdgeWeighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Local moving phase. Returns the community of each node and whether any node moved.
    fn one_level(&self, net: &Network, rng: &mut StdRng) -> (Vec<usize>, bool) {
        let n = net.len();
        let two_m = 2.0 * net.total_weight;

        let mut community: Vec<usize> = (0..n).collect();
        let mut totals = net.degrees.clone();

        // Scratch space: link weight from the current node to each community
        let mut links = vec![0.0; n];
        let mut touched: Vec<usize> = Vec::new();
        let mut is_touched = vec![false; n];

        let mut order: Vec<usize> = (0..n).collect();
        let mut moved_any = false;
        let mut q = net.modularity(|i| Some(community[i]), self.resolution);

        loop {
            order.shuffle(rng);
            let mut moved = false;

            for &node in &order {
                let current = community[node];
                let k = net.degrees[node];

                for &(neighbor, w) in &net.adjacency[node] {
                    let c = community[neighbor];
                    if !is_touched[c] {
                        is_touched[c] = true;
                        touched.push(c);
                    }
                    links[c] += w;
                }

                totals[current] -= k;

                let mut best = current;
                let mut best_gain = links[current] - self.resolution * totals[current] * k / two_m;
                for &c in &touched {
                    let gain = links[c] - self.resolution * totals[c] * k / two_m;
                    if gain > best_gain {
                        best_gain = gain;
                        best = c;
                    }
                }

                totals[best] += k;
                community[node] = best;
                if best != current {
                    moved = true;
                    moved_any = true;
                }

                for &c in &touched {
                    links[c] = 0.0;
                    is_touched[c] = false;
                }
                touched.clear();
            }

            if !moved {
                break;
            }

            let new_q = net.modularity(|i| Some(community[i]), self.resolution);
            if new_q - q < MIN_GAIN {
                break;
            }
            q = new_q;
        }

        (community, moved_any)
    }
}

impl Default for Louvain {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityDetector for Louvain {
    fn detect(&self, graph: &WeightedGraph) -> Result<Partition> {
        let n = graph.node_count();
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut network = Network::from_graph(graph, self.weighting);

        // Original node -> node of the current (possibly aggregated) level
        let mut membership: Vec<usize> = (0..n).collect();

        if network.total_weight > 0.0 {
            let mut q = network.modularity(Some, self.resolution);
            let mut level = 0;

            loop {
                let (communities, moved) = self.one_level(&network, &mut rng);
                if !moved {
                    break;
                }

                let (labels, count) = renumber(&communities);
                let new_q = network.modularity(|i| Some(labels[i]), self.resolution);
                // The first level is always kept
                if level > 0 && new_q - q < MIN_GAIN {
                    break;
                }

                log::debug!(
                    "Louvain level {}: {} communities, modularity {:.6}",
                    level,
                    count,
                    new_q
                );

                for node in membership.iter_mut() {
                    *node = labels[*node];
                }
                network = network.aggregate(&labels, count);
                q = new_q;
                level += 1;
            }
        }

        let (labels, count) = renumber(&membership);
        log::info!("Louvain found {} communities over {} nodes", count, n);

        Ok(graph.nodes().cloned().zip(labels).collect())
    }

    fn name(&self) -> &'static str {
        "louvain"
    }
}
