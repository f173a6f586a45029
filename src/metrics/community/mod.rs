//! Community detection.
//!
//! Two modularity optimizers sit behind the [`CommunityDetector`] trait:
//! [`Louvain`] (the default) and [`GreedyModularity`]. The choice is explicit
//! through [`CommunityStrategy`] so either can be run and tested on its own.
//!
//! Both maximize Newman modularity at resolution gamma:
//!
//! ```text
//! Q = sum_c [ L_c / m - gamma * (d_c / 2m)^2 ]
//! ```
//!
//! with `L_c` the edge weight inside community `c`, `d_c` the summed weighted
//! degree of its nodes and `m` the total edge weight.

mod greedy;
mod louvain;
mod network;
mod partition;

pub use greedy::GreedyModularity;
pub use louvain::Louvain;
pub use partition::Partition;

use crate::config::Config;
use crate::error::Result;
use crate::graph::{EdgeWeighting, WeightedGraph};
use network::Network;
use serde::{Deserialize, Serialize};

/// A community detection algorithm
pub trait CommunityDetector {
    /// Assign every node of `graph` to exactly one community
    fn detect(&self, graph: &WeightedGraph) -> Result<Partition>;

    /// Short algorithm name for logs and reports
    fn name(&self) -> &'static str;
}

/// Which community detector to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunityStrategy {
    #[default]
    Louvain,
    GreedyModularity,
}

impl CommunityStrategy {
    /// Build the detector for this strategy from `config`
    pub fn detector(self, config: &Config) -> Box<dyn CommunityDetector> {
        match self {
            CommunityStrategy::Louvain => {
                let mut louvain = Louvain::new()
                    .with_resolution(config.resolution)
                    .with_weighting(config.weighting);
                if let Some(seed) = config.seed {
                    louvain = louvain.with_seed(seed);
                }
                Box::new(louvain)
            }
            CommunityStrategy::GreedyModularity => Box::new(
                GreedyModularity::new()
                    .with_resolution(config.resolution)
                    .with_weighting(config.weighting),
            ),
        }
    }
}

/// Louvain partition at resolution 1.0
pub fn louvain_partition(graph: &WeightedGraph, weighting: EdgeWeighting) -> Result<Partition> {
    Louvain::new()
        .with_resolution(1.0)
        .with_weighting(weighting)
        .detect(graph)
}

/// Partition `graph` with the strategy selected in `config`
pub fn partition_with(graph: &WeightedGraph, config: &Config) -> Result<Partition> {
    let detector = config.strategy.detector(config);
    log::info!("Detecting communities with {}", detector.name());
    detector.detect(graph)
}

/// Modularity of `partition` on `graph` at resolution 1.0.
///
/// Nodes missing from the partition belong to no community. Returns 0 when the
/// graph carries no weight.
pub fn modularity(graph: &WeightedGraph, partition: &Partition, weighting: EdgeWeighting) -> f64 {
    let net = Network::from_graph(graph, weighting);
    let labels: Vec<Option<usize>> = graph.nodes().map(|id| partition.get(id)).collect();
    net.modularity(|i| labels[i], 1.0)
}
