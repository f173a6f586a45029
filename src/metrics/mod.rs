//! Network metrics over a loaded graph.
//!
//! Every function here reads the graph without modifying it, so one graph can
//! feed any number of metric calls.

pub mod centrality;
pub mod community;
pub mod density;
pub mod strength;

pub use centrality::betweenness;
pub use community::{
    louvain_partition, modularity, partition_with, CommunityDetector, CommunityStrategy,
    GreedyModularity, Louvain, Partition,
};
pub use density::{community_densities, CommunityDensities};
pub use strength::compute_strength;
