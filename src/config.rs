//! Configuration management for graph loading and metrics

use crate::graph::EdgeWeighting;
use crate::metrics::community::CommunityStrategy;
use serde::{Deserialize, Serialize};

/// Settings shared by the loader and the metric functions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Inclusive lower bound on edge weight at load time
    pub weight_min: f64,

    /// Whether metrics read edge weights or treat edges as unit weight
    pub weighting: EdgeWeighting,

    /// Community detection algorithm
    pub strategy: CommunityStrategy,

    /// Modularity resolution (gamma)
    pub resolution: f64,

    /// Seed for the randomized Louvain node order
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weight_min: 1.0,
            weighting: EdgeWeighting::Weighted,
            strategy: CommunityStrategy::Louvain,
            resolution: 1.0,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        weight_min: f64,
        weighting: EdgeWeighting,
        strategy: CommunityStrategy,
        resolution: f64,
        seed: Option<u64>,
    ) -> Self {
        Self {
            weight_min,
            weighting,
            strategy,
            resolution,
            seed,
        }
    }

    pub fn with_weight_min(mut self, weight_min: f64) -> Self {
        self.weight_min = weight_min;
        self
    }

    pub fn with_weighting(mut self, weighting: EdgeWeighting) -> Self {
        self.weighting = weighting;
        self
    }

    pub fn with_strategy(mut self, strategy: CommunityStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
