//! Weighted graph loading and network metrics for exploratory analysis.
//!
//! ```no_run
//! use graph_metrics::{load_graph, metrics, EdgeWeighting};
//!
//! let graph = load_graph("data/raw/graph_data.json", 1.0)?;
//! let strength = metrics::compute_strength(&graph);
//! let partition = metrics::louvain_partition(&graph, EdgeWeighting::Weighted)?;
//! let centrality = metrics::betweenness(&graph, EdgeWeighting::Weighted);
//! let (intra, inter): (Vec<f64>, Vec<f64>) =
//!     metrics::community_densities(&graph, &partition).into();
//! # let _ = (strength, centrality, intra, inter);
//! # Ok::<(), graph_metrics::Error>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod report;

pub use anyhow;
pub use config::Config;
pub use data::{load_graph, load_graph_with_config, parse_graph};
pub use error::{Error, Result};
pub use graph::{EdgeWeighting, NodeId, WeightedGraph};
