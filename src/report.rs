//! Metrics report persistence module

use crate::config::Config;
use crate::graph::{GraphSummary, NodeId, WeightedGraph};
use crate::metrics::{
    betweenness, community_densities, compute_strength, modularity, CommunityDensities, Partition,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name written by [`save_report`]
pub const REPORT_FILE: &str = "metrics.json";

/// Per-node metric values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeMetrics {
    pub id: NodeId,
    pub strength: f64,
    pub betweenness: f64,
    pub community: Option<usize>,
}

/// All metrics of one graph, ready to serialize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub config: Config,
    pub summary: GraphSummary,
    pub detector: String,
    pub community_count: usize,
    pub modularity: f64,
    /// One entry per node, in graph order
    pub nodes: Vec<NodeMetrics>,
    pub densities: CommunityDensities,
}

impl MetricsReport {
    /// Run every metric on `graph` with the settings in `config`
    pub fn compute(graph: &WeightedGraph, config: &Config) -> crate::Result<Self> {
        log::info!("Computing metrics for {} nodes", graph.node_count());

        let detector = config.strategy.detector(config);
        let partition = detector.detect(graph)?;
        let strength = compute_strength(graph);
        let centrality = betweenness(graph, config.weighting);
        let densities = community_densities(graph, &partition);

        let nodes = graph
            .nodes()
            .map(|id| NodeMetrics {
                id: id.clone(),
                strength: strength.get(id).copied().unwrap_or(0.0),
                betweenness: centrality.get(id).copied().unwrap_or(0.0),
                community: partition.get(id),
            })
            .collect();

        Ok(Self {
            config: config.clone(),
            summary: graph.summary(),
            detector: detector.name().to_string(),
            community_count: partition.community_count(),
            modularity: modularity(graph, &partition, config.weighting),
            nodes,
            densities,
        })
    }

    /// Rebuild the partition stored in the report
    pub fn partition(&self) -> Partition {
        self.nodes
            .iter()
            .filter_map(|node| node.community.map(|c| (node.id.clone(), c)))
            .collect()
    }

    /// Nodes sorted by descending betweenness, at most `n`
    pub fn top_betweenness(&self, n: usize) -> Vec<&NodeMetrics> {
        let mut nodes: Vec<&NodeMetrics> = self.nodes.iter().collect();
        nodes.sort_by(|a, b| b.betweenness.total_cmp(&a.betweenness));
        nodes.truncate(n);
        nodes
    }
}

/// Save `report` as pretty JSON under `output_dir`, returning the file path
pub fn save_report(report: &MetricsReport, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    log::info!("Saving metrics report to {}", output_dir.display());

    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;

    let path = output_dir.join(REPORT_FILE);
    let mut file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(serde_json::to_string_pretty(report)?.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;

    Ok(path)
}

/// Read a report written by [`save_report`]
pub fn load_report(path: impl AsRef<Path>) -> Result<MetricsReport> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let report = serde_json::from_str(&contents)
        .with_context(|| format!("parsing report {}", path.display()))?;
    Ok(report)
}
