//! Graph input module

pub mod json;

pub use json::{load_graph, load_graph_with_config, parse_graph, EdgeRecord, GraphDocument};
