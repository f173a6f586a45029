//! Graph representation and construction module

pub mod builder;
pub mod node;
pub mod weighted;

pub use builder::GraphBuilder;
pub use node::NodeId;
pub use weighted::{EdgeWeighting, GraphSummary, WeightedGraph};
