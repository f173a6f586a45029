//! Node identifiers as they appear in graph documents

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque node identifier, either a JSON integer or a JSON string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Str(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(id) => write!(f, "{id}"),
            NodeId::Str(id) => f.write_str(id),
        }
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId::Str(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId::Str(id)
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        NodeId::Int(id)
    }
}
