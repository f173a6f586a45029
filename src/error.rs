//! Error types for graph loading and metrics

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading a graph or computing metrics on it
#[derive(Debug, Error)]
pub enum Error {
    /// Input path does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Failure while reading the input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or a missing key in the graph document
    #[error("invalid graph document: {0}")]
    Json(#[from] serde_json::Error),

    /// A node was looked up that the graph does not contain
    #[error("unknown node: {0}")]
    UnknownNode(String),
}
