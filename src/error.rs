//! Error types for graphwalk.
//!
//! Traversal and graph lookups never fail; errors only come from the edges
//! of the crate: reading graph files, parsing configuration, and the CLI.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum GraphWalkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed graph input (bad edge-list line, unknown format name).
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphWalkError>;
