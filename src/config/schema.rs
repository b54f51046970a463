//! Configuration data structures for graphwalk.
//!
//! Defines the YAML config format: traversal bounds, logging filter and
//! default output format. Every field has a default, so an empty file is a
//! valid config.

use serde::{Deserialize, Serialize};

use crate::error::{GraphWalkError, Result};
use crate::graph::traversal::TraversalLimits;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Root configuration for graphwalk.
///
/// Loaded from a YAML file, then adjusted by environment variables and CLI
/// flags, in that order of increasing priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphWalkConfig {
    /// Config format version (currently "1.0").
    #[serde(default = "default_version")]
    pub version: String,

    /// Bounds applied to traversals started from the CLI.
    #[serde(default)]
    pub traversal: TraversalConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default output format for CLI commands.
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for GraphWalkConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            traversal: TraversalConfig::default(),
            logging: LoggingConfig::default(),
            output: OutputFormat::default(),
        }
    }
}

impl GraphWalkConfig {
    /// Reject values that would make every traversal empty.
    pub fn validate(&self) -> Result<()> {
        if self.traversal.max_nodes == Some(0) {
            return Err(GraphWalkError::Config(
                "traversal.max_nodes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TraversalConfig
// ---------------------------------------------------------------------------

/// Optional traversal bounds. Absent fields mean unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_nodes: Option<usize>,
}

impl TraversalConfig {
    pub fn to_limits(&self) -> TraversalLimits {
        TraversalLimits {
            max_depth: self.max_depth,
            max_nodes: self.max_nodes,
        }
    }

    /// True when no bound is configured.
    pub fn is_unbounded(&self) -> bool {
        self.max_depth.is_none() && self.max_nodes.is_none()
    }
}

// ---------------------------------------------------------------------------
// LoggingConfig
// ---------------------------------------------------------------------------

/// Log filter used when `RUST_LOG` is not set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

// ---------------------------------------------------------------------------
// OutputFormat
// ---------------------------------------------------------------------------

/// How CLI results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One entry per line.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

impl OutputFormat {
    /// Parse from a loose string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_version() -> String {
    "1.0".to_string()
}

fn default_filter() -> String {
    "graphwalk=info".to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
