//! Build a [`GraphStore`] from JSON, YAML, or plain edge-list text.
//!
//! JSON and YAML inputs are a mapping from node name to its ordered list of
//! neighbor names. Edge lists carry one `source target` pair per line; a
//! line with a single token declares a node without edges, and blank lines
//! or lines starting with `#` are skipped.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{GraphWalkError, Result};
use crate::graph::store::GraphStore;

// ---------------------------------------------------------------------------
// GraphFormat
// ---------------------------------------------------------------------------

/// On-disk representation of an adjacency mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphFormat {
    Json,
    Yaml,
    EdgeList,
}

impl GraphFormat {
    /// Infer the format from a file extension. Unknown extensions are
    /// treated as edge lists.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::EdgeList,
        }
    }

    /// Parse from a loose string (case-insensitive, common aliases accepted).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "edges" | "edgelist" | "edge-list" | "edge_list" | "txt" => Some(Self::EdgeList),
            _ => None,
        }
    }

    /// Canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::EdgeList => "edges",
        }
    }
}

impl std::fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GraphFormat {
    type Err = GraphWalkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_loose(s)
            .ok_or_else(|| GraphWalkError::Parse(format!("unknown graph format: {s:?}")))
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse graph text in the given format. Blank input is an empty graph.
pub fn parse_graph(text: &str, format: GraphFormat) -> Result<GraphStore<String>> {
    if text.trim().is_empty() {
        return Ok(GraphStore::default());
    }

    let store = match format {
        GraphFormat::Json => {
            let adjacency: HashMap<String, Vec<String>> = serde_json::from_str(text)?;
            GraphStore::new(adjacency)
        }
        GraphFormat::Yaml => {
            let adjacency: HashMap<String, Vec<String>> = serde_yaml::from_str(text)?;
            GraphStore::new(adjacency)
        }
        GraphFormat::EdgeList => parse_edge_list(text)?,
    };

    let stats = store.stats();
    tracing::debug!(
        format = %format,
        nodes = stats.nodes,
        edges = stats.edges,
        dangling = stats.dangling,
        "parsed graph"
    );
    Ok(store)
}

/// Read and parse a graph file. The format is inferred from the extension
/// unless given explicitly.
pub fn load_graph(path: &Path, format: Option<GraphFormat>) -> Result<GraphStore<String>> {
    let format = format.unwrap_or_else(|| GraphFormat::from_path(path));
    tracing::debug!(path = %path.display(), format = %format, "loading graph");
    let text = std::fs::read_to_string(path)?;
    parse_graph(&text, format)
}

fn parse_edge_list(text: &str) -> Result<GraphStore<String>> {
    let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [node] => {
                adjacency.entry((*node).to_string()).or_default();
            }
            [source, target] => {
                adjacency
                    .entry((*source).to_string())
                    .or_default()
                    .push((*target).to_string());
            }
            _ => {
                return Err(GraphWalkError::Parse(format!(
                    "line {}: expected `source target`, found {} fields",
                    idx + 1,
                    fields.len()
                )));
            }
        }
    }

    Ok(GraphStore::new(adjacency))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
