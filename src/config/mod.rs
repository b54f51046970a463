//! Configuration loading.
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults
//! 2. YAML file: an explicit `--config` path, else `./graphwalk.yaml`, else
//!    `config.yaml` in the platform config directory
//! 3. `GRAPHWALK_MAX_DEPTH` / `GRAPHWALK_MAX_NODES` environment variables
//!
//! CLI flags are applied on top by the caller.

pub mod schema;

use std::path::{Path, PathBuf};

pub use schema::{GraphWalkConfig, LoggingConfig, OutputFormat, TraversalConfig};

use crate::error::{GraphWalkError, Result};

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "graphwalk.yaml";

pub const ENV_MAX_DEPTH: &str = "GRAPHWALK_MAX_DEPTH";
pub const ENV_MAX_NODES: &str = "GRAPHWALK_MAX_NODES";

/// Load, override from the process environment, and validate.
///
/// An explicit path must exist; implicit locations are optional.
pub fn load_config(explicit: Option<&Path>) -> Result<GraphWalkConfig> {
    let mut config = match explicit {
        Some(path) => read_config_file(path)?,
        None => match default_config_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => read_config_file(&path)?,
            None => {
                tracing::debug!("no config file found, using defaults");
                GraphWalkConfig::default()
            }
        },
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

/// Parse a YAML config document. Blank text yields the defaults.
pub fn config_from_yaml(text: &str) -> Result<GraphWalkConfig> {
    if text.trim().is_empty() {
        return Ok(GraphWalkConfig::default());
    }
    Ok(serde_yaml::from_str(text)?)
}

fn read_config_file(path: &Path) -> Result<GraphWalkConfig> {
    tracing::debug!(path = %path.display(), "reading config");
    let text = std::fs::read_to_string(path)?;
    config_from_yaml(&text)
}

/// Implicit config locations in lookup order.
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dirs) = directories::ProjectDirs::from("", "", "graphwalk") {
        paths.push(dirs.config_dir().join("config.yaml"));
    }
    paths
}

/// Apply traversal overrides from an environment lookup.
///
/// `lookup` is injected so callers and tests control the source.
pub fn apply_env_overrides<F>(config: &mut GraphWalkConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(ENV_MAX_DEPTH) {
        config.traversal.max_depth = Some(parse_env(ENV_MAX_DEPTH, &raw)?);
    }
    if let Some(raw) = lookup(ENV_MAX_NODES) {
        config.traversal.max_nodes = Some(parse_env(ENV_MAX_NODES, &raw)?);
    }
    Ok(())
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| {
        GraphWalkError::Config(format!(
            "{key}: expected a non-negative integer, got {raw:?}"
        ))
    })
}
