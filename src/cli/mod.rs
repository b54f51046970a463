//! Command-line interface.
//!
//! # Commands
//!
//! - `bfs <GRAPH> <START>`: breadth-first visitation order
//! - `path <GRAPH> <FROM> <TO>`: fewest-hop path between two nodes
//! - `count [ITEMS]...`: item frequencies (stdin lines when no items given)
//! - `stats <GRAPH>`: node, edge and dangling-reference counts
//!
//! Command handlers write to a caller-supplied writer so they can be driven
//! from tests without spawning the binary.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::{GraphWalkConfig, OutputFormat};
use crate::counter::{count_items, sorted_counts};
use crate::error::{GraphWalkError, Result};
use crate::graph::loader::{load_graph, GraphFormat};
use crate::graph::traversal::{GraphTraversal, TraversalLimits};

// ---------------------------------------------------------------------------
// Argument definitions
// ---------------------------------------------------------------------------

/// Deterministic breadth-first traversal over adjacency-mapped graphs.
#[derive(Debug, Parser)]
#[command(name = "graphwalk", version, about, propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v debug, -vv trace). Takes precedence over RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format: text or json. Overrides the config file.
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print nodes reachable from START in breadth-first order
    Bfs(BfsArgs),
    /// Print the fewest-hop path between two nodes
    Path(PathArgs),
    /// Count occurrences of each item
    Count(CountArgs),
    /// Summarize a graph file
    Stats(GraphArgs),
}

/// Graph file and its format.
#[derive(Debug, Args)]
pub struct GraphArgs {
    /// Graph file (.json, .yaml/.yml, or edge list).
    pub graph: PathBuf,

    /// Input format, overriding the file extension: json, yaml, edges.
    #[arg(long = "format-in", value_parser = parse_graph_format)]
    pub format: Option<GraphFormat>,
}

#[derive(Debug, Args)]
pub struct BfsArgs {
    #[command(flatten)]
    pub source: GraphArgs,

    /// Node to start from. Need not appear in the graph.
    pub start: String,

    /// Do not expand nodes further than this many hops.
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Stop after this many nodes.
    #[arg(long)]
    pub max_nodes: Option<usize>,

    /// Prefix each node with its hop distance.
    #[arg(long)]
    pub depth: bool,
}

#[derive(Debug, Args)]
pub struct PathArgs {
    #[command(flatten)]
    pub source: GraphArgs,

    pub from: String,

    pub to: String,
}

#[derive(Debug, Args)]
pub struct CountArgs {
    /// Items to count. Reads one item per stdin line when empty.
    pub items: Vec<String>,
}

fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    OutputFormat::from_str_loose(s).ok_or_else(|| format!("unknown output format: {s}"))
}

fn parse_graph_format(s: &str) -> std::result::Result<GraphFormat, String> {
    GraphFormat::from_str_loose(s).ok_or_else(|| format!("unknown graph format: {s}"))
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Result of a command that ran without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// `path` found no route between the two nodes.
    NoPath,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::NoPath => ExitCode::FAILURE,
        }
    }
}

/// Log filter implied by `-v` flags, or `None` to keep the configured one.
pub fn verbosity_filter(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("graphwalk=debug"),
        _ => Some("graphwalk=trace"),
    }
}

/// Run a parsed command line against `config`.
///
/// `out` is flushed before returning; a failed flush is an error.
pub fn run<R: BufRead, W: Write>(
    cli: &Cli,
    config: &GraphWalkConfig,
    stdin: R,
    out: &mut W,
) -> Result<Outcome> {
    let output = cli.output.unwrap_or(config.output);
    let outcome = match &cli.command {
        Commands::Bfs(args) => run_bfs(args, config, output, out),
        Commands::Path(args) => run_path(args, output, out),
        Commands::Count(args) => run_count(args, stdin, output, out),
        Commands::Stats(args) => run_stats(args, output, out),
    }?;
    out.flush()?;
    Ok(outcome)
}

fn run_bfs<W: Write>(
    args: &BfsArgs,
    config: &GraphWalkConfig,
    output: OutputFormat,
    out: &mut W,
) -> Result<Outcome> {
    let limits = TraversalLimits {
        max_depth: args.max_depth.or(config.traversal.max_depth),
        max_nodes: args.max_nodes.or(config.traversal.max_nodes),
    };
    if limits.max_nodes == Some(0) {
        return Err(GraphWalkError::Config("--max-nodes must be at least 1".into()));
    }

    let store = load_graph(&args.source.graph, args.source.format)?;
    let traversal = GraphTraversal::new(&store);
    tracing::info!(start = %args.start, nodes = store.len(), "starting traversal");

    if !args.depth && limits == TraversalLimits::unbounded() {
        let order = traversal.bfs(args.start.clone());
        match output {
            OutputFormat::Text => {
                for node in &order {
                    writeln!(out, "{node}")?;
                }
            }
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&order)?)?,
        }
        return Ok(Outcome::Success);
    }

    let visited = traversal.bfs_bounded(args.start.clone(), limits);
    match output {
        OutputFormat::Text => {
            for entry in &visited {
                if args.depth {
                    writeln!(out, "{}\t{}", entry.depth, entry.node)?;
                } else {
                    writeln!(out, "{}", entry.node)?;
                }
            }
        }
        OutputFormat::Json if args.depth => {
            writeln!(out, "{}", serde_json::to_string(&visited)?)?;
        }
        OutputFormat::Json => {
            let nodes: Vec<&str> = visited.iter().map(|e| e.node.as_str()).collect();
            writeln!(out, "{}", serde_json::to_string(&nodes)?)?;
        }
    }
    Ok(Outcome::Success)
}

fn run_path<W: Write>(args: &PathArgs, output: OutputFormat, out: &mut W) -> Result<Outcome> {
    let store = load_graph(&args.source.graph, args.source.format)?;
    let path = GraphTraversal::new(&store).shortest_path(args.from.clone(), args.to.clone());

    match output {
        OutputFormat::Text => match &path {
            Some(nodes) => writeln!(out, "{}", nodes.join(" -> "))?,
            None => writeln!(out, "no path")?,
        },
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&path)?)?,
    }

    Ok(if path.is_some() {
        Outcome::Success
    } else {
        Outcome::NoPath
    })
}

fn run_count<R: BufRead, W: Write>(
    args: &CountArgs,
    stdin: R,
    output: OutputFormat,
    out: &mut W,
) -> Result<Outcome> {
    let counts = if args.items.is_empty() {
        let mut lines = Vec::new();
        for line in stdin.lines() {
            let line = line?;
            let item = line.trim();
            if !item.is_empty() {
                lines.push(item.to_string());
            }
        }
        count_items(lines)
    } else {
        count_items(args.items.iter().cloned())
    };

    match output {
        OutputFormat::Text => {
            for (item, count) in sorted_counts(counts) {
                writeln!(out, "{item}\t{count}")?;
            }
        }
        OutputFormat::Json => {
            let ordered: BTreeMap<String, u64> = counts.into_iter().collect();
            writeln!(out, "{}", serde_json::to_string(&ordered)?)?;
        }
    }
    Ok(Outcome::Success)
}

fn run_stats<W: Write>(args: &GraphArgs, output: OutputFormat, out: &mut W) -> Result<Outcome> {
    let stats = load_graph(&args.graph, args.format)?.stats();
    match output {
        OutputFormat::Text => {
            writeln!(out, "nodes: {}", stats.nodes)?;
            writeln!(out, "edges: {}", stats.edges)?;
            writeln!(out, "dangling: {}", stats.dangling)?;
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "nodes": stats.nodes,
                "edges": stats.edges,
                "dangling": stats.dangling,
            });
            writeln!(out, "{value}")?;
        }
    }
    Ok(Outcome::Success)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
