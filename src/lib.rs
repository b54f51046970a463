//! graphwalk — deterministic breadth-first traversal library.
//!
//! Provides an immutable adjacency-mapping graph store, breadth-first
//! traversals that honor stored neighbor order, graph file loading, and a
//! small item-frequency counter.

pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod graph;
pub mod observability;

pub use counter::count_items;
pub use error::{GraphWalkError, Result};
pub use graph::{bfs, GraphStore, GraphTraversal, NodeWithDepth, TraversalLimits};
