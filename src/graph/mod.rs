//! Graph layer: adjacency store, file loading, and breadth-first traversal.

pub mod loader;
pub mod store;
pub mod traversal;

pub use store::{GraphStats, GraphStore};
pub use traversal::{bfs, GraphTraversal, NodeWithDepth, TraversalLimits};
