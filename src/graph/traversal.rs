//! Breadth-first traversal over a [`GraphStore`].
//!
//! Every traversal owns a FIFO frontier and a visited set for the duration
//! of one call. A node enters the visited set the moment it is enqueued, so
//! it is enqueued at most once. Siblings are expanded in the exact order the
//! store lists them; no secondary sort is applied.

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use serde::Serialize;

use crate::graph::store::GraphStore;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// A node annotated with its hop distance from the traversal start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeWithDepth<K> {
    pub node: K,
    pub depth: u32,
}

/// Caller-imposed bounds for [`GraphTraversal::bfs_bounded`].
///
/// `None` means unbounded. With both fields `None` the bounded traversal
/// visits exactly what [`GraphTraversal::bfs`] visits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalLimits {
    /// Nodes further than this many hops from the start are never enqueued.
    pub max_depth: Option<u32>,
    /// Emission stops once this many nodes have been produced.
    pub max_nodes: Option<usize>,
}

impl TraversalLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = Some(nodes);
        self
    }
}

// ---------------------------------------------------------------------------
// GraphTraversal
// ---------------------------------------------------------------------------

/// Breadth-first traversals bound to a borrowed store.
#[derive(Debug)]
pub struct GraphTraversal<'a, K> {
    store: &'a GraphStore<K>,
}

impl<'a, K> GraphTraversal<'a, K>
where
    K: Eq + Hash + Clone,
{
    /// Create a new traversal bound to the given store.
    pub fn new(store: &'a GraphStore<K>) -> Self {
        Self { store }
    }

    // -------------------------------------------------------------------
    // bfs
    // -------------------------------------------------------------------

    /// Visit every node reachable from `start`, in first-discovery order.
    ///
    /// `start` need not be declared in the store; an undeclared start has no
    /// neighbors and yields `[start]`. Neighbors that repeat within a single
    /// list, or that were discovered earlier, are skipped.
    pub fn bfs(&self, start: K) -> Vec<K> {
        let mut frontier = VecDeque::from([start.clone()]);
        let mut visited = HashSet::from([start]);
        let mut order = Vec::new();

        while let Some(current) = frontier.pop_front() {
            let before = frontier.len();
            for neighbor in self.store.neighbors(&current) {
                if !visited.contains(neighbor) {
                    visited.insert(neighbor.clone());
                    frontier.push_back(neighbor.clone());
                }
            }
            tracing::trace!(
                expanded = order.len(),
                enqueued = frontier.len() - before,
                "bfs expansion"
            );
            order.push(current);
        }

        tracing::debug!(visited = order.len(), "bfs complete");
        order
    }

    // -------------------------------------------------------------------
    // bfs_with_depth
    // -------------------------------------------------------------------

    /// Same order as [`bfs`](Self::bfs), with each node's hop distance.
    pub fn bfs_with_depth(&self, start: K) -> Vec<NodeWithDepth<K>> {
        self.bfs_bounded(start, TraversalLimits::unbounded())
    }

    // -------------------------------------------------------------------
    // bfs_bounded
    // -------------------------------------------------------------------

    /// Breadth-first traversal that stops at `limits`.
    ///
    /// A node at `max_depth` is emitted but not expanded. Once `max_nodes`
    /// nodes are emitted the remaining frontier is discarded.
    pub fn bfs_bounded(&self, start: K, limits: TraversalLimits) -> Vec<NodeWithDepth<K>> {
        let cap = limits.max_nodes.unwrap_or(usize::MAX);
        let mut frontier = VecDeque::from([(start.clone(), 0u32)]);
        let mut visited = HashSet::from([start]);
        let mut order = Vec::new();

        while order.len() < cap {
            let Some((current, depth)) = frontier.pop_front() else {
                break;
            };

            if limits.max_depth.map_or(true, |max| depth < max) {
                for neighbor in self.store.neighbors(&current) {
                    if !visited.contains(neighbor) {
                        visited.insert(neighbor.clone());
                        frontier.push_back((neighbor.clone(), depth + 1));
                    }
                }
            }

            order.push(NodeWithDepth {
                node: current,
                depth,
            });
        }

        tracing::debug!(
            visited = order.len(),
            truncated = !frontier.is_empty(),
            max_depth = ?limits.max_depth,
            max_nodes = ?limits.max_nodes,
            "bounded bfs complete"
        );
        order
    }

    // -------------------------------------------------------------------
    // shortest_path
    // -------------------------------------------------------------------

    /// Fewest-hop path from `from` to `to`, both endpoints included.
    ///
    /// Uses the same discovery discipline as [`bfs`](Self::bfs): the first
    /// route to reach a node wins, and ties go to the earlier neighbor.
    /// Returns `None` when `to` is unreachable.
    pub fn shortest_path(&self, from: K, to: K) -> Option<Vec<K>> {
        if from == to {
            return Some(vec![from]);
        }

        let mut parents: HashMap<K, K> = HashMap::new();
        let mut frontier = VecDeque::from([from.clone()]);
        let mut visited = HashSet::from([from]);

        while let Some(current) = frontier.pop_front() {
            for neighbor in self.store.neighbors(&current) {
                if visited.contains(neighbor) {
                    continue;
                }
                visited.insert(neighbor.clone());
                parents.insert(neighbor.clone(), current.clone());

                if *neighbor == to {
                    return Some(rebuild_path(&parents, to));
                }
                frontier.push_back(neighbor.clone());
            }
        }

        None
    }
}

/// Walk parent links back from `target` to the root.
fn rebuild_path<K: Eq + Hash + Clone>(parents: &HashMap<K, K>, target: K) -> Vec<K> {
    let mut path = vec![target];
    while let Some(parent) = path.last().and_then(|node| parents.get(node)) {
        path.push(parent.clone());
    }
    path.reverse();
    path
}

/// Breadth-first visitation order of `graph` from `start`.
///
/// Shorthand for `GraphTraversal::new(graph).bfs(start)`.
pub fn bfs<K: Eq + Hash + Clone>(graph: &GraphStore<K>, start: K) -> Vec<K> {
    GraphTraversal::new(graph).bfs(start)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(entries: &[(&'static str, &[&'static str])]) -> GraphStore<&'static str> {
        entries
            .iter()
            .map(|(node, neighbors)| (*node, neighbors.to_vec()))
            .collect()
    }

    /// {a: [b, c, e], b: [], c: [d, e], d: [b], e: []}
    fn letters() -> GraphStore<&'static str> {
        graph(&[
            ("a", &["b", "c", "e"]),
            ("b", &[]),
            ("c", &["d", "e"]),
            ("d", &["b"]),
            ("e", &[]),
        ])
    }

    /// Undirected-style graph with back edges everywhere.
    fn hexagon() -> GraphStore<&'static str> {
        graph(&[
            ("A", &["B", "C"]),
            ("B", &["A", "D", "E"]),
            ("C", &["A", "F"]),
            ("D", &["B"]),
            ("E", &["B", "F"]),
            ("F", &["C", "E"]),
        ])
    }

    // -----------------------------------------------------------------------
    // bfs
    // -----------------------------------------------------------------------

    #[test]
    fn bfs_visits_siblings_in_stored_order() {
        assert_eq!(bfs(&letters(), "a"), vec!["a", "b", "c", "e", "d"]);
    }

    #[test]
    fn bfs_skips_back_edges() {
        assert_eq!(bfs(&hexagon(), "C"), vec!["C", "A", "F", "B", "E", "D"]);
    }

    #[test]
    fn bfs_from_leaf_yields_only_start() {
        assert_eq!(bfs(&graph(&[("x", &[])]), "x"), vec!["x"]);
    }

    #[test]
    fn bfs_from_undeclared_start_yields_only_start() {
        let empty: GraphStore<&str> = GraphStore::default();
        assert_eq!(bfs(&empty, "z"), vec!["z"]);
    }

    #[test]
    fn bfs_follows_dangling_references_without_error() {
        let g = graph(&[("root", &["ghost", "leaf"]), ("leaf", &["ghost2"])]);
        assert_eq!(bfs(&g, "root"), vec!["root", "ghost", "leaf", "ghost2"]);
    }

    #[test]
    fn bfs_collapses_duplicate_neighbors_in_one_list() {
        let g = graph(&[("a", &["b", "b", "c", "b"]), ("b", &["c", "c"])]);
        assert_eq!(bfs(&g, "a"), vec!["a", "b", "c"]);
    }

    #[test]
    fn bfs_handles_self_loop() {
        let g = graph(&[("a", &["a", "b"]), ("b", &["b"])]);
        assert_eq!(bfs(&g, "a"), vec!["a", "b"]);
    }

    #[test]
    fn bfs_ignores_unreachable_nodes() {
        let g = graph(&[("a", &["b"]), ("b", &[]), ("island", &["a"])]);
        assert_eq!(bfs(&g, "a"), vec!["a", "b"]);
    }

    #[test]
    fn bfs_does_not_sort_siblings() {
        let g = graph(&[("r", &["z", "m", "a"])]);
        assert_eq!(bfs(&g, "r"), vec!["r", "z", "m", "a"]);
    }

    #[test]
    fn bfs_works_over_integer_nodes() {
        let g: GraphStore<u64> = [(1, vec![3, 2]), (2, vec![4]), (3, vec![4, 1])]
            .into_iter()
            .collect();
        assert_eq!(bfs(&g, 1), vec![1, 3, 2, 4]);
    }

    #[test]
    fn bfs_leaves_the_store_untouched() {
        let g = letters();
        let snapshot = g.clone();
        let _ = bfs(&g, "a");
        assert_eq!(g, snapshot);
    }

    // -----------------------------------------------------------------------
    // bfs_with_depth
    // -----------------------------------------------------------------------

    #[test]
    fn bfs_with_depth_annotates_hop_distance() {
        let store = letters();
        let traversal = GraphTraversal::new(&store);
        let got: Vec<(&str, u32)> = traversal
            .bfs_with_depth("a")
            .into_iter()
            .map(|n| (n.node, n.depth))
            .collect();
        assert_eq!(
            got,
            vec![("a", 0), ("b", 1), ("c", 1), ("e", 1), ("d", 2)]
        );
    }

    // -----------------------------------------------------------------------
    // bfs_bounded
    // -----------------------------------------------------------------------

    #[test]
    fn bfs_bounded_respects_max_depth() {
        let store = letters();
        let traversal = GraphTraversal::new(&store);
        let got: Vec<&str> = traversal
            .bfs_bounded("a", TraversalLimits::default().with_max_depth(1))
            .into_iter()
            .map(|n| n.node)
            .collect();
        assert_eq!(got, vec!["a", "b", "c", "e"]);
    }

    #[test]
    fn bfs_bounded_depth_zero_yields_start() {
        let store = letters();
        let traversal = GraphTraversal::new(&store);
        let got = traversal.bfs_bounded("a", TraversalLimits::default().with_max_depth(0));
        assert_eq!(got, vec![NodeWithDepth { node: "a", depth: 0 }]);
    }

    #[test]
    fn bfs_bounded_respects_max_nodes() {
        let store = hexagon();
        let traversal = GraphTraversal::new(&store);
        let got: Vec<&str> = traversal
            .bfs_bounded("C", TraversalLimits::default().with_max_nodes(3))
            .into_iter()
            .map(|n| n.node)
            .collect();
        assert_eq!(got, vec!["C", "A", "F"]);
    }

    #[test]
    fn bfs_bounded_without_limits_matches_bfs() {
        let store = hexagon();
        let traversal = GraphTraversal::new(&store);
        let bounded: Vec<&str> = traversal
            .bfs_bounded("A", TraversalLimits::unbounded())
            .into_iter()
            .map(|n| n.node)
            .collect();
        assert_eq!(bounded, traversal.bfs("A"));
    }

    // -----------------------------------------------------------------------
    // shortest_path
    // -----------------------------------------------------------------------

    #[test]
    fn shortest_path_same_node() {
        let store = letters();
        let traversal = GraphTraversal::new(&store);
        assert_eq!(traversal.shortest_path("c", "c"), Some(vec!["c"]));
    }

    #[test]
    fn shortest_path_prefers_fewest_hops() {
        let store = letters();
        let traversal = GraphTraversal::new(&store);
        // a -> e directly beats a -> c -> e
        assert_eq!(traversal.shortest_path("a", "e"), Some(vec!["a", "e"]));
        assert_eq!(traversal.shortest_path("a", "d"), Some(vec!["a", "c", "d"]));
    }

    #[test]
    fn shortest_path_ties_go_to_earlier_neighbor() {
        let store = hexagon();
        let traversal = GraphTraversal::new(&store);
        // C -> F -> E is two hops; C -> A -> B -> E is three.
        assert_eq!(traversal.shortest_path("C", "E"), Some(vec!["C", "F", "E"]));
        // A -> B -> E -> F vs A -> C -> F: C route is shorter.
        assert_eq!(traversal.shortest_path("A", "F"), Some(vec!["A", "C", "F"]));
    }

    #[test]
    fn shortest_path_unreachable_is_none() {
        let store = letters();
        let traversal = GraphTraversal::new(&store);
        assert_eq!(traversal.shortest_path("b", "a"), None);
        assert_eq!(traversal.shortest_path("a", "nowhere"), None);
    }
}
