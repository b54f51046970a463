//! Immutable adjacency-mapping graph store.
//!
//! A [`GraphStore`] maps each node to its ordered list of outgoing
//! neighbors. Neighbor order is significant: traversals expand siblings in
//! exactly the order stored here. Nodes that appear only as neighbors (or
//! not at all) have an implicit empty neighbor list, so lookups never fail.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

// ---------------------------------------------------------------------------
// GraphStats
// ---------------------------------------------------------------------------

/// Aggregate statistics about a stored graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    /// Nodes declared as keys of the adjacency mapping.
    pub nodes: usize,
    /// Total neighbor references across all lists, duplicates included.
    pub edges: usize,
    /// Distinct nodes referenced as neighbors but never declared as keys.
    pub dangling: usize,
}

// ---------------------------------------------------------------------------
// GraphStore
// ---------------------------------------------------------------------------

/// Read-only adjacency mapping from node to ordered neighbor list.
///
/// Built once by the caller and only borrowed by traversals, so a single
/// store can back any number of concurrent traversals.
#[derive(Debug, Clone)]
pub struct GraphStore<K> {
    adjacency: HashMap<K, Vec<K>>,
}

// Map equality needs `K: Hash`, which a derive would not require.
impl<K: Eq + Hash> PartialEq for GraphStore<K> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<K: Eq + Hash> Eq for GraphStore<K> {}

impl<K> Default for GraphStore<K> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> GraphStore<K> {
    /// Wrap an existing adjacency mapping.
    pub fn new(adjacency: HashMap<K, Vec<K>>) -> Self {
        Self { adjacency }
    }

    /// Neighbors of `node` in stored order, or an empty slice when `node`
    /// is not a key.
    pub fn neighbors<Q>(&self, node: &Q) -> &[K]
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `node` is declared as a key.
    pub fn contains<Q>(&self, node: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.contains_key(node)
    }

    /// Number of declared nodes.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Declared nodes, in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &K> {
        self.adjacency.keys()
    }

    /// Count declared nodes, neighbor references and dangling targets.
    pub fn stats(&self) -> GraphStats {
        let edges = self.adjacency.values().map(Vec::len).sum();
        let dangling: HashSet<&K> = self
            .adjacency
            .values()
            .flatten()
            .filter(|n| !self.adjacency.contains_key(*n))
            .collect();

        GraphStats {
            nodes: self.adjacency.len(),
            edges,
            dangling: dangling.len(),
        }
    }
}

impl<K: Eq + Hash> From<HashMap<K, Vec<K>>> for GraphStore<K> {
    fn from(adjacency: HashMap<K, Vec<K>>) -> Self {
        Self::new(adjacency)
    }
}

/// Later entries for the same node replace earlier ones.
impl<K: Eq + Hash> FromIterator<(K, Vec<K>)> for GraphStore<K> {
    fn from_iter<I: IntoIterator<Item = (K, Vec<K>)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
