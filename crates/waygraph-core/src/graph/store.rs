//! Mutable directed labeled multigraph
//!
//! Nodes are opaque caller-supplied values; each node owns the set of its
//! outgoing `(child, label)` edges. Between two nodes there may be any
//! number of edges as long as their labels differ.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, WaygraphError};
use crate::graph::Edge;

/// Directed labeled graph keyed by node value.
///
/// Invariants:
/// - every edge child is itself a node of the graph
/// - a parent never holds two edges with the same `(child, label)`
/// - `size()` is the number of distinct nodes ever added
#[derive(Debug, Clone)]
pub struct Graph<N, L> {
    adjacency: HashMap<N, HashSet<Edge<N, L>>>,
    edge_count: usize,
}

impl<N, L> Default for Graph<N, L> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<N, L> Graph<N, L>
where
    N: Eq + Hash + Clone + Debug,
    L: Eq + Hash,
{
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `node` if absent. Returns true when the node was newly inserted.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, HashSet::new());
        true
    }

    /// Add an edge from `parent` to `child` carrying `label`.
    ///
    /// Both endpoints must already be nodes of the graph. Returns true when
    /// the edge was newly inserted; adding an identical edge is a no-op.
    pub fn add_edge(&mut self, parent: &N, child: &N, label: L) -> Result<bool> {
        if !self.adjacency.contains_key(child) {
            return Err(WaygraphError::node_not_found(format!("{child:?}")));
        }
        let edges = self
            .adjacency
            .get_mut(parent)
            .ok_or_else(|| WaygraphError::node_not_found(format!("{parent:?}")))?;

        let inserted = edges.insert(Edge::new(child.clone(), label));
        if inserted {
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Whether `parent` has an edge to `child` labelled `label`.
    ///
    /// Fails with `NodeNotFound` if either endpoint is absent, matching the
    /// precondition of `add_edge`.
    pub fn contains_edge(&self, parent: &N, child: &N, label: &L) -> Result<bool> {
        if !self.contains_node(child) {
            return Err(WaygraphError::node_not_found(format!("{child:?}")));
        }
        Ok(self
            .children_of(parent)?
            .iter()
            .any(|edge| edge.child() == child && edge.label() == label))
    }

    /// Outgoing edges of `parent`
    pub fn children_of(&self, parent: &N) -> Result<&HashSet<Edge<N, L>>> {
        self.adjacency
            .get(parent)
            .ok_or_else(|| WaygraphError::node_not_found(format!("{parent:?}")))
    }

    /// All nodes, in unspecified order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Every node paired with its outgoing edge set
    pub fn iter(&self) -> impl Iterator<Item = (&N, &HashSet<Edge<N, L>>)> {
        self.adjacency.iter()
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of distinct edges across all parents
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
