use serde::Serialize;

/// Outgoing edge of a parent node: the node it points to and its label.
///
/// Edges are only reachable through their parent's adjacency set, so the
/// parent is not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<N, L> {
    child: N,
    label: L,
}

impl<N, L> Edge<N, L> {
    pub fn new(child: N, label: L) -> Self {
        Self { child, label }
    }

    /// The node this edge points to
    pub fn child(&self) -> &N {
        &self.child
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    pub fn into_parts(self) -> (N, L) {
        (self.child, self.label)
    }
}
