//! Dependency ordering with cycle detection
//!
//! An edge `a -> b` means `a` must appear before `b`. When several nodes
//! could come next, the one that sorts earliest by the caller's ordering
//! is placed first. This falls out of visiting roots and children in
//! reverse order, collecting nodes in post-order, and reversing the result.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::error::Result;
use crate::graph::Graph;

/// Result of ordering a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SortOutcome<N> {
    /// Every node, each after all of its predecessors
    Sorted { order: Vec<N> },
    /// The constraints loop back on themselves; `at` lies on the cycle
    Cycle { at: N },
}

impl<N> SortOutcome<N> {
    pub fn is_cycle(&self) -> bool {
        matches!(self, SortOutcome::Cycle { .. })
    }

    pub fn order(&self) -> Option<&[N]> {
        match self {
            SortOutcome::Sorted { order } => Some(order),
            SortOutcome::Cycle { .. } => None,
        }
    }

    pub fn into_order(self) -> Option<Vec<N>> {
        match self {
            SortOutcome::Sorted { order } => Some(order),
            SortOutcome::Cycle { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Finished,
}

/// One level of the explicit DFS stack
struct Frame<'g, N> {
    node: &'g N,
    /// Children in reverse order, consumed from the front
    children: Vec<&'g N>,
    next: usize,
}

enum DfsResult<'g, N> {
    Completed(Vec<&'g N>),
    Cycle(&'g N),
}

/// Order the nodes of `graph`, breaking ties with `N`'s natural ordering
pub fn topological_sort<N, L>(graph: &Graph<N, L>) -> Result<SortOutcome<N>>
where
    N: Eq + Hash + Clone + Debug + Ord,
    L: Eq + Hash,
{
    topological_sort_by(graph, |a, b| a.cmp(b))
}

/// Order the nodes of `graph`, breaking ties with `compare`.
///
/// Among nodes that may be placed next, the one that `compare` ranks
/// lowest comes first. Returns `SortOutcome::Cycle` if no order exists.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = graph.size(), edges = graph.edge_count()))]
pub fn topological_sort_by<N, L, F>(graph: &Graph<N, L>, compare: F) -> Result<SortOutcome<N>>
where
    N: Eq + Hash + Clone + Debug,
    L: Eq + Hash,
    F: Fn(&N, &N) -> Ordering,
{
    let mut roots: Vec<&N> = graph.nodes().collect();
    roots.sort_by(|a, b| compare(*b, *a));

    let mut states: HashMap<&N, VisitState> = HashMap::with_capacity(graph.size());
    let mut finished: Vec<&N> = Vec::with_capacity(graph.size());

    for root in roots {
        if state_of(&states, root) != VisitState::Unvisited {
            continue;
        }
        match dfs_from(graph, root, &compare, &mut states)? {
            DfsResult::Completed(local) => finished.extend(local),
            DfsResult::Cycle(at) => {
                tracing::debug!(at = ?at, "cycle_detected");
                return Ok(SortOutcome::Cycle { at: at.clone() });
            }
        }
    }

    let order = finished.into_iter().rev().cloned().collect();
    Ok(SortOutcome::Sorted { order })
}

fn state_of<N: Eq + Hash>(states: &HashMap<&N, VisitState>, node: &N) -> VisitState {
    states.get(node).copied().unwrap_or(VisitState::Unvisited)
}

fn sorted_children<'g, N, L, F>(
    graph: &'g Graph<N, L>,
    node: &N,
    compare: &F,
) -> Result<Vec<&'g N>>
where
    N: Eq + Hash + Clone + Debug,
    L: Eq + Hash,
    F: Fn(&N, &N) -> Ordering,
{
    let mut children: Vec<&N> = graph
        .children_of(node)?
        .iter()
        .map(|edge| edge.child())
        .collect();
    children.sort_by(|a, b| compare(*b, *a));
    Ok(children)
}

/// Iterative post-order DFS from `root`.
///
/// Nodes on the active path are `InProgress`; reaching one again closes a
/// cycle. Nodes whose subtree is complete are `Finished` and skipped.
fn dfs_from<'g, N, L, F>(
    graph: &'g Graph<N, L>,
    root: &'g N,
    compare: &F,
    states: &mut HashMap<&'g N, VisitState>,
) -> Result<DfsResult<'g, N>>
where
    N: Eq + Hash + Clone + Debug,
    L: Eq + Hash,
    F: Fn(&N, &N) -> Ordering,
{
    let mut local = Vec::new();
    let mut stack = vec![Frame {
        node: root,
        children: sorted_children(graph, root, compare)?,
        next: 0,
    }];
    states.insert(root, VisitState::InProgress);

    while let Some(frame) = stack.last_mut() {
        if frame.next < frame.children.len() {
            let child = frame.children[frame.next];
            frame.next += 1;

            match state_of(states, child) {
                VisitState::Finished => {}
                VisitState::InProgress => return Ok(DfsResult::Cycle(child)),
                VisitState::Unvisited => {
                    states.insert(child, VisitState::InProgress);
                    stack.push(Frame {
                        node: child,
                        children: sorted_children(graph, child, compare)?,
                        next: 0,
                    });
                }
            }
        } else {
            let node = frame.node;
            stack.pop();
            states.insert(node, VisitState::Finished);
            local.push(node);
        }
    }

    Ok(DfsResult::Completed(local))
}
