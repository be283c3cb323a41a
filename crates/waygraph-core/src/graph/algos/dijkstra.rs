use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::bail_node_not_found;
use crate::error::Result;
use crate::graph::{Cost, Graph, Path};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost).
///
/// Entries compare by cost only, so the heap breaks ties between equal
/// costs arbitrarily. Callers must accept any cost-optimal path.
#[derive(Debug, Clone)]
pub struct HeapEntry<N> {
    pub node: N,
    pub accumulated_cost: Cost,
}

impl<N> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.accumulated_cost == other.accumulated_cost
    }
}

impl<N> Eq for HeapEntry<N> {}

impl<N> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost.cmp(&other.accumulated_cost)
    }
}

/// State tracked during a single search
struct DijkstraState<N> {
    /// Best known cost per node; absent means infinity
    best: HashMap<N, Cost>,
    /// Predecessor on the best path and the cost of the edge taken from it
    predecessors: HashMap<N, (N, Cost)>,
    finalized: HashSet<N>,
    heap: BinaryHeap<Reverse<HeapEntry<N>>>,
}

impl<N> DijkstraState<N>
where
    N: Eq + Hash + Clone,
{
    fn new(source: &N) -> Self {
        let mut state = Self {
            best: HashMap::new(),
            predecessors: HashMap::new(),
            finalized: HashSet::new(),
            heap: BinaryHeap::new(),
        };
        state.best.insert(source.clone(), Cost::ZERO);
        state.heap.push(Reverse(HeapEntry {
            node: source.clone(),
            accumulated_cost: Cost::ZERO,
        }));
        state
    }

    /// Record `tentative` for `child` if it beats the best known cost
    fn relax(&mut self, node: &N, child: &N, edge_cost: Cost, tentative: Cost) -> bool {
        let improves = self
            .best
            .get(child)
            .is_none_or(|&known| tentative < known);
        if improves {
            self.best.insert(child.clone(), tentative);
            self.predecessors
                .insert(child.clone(), (node.clone(), edge_cost));
            self.heap.push(Reverse(HeapEntry {
                node: child.clone(),
                accumulated_cost: tentative,
            }));
        }
        improves
    }

    /// Walk back-pointers from `destination` and replay them forward
    fn reconstruct(&self, source: &N, destination: &N) -> Path<N> {
        let mut hops = Vec::new();
        let mut current = destination;
        while let Some((prev, cost)) = self.predecessors.get(current) {
            hops.push((current.clone(), *cost));
            if prev == source {
                break;
            }
            current = prev;
        }
        hops.reverse();

        hops.into_iter()
            .fold(Path::new(source.clone()), |path, (node, cost)| {
                path.extend(node, cost)
            })
    }
}

/// Find a minimum-cost path from `source` to `destination`.
///
/// Returns `Ok(None)` when no route exists, and a zero-segment path when
/// `source == destination`. Both endpoints must be nodes of `graph`.
/// Edge labels are additive non-negative costs.
#[tracing::instrument(level = "debug", skip(graph), fields(nodes = graph.size(), edges = graph.edge_count()))]
pub fn shortest_path<N>(
    graph: &Graph<N, Cost>,
    source: &N,
    destination: &N,
) -> Result<Option<Path<N>>>
where
    N: Eq + Hash + Clone + Debug,
{
    for node in [source, destination] {
        if !graph.contains_node(node) {
            bail_node_not_found!(format!("{node:?}"));
        }
    }

    if source == destination {
        return Ok(Some(Path::new(source.clone())));
    }

    let mut state = DijkstraState::new(source);
    let mut stale = 0usize;
    let mut reached = false;

    while let Some(Reverse(HeapEntry {
        node,
        accumulated_cost,
    })) = state.heap.pop()
    {
        // Lazy deletion: a node may be queued several times
        if state.finalized.contains(&node) {
            stale += 1;
            continue;
        }
        state.finalized.insert(node.clone());

        if node == *destination {
            reached = true;
            break;
        }

        for edge in graph.children_of(&node)? {
            let child = edge.child();
            if state.finalized.contains(child) {
                continue;
            }
            let tentative = accumulated_cost + *edge.label();
            if state.relax(&node, child, *edge.label(), tentative) {
                tracing::trace!(from = ?node, to = ?child, cost = tentative.value(), "relax");
            }
        }
    }

    tracing::debug!(
        reached,
        finalized = state.finalized.len(),
        stale,
        "dijkstra_complete"
    );

    if !reached {
        return Ok(None);
    }
    Ok(Some(state.reconstruct(source, destination)))
}
