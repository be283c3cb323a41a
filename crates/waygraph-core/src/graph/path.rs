use std::fmt::Display;

use serde::Serialize;

use crate::graph::Cost;

/// Default number of decimals used when rendering costs
pub const DEFAULT_PRECISION: usize = 3;

/// One hop of a path with its incremental cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment<N> {
    pub from: N,
    pub to: N,
    pub cost: Cost,
}

/// A route starting at `start`, extended one segment at a time.
///
/// A path with no segments is the trivial route from a node to itself and
/// has zero cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<N> {
    start: N,
    segments: Vec<Segment<N>>,
    total_cost: Cost,
}

impl<N: Clone> Path<N> {
    pub fn new(start: N) -> Self {
        Self {
            start,
            segments: Vec::new(),
            total_cost: Cost::ZERO,
        }
    }

    /// Append a hop from the current end to `next`
    pub fn extend(mut self, next: N, cost: Cost) -> Self {
        let from = self.end().clone();
        self.segments.push(Segment {
            from,
            to: next,
            cost,
        });
        self.total_cost = self.total_cost + cost;
        self
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    /// Last node of the path (the start for a trivial path)
    pub fn end(&self) -> &N {
        self.segments
            .last()
            .map(|segment| &segment.to)
            .unwrap_or(&self.start)
    }

    pub fn segments(&self) -> &[Segment<N>] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment<N>> {
        self.segments.iter()
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }
}

impl<N: Clone + Display> Path<N> {
    /// Render the path as `<from> to <to> with weight <cost>` lines
    /// followed by `total cost: <sum>`.
    pub fn render_lines(&self, precision: usize) -> Vec<String> {
        let mut lines: Vec<String> = self
            .segments
            .iter()
            .map(|segment| {
                format!(
                    "{} to {} with weight {:.*}",
                    segment.from, segment.to, precision, segment.cost
                )
            })
            .collect();
        lines.push(format!("total cost: {:.*}", precision, self.total_cost));
        lines
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a Segment<N>;
    type IntoIter = std::slice::Iter<'a, Segment<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
