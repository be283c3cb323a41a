//! Graph algorithm implementations
//!
//! - `dijkstra`: minimum-cost path between two nodes
//! - `topo`: dependency ordering with cycle detection

pub mod dijkstra;
pub mod topo;

pub use dijkstra::shortest_path;
pub use topo::{topological_sort, topological_sort_by, SortOutcome};
