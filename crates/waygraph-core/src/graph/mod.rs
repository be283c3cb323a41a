//! Directed labeled graph and the algorithms built on it
//!
//! - `Graph`: mutable multigraph keyed by node value
//! - `shortest_path`: Dijkstra search over `Cost`-labelled graphs
//! - `topological_sort`: ordering with deterministic tie-break and cycle detection

pub mod algos;
pub mod cost;
pub mod edge;
pub mod path;
pub mod store;

pub use algos::{shortest_path, topological_sort, topological_sort_by, SortOutcome};
pub use cost::Cost;
pub use edge::Edge;
pub use path::{Path, Segment, DEFAULT_PRECISION};
pub use store::Graph;
