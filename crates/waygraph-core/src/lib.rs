//! Waygraph Core Library
//!
//! A generic directed labelled multigraph with Dijkstra shortest paths and
//! a deterministic topological sort, plus the campus map, task sorter and
//! graph script layers built on top of it.

pub mod campus;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod script;
pub mod tasks;
