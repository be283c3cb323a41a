//! CLI commands for waygraph

pub mod campus;
pub mod dispatch;
pub mod script;
pub mod tasks;
