//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::graph::DEFAULT_PRECISION;

/// Top-level `waygraph.toml` contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaygraphConfig {
    /// Campus data files
    #[serde(default)]
    pub campus: CampusConfig,

    /// Human output formatting
    #[serde(default)]
    pub output: OutputConfig,
}

/// Locations of the campus data files.
///
/// Relative paths are resolved against the directory of the config file
/// they were read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildings: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places used when printing costs
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}
