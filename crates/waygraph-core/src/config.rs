//! Configuration for waygraph
//!
//! Resolution order: an explicit path, then `$WAYGRAPH_CONFIG`, then
//! `./waygraph.toml` if it exists, then built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{Result, WaygraphError};

pub use types::{CampusConfig, OutputConfig, WaygraphConfig};

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "WAYGRAPH_CONFIG";

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "waygraph.toml";

/// Largest accepted `output.precision`
pub const MAX_PRECISION: usize = 12;

impl WaygraphConfig {
    /// Load configuration from a file, resolving relative campus paths
    /// against the file's directory
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| WaygraphError::io_operation("read", path.display(), e))?;
        let mut config: WaygraphConfig = toml::from_str(&content)?;
        config.validate()?;

        if let Some(base) = path.parent() {
            config.campus.buildings = config.campus.buildings.map(|p| resolve(base, p));
            config.campus.paths = config.campus.paths.map(|p| resolve(base, p));
        }

        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WaygraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| WaygraphError::io_operation("write", path.display(), e))?;
        Ok(())
    }

    /// Find and load the active configuration.
    ///
    /// An explicit or environment-named file that does not exist is an
    /// error; a missing `./waygraph.toml` just yields defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
            return Self::load(Path::new(&path));
        }
        let local = Path::new(CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::load(local);
        }
        tracing::debug!("config_defaults");
        Ok(Self::default())
    }

    fn validate(&self) -> Result<()> {
        if self.output.precision > MAX_PRECISION {
            bail_invalid!(
                "output.precision",
                format!("{} (maximum is {MAX_PRECISION})", self.output.precision)
            );
        }
        Ok(())
    }
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
