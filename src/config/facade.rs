//! ConfigLoader facade delegating to merge service.

use super::merge::MergeService;
use super::DagConfig;
use crate::error::DagError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> Result<DagConfig, DagError> {
        Ok(MergeService::load(None)?)
    }

    /// Load configuration from a specific file, still honoring the environment.
    pub fn load_from_file(path: &Path) -> Result<DagConfig, DagError> {
        if !path.exists() {
            return Err(DagError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Ok(MergeService::load(Some(path))?)
    }

    /// Create default configuration.
    pub fn default() -> DagConfig {
        DagConfig::default()
    }
}
