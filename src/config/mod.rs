//! Configuration
//!
//! Layered with the `config` crate: defaults, then the global config file,
//! then an explicit file, then `FILEDAG__*` environment variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

use crate::logging::LoggingConfig;
use crate::progress::ChunkTiming;
use crate::tree::CyclePolicy;
use crate::views::ViewPolicy;
use serde::{Deserialize, Serialize};

pub use facade::ConfigLoader;

/// Graph build settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub cycle_policy: CyclePolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DagConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub view: ViewPolicy,
    #[serde(default)]
    pub progress: ChunkTiming,
}
