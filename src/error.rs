//! Error types for the file DAG.
//!
//! Lookups never fail: unknown ids produce empty or absent results. Errors are
//! reserved for loading input, configuration, explicit cycle rejection and
//! progress transitions that do not apply to the current state.

use crate::types::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to load records: {0}")]
    RecordLoad(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cycle detected: {}", format_cycle(.cycle))]
    CycleDetected { cycle: Vec<NodeId> },

    #[error("Background work failed: {0}")]
    WorkFailed(String),

    #[error("Invalid progress transition: cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

impl From<config::ConfigError> for DagError {
    fn from(err: config::ConfigError) -> Self {
        DagError::ConfigError(err.to_string())
    }
}

fn format_cycle(cycle: &[NodeId]) -> String {
    let mut out = cycle
        .iter()
        .map(NodeId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ");
    if let Some(first) = cycle.first() {
        out.push_str(" -> ");
        out.push_str(first.as_str());
    }
    out
}
