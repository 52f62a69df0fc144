//! Progress State Machine
//!
//! Tracks one long-running operation at a time for whatever displays loading
//! state. The tracker is passed explicitly; [`ProgressHandle`] shares it between
//! the code that does the work and the code that renders it.

pub mod chunked;

use crate::error::DagError;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

pub use chunked::{CancelFlag, ChunkTiming, ChunkedWork, WorkOutcome};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProgressState {
    #[default]
    Idle,
    Running {
        operation: String,
        details: Option<String>,
        progress: Option<f64>,
    },
    Failed {
        error: String,
    },
}

impl ProgressState {
    fn label(&self) -> &'static str {
        match self {
            ProgressState::Idle => "idle",
            ProgressState::Running { .. } => "running",
            ProgressState::Failed { .. } => "failed",
        }
    }
}

/// Idle -> Running -> Idle | Failed; Failed -> Running only through `start`
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    state: ProgressState,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ProgressState::Running { .. })
    }

    pub fn operation(&self) -> Option<&str> {
        match &self.state {
            ProgressState::Running { operation, .. } => Some(operation),
            _ => None,
        }
    }

    pub fn details(&self) -> Option<&str> {
        match &self.state {
            ProgressState::Running { details, .. } => details.as_deref(),
            _ => None,
        }
    }

    pub fn progress(&self) -> Option<f64> {
        match &self.state {
            ProgressState::Running { progress, .. } => *progress,
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ProgressState::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn start(
        &mut self,
        operation: impl Into<String>,
        details: Option<String>,
    ) -> Result<(), DagError> {
        if self.is_running() {
            return Err(self.invalid("start"));
        }
        let operation = operation.into();
        debug!(operation = %operation, "Progress started");
        self.state = ProgressState::Running {
            operation,
            details,
            progress: None,
        };
        Ok(())
    }

    /// Set the progress value; `details`, when given, replaces the current details
    pub fn update_progress(&mut self, value: f64, details: Option<String>) -> Result<(), DagError> {
        let invalid = self.invalid("update progress");
        match &mut self.state {
            ProgressState::Running {
                progress,
                details: current,
                ..
            } => {
                *progress = Some(value);
                if details.is_some() {
                    *current = details;
                }
                Ok(())
            }
            _ => Err(invalid),
        }
    }

    pub fn update_details(&mut self, details: impl Into<String>) -> Result<(), DagError> {
        let invalid = self.invalid("update details");
        match &mut self.state {
            ProgressState::Running { details: current, .. } => {
                *current = Some(details.into());
                Ok(())
            }
            _ => Err(invalid),
        }
    }

    pub fn complete(&mut self) -> Result<(), DagError> {
        if !self.is_running() {
            return Err(self.invalid("complete"));
        }
        debug!(operation = ?self.operation(), "Progress completed");
        self.state = ProgressState::Idle;
        Ok(())
    }

    pub fn fail(&mut self, error: impl Into<String>) -> Result<(), DagError> {
        if !self.is_running() {
            return Err(self.invalid("fail"));
        }
        let error = error.into();
        debug!(operation = ?self.operation(), error = %error, "Progress failed");
        self.state = ProgressState::Failed { error };
        Ok(())
    }

    fn invalid(&self, action: &'static str) -> DagError {
        DagError::InvalidTransition {
            action,
            state: self.state.label(),
        }
    }
}

/// Shared, cloneable access to one tracker
#[derive(Debug, Clone, Default)]
pub struct ProgressHandle {
    inner: Arc<Mutex<ProgressTracker>>,
}

impl ProgressHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ProgressState {
        self.inner.lock().state().clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.lock().is_running()
    }

    pub fn start(&self, operation: impl Into<String>, details: Option<String>) -> Result<(), DagError> {
        self.inner.lock().start(operation, details)
    }

    pub fn update_progress(&self, value: f64, details: Option<String>) -> Result<(), DagError> {
        self.inner.lock().update_progress(value, details)
    }

    pub fn update_details(&self, details: impl Into<String>) -> Result<(), DagError> {
        self.inner.lock().update_details(details)
    }

    pub fn complete(&self) -> Result<(), DagError> {
        self.inner.lock().complete()
    }

    pub fn fail(&self, error: impl Into<String>) -> Result<(), DagError> {
        self.inner.lock().fail(error)
    }
}
