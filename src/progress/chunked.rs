//! Chunked work
//!
//! Runs one synchronous computation behind a visible processing state. Slow
//! computations are padded so the loading indicator does not flicker out
//! immediately after appearing; fast ones report at once.

use super::ProgressHandle;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// Timing for padding slow work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkTiming {
    /// Work taking longer than this gets padded
    #[serde(default = "default_slow_threshold_ms")]
    pub slow_threshold_ms: u64,
    /// Extra visible delay added to slow work
    #[serde(default = "default_min_visible_ms")]
    pub min_visible_ms: u64,
}

fn default_slow_threshold_ms() -> u64 {
    100
}

fn default_min_visible_ms() -> u64 {
    50
}

impl Default for ChunkTiming {
    fn default() -> Self {
        Self {
            slow_threshold_ms: default_slow_threshold_ms(),
            min_visible_ms: default_min_visible_ms(),
        }
    }
}

impl ChunkTiming {
    fn padding_for(&self, elapsed: Duration) -> Option<Duration> {
        (elapsed > Duration::from_millis(self.slow_threshold_ms))
            .then(|| Duration::from_millis(self.min_visible_ms))
    }
}

/// Cancels the reporting of an in-flight result
///
/// Checked once, after the computation and any padding. The computation
/// itself always runs to completion.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkOutcome {
    Completed { elapsed: Duration, padded: bool },
    Cancelled,
    Failed { message: String },
}

/// Processing state plus the last committed result
#[derive(Debug)]
pub struct ChunkedWork<T> {
    timing: ChunkTiming,
    processing: bool,
    result: Option<T>,
    cancel: CancelFlag,
    progress: Option<(ProgressHandle, String)>,
}

impl<T> ChunkedWork<T> {
    pub fn new(timing: ChunkTiming) -> Self {
        Self {
            timing,
            processing: false,
            result: None,
            cancel: CancelFlag::default(),
            progress: None,
        }
    }

    /// Mirror each run into a shared tracker under `operation`
    ///
    /// `run` borrows the work mutably, so the tracker is how other tasks see
    /// the processing state.
    pub fn with_progress(mut self, handle: ProgressHandle, operation: impl Into<String>) -> Self {
        self.progress = Some((handle, operation.into()));
        self
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn take_result(&mut self) -> Option<T> {
        self.result.take()
    }

    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Run `work`, then commit its result unless it failed or was cancelled
    ///
    /// A failure (error or panic) is logged and clears the previous result. A
    /// cancelled run leaves the previous result in place, as does a run whose
    /// future is dropped before it finishes.
    pub async fn run<F, E>(&mut self, work: F) -> WorkOutcome
    where
        F: FnOnce() -> Result<T, E>,
        E: Display,
    {
        self.cancel.reset();
        self.processing = true;
        let reported = self.report_start();
        let mut run = ActiveRun {
            work: self,
            reported,
            finished: false,
        };
        // Let observers see the processing state before the CPU is taken
        tokio::task::yield_now().await;

        let started = Instant::now();
        let outcome = catch_unwind(AssertUnwindSafe(work));
        let elapsed = started.elapsed();

        let value = match outcome {
            Ok(Ok(value)) => value,
            Ok(Err(err)) => return run.abandon(err.to_string()),
            Err(panic) => return run.abandon(panic_message(panic.as_ref())),
        };

        let padding = run.work.timing.padding_for(elapsed);
        if let Some(padding) = padding {
            debug!(elapsed_ms = elapsed.as_millis() as u64, "Padding slow work");
            tokio::time::sleep(padding).await;
        }

        if run.work.cancel.is_cancelled() {
            debug!("Discarding cancelled result");
            run.finish(None);
            return WorkOutcome::Cancelled;
        }

        run.work.result = Some(value);
        run.finish(None);
        WorkOutcome::Completed {
            elapsed,
            padded: padding.is_some(),
        }
    }

    /// Returns true when the shared tracker accepted this run
    fn report_start(&self) -> bool {
        match &self.progress {
            Some((handle, operation)) => match handle.start(operation.clone(), None) {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "Progress tracker busy, run not mirrored");
                    false
                }
            },
            None => false,
        }
    }

    fn report_end(&self, failure: Option<&str>) {
        if let Some((handle, _)) = &self.progress {
            let result = match failure {
                Some(message) => handle.fail(message),
                None => handle.complete(),
            };
            if let Err(e) = result {
                warn!(error = %e, "Progress tracker not updated");
            }
        }
    }
}

/// One in-flight run; clears the processing state if dropped unfinished
struct ActiveRun<'a, T> {
    work: &'a mut ChunkedWork<T>,
    reported: bool,
    finished: bool,
}

impl<T> ActiveRun<'_, T> {
    fn finish(&mut self, failure: Option<&str>) {
        self.finished = true;
        self.work.processing = false;
        if self.reported {
            self.work.report_end(failure);
        }
    }

    fn abandon(mut self, message: String) -> WorkOutcome {
        error!(error = %message, "Chunked work failed");
        self.work.result = None;
        self.finish(Some(&message));
        WorkOutcome::Failed { message }
    }
}

impl<T> Drop for ActiveRun<'_, T> {
    fn drop(&mut self) {
        if !self.finished {
            debug!("Chunked work dropped before finishing");
            self.finish(None);
        }
    }
}

impl<T> Default for ChunkedWork<T> {
    fn default() -> Self {
        Self::new(ChunkTiming::default())
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "computation panicked".to_string()
    }
}
