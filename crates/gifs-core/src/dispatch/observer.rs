//! Dispatch event hooks.
//!
//! Observers are called from worker threads as well as the caller's thread,
//! so they must be `Send + Sync` and cheap.

use super::job::CorrelationId;

/// Something that happened while a batch was running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    BatchStarted { jobs: usize, workers: usize },
    JobStarted { id: CorrelationId, worker: usize },
    JobFinished { id: CorrelationId, worker: usize, succeeded: bool },
    /// A completion could not be placed and was discarded.
    CompletionDropped { id: CorrelationId, reason: String },
    /// The job panicked; it has no completion and the worker moves on.
    JobPanicked { id: CorrelationId, worker: usize },
    /// A worker thread died outside of job execution.
    WorkerPanicked { worker: usize },
    BatchFinished { jobs: usize, completed: usize },
}

pub trait Observer: Send + Sync {
    fn on_event(&self, event: &DispatchEvent);
}

/// Ignores every event. The client's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn on_event(&self, _event: &DispatchEvent) {}
}

/// Forwards events to `tracing`: job-level events at debug, dropped
/// completions and panics at warn.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_event(&self, event: &DispatchEvent) {
        match event {
            DispatchEvent::BatchStarted { jobs, workers } => {
                tracing::info!(jobs, workers, "bulk import started");
            }
            DispatchEvent::JobStarted { id, worker } => {
                tracing::debug!(id = id.0, worker, "import started");
            }
            DispatchEvent::JobFinished {
                id,
                worker,
                succeeded,
            } => {
                tracing::debug!(id = id.0, worker, succeeded, "import finished");
            }
            DispatchEvent::CompletionDropped { id, reason } => {
                tracing::warn!(id = id.0, "dropping uncorrelated completion: {}", reason);
            }
            DispatchEvent::JobPanicked { id, worker } => {
                tracing::warn!(id = id.0, worker, "import panicked");
            }
            DispatchEvent::WorkerPanicked { worker } => {
                tracing::warn!(worker, "import worker panicked");
            }
            DispatchEvent::BatchFinished { jobs, completed } => {
                tracing::info!(jobs, completed, "bulk import finished");
            }
        }
    }
}
