//! Ordered, bounded-concurrency batch execution.
//!
//! Producer → bounded feed → worker pool (OS threads) → result sink →
//! collector. Jobs run in any order, at most `ceiling` at a time; the output
//! is always one entry per job, in submission order.

mod collect;
mod job;
mod observer;
mod pool;

pub use collect::{collect_ordered, Collector, CorrelationError};
pub use job::{Completion, CorrelationId, Job};
pub use observer::{DispatchEvent, NoopObserver, Observer, TracingObserver};
pub use pool::{spawn, worker_count, Pool};

use std::sync::Arc;

/// Runs `jobs` with at most `ceiling` in flight and returns one `S` per job,
/// ordered by correlation id. Blocks until every worker has exited.
///
/// `resolve` turns each outcome into an output slot; `placeholder` fills
/// slots whose completion never arrived or could not be correlated.
pub fn run_ordered<J, S, R, P>(
    jobs: Vec<J>,
    ceiling: usize,
    observer: Arc<dyn Observer>,
    resolve: R,
    placeholder: P,
) -> Vec<S>
where
    J: Job,
    R: FnMut(Result<J::Output, J::Error>) -> S,
    P: FnMut(CorrelationId) -> S,
{
    let len = jobs.len();
    let pool = spawn(jobs, ceiling, Arc::clone(&observer));
    let collector = collect_ordered(pool.results.iter(), len, observer.as_ref(), resolve);
    pool.join();
    observer.on_event(&DispatchEvent::BatchFinished {
        jobs: collector.len(),
        completed: collector.filled(),
    });
    collector.finish(placeholder)
}
