//! Producer and bounded worker pool.
//!
//! The producer feeds jobs into a bounded channel (capacity = number of
//! workers) so it blocks while every worker is busy and the feed is full.
//! Workers pull one job at a time, run it, send the completion to the
//! result sink and go back for the next one. The sink closes once every
//! worker has exited, which is the collector's end-of-batch signal.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use super::job::{Completion, Job};
use super::observer::{DispatchEvent, Observer};

/// A running batch: completions arrive on `results` in completion order.
pub struct Pool<J: Job> {
    pub(crate) results: Receiver<Completion<J::Output, J::Error>>,
    producer: JoinHandle<usize>,
    workers: Vec<JoinHandle<()>>,
    observer: Arc<dyn Observer>,
}

/// Number of worker threads for `jobs` jobs under `ceiling`: never zero,
/// never more than there are jobs to run.
pub fn worker_count(ceiling: usize, jobs: usize) -> usize {
    ceiling.min(jobs).max(1)
}

/// Starts the producer and `worker_count(ceiling, jobs.len())` workers.
pub fn spawn<J: Job>(jobs: Vec<J>, ceiling: usize, observer: Arc<dyn Observer>) -> Pool<J> {
    let num_workers = worker_count(ceiling, jobs.len());
    observer.on_event(&DispatchEvent::BatchStarted {
        jobs: jobs.len(),
        workers: num_workers,
    });

    let (feed_tx, feed_rx) = mpsc::sync_channel::<J>(num_workers);
    let producer = thread::spawn(move || produce(jobs, feed_tx));

    let feed = Arc::new(Mutex::new(feed_rx));
    let (result_tx, results) = mpsc::channel();
    let mut workers = Vec::with_capacity(num_workers);
    for worker in 0..num_workers {
        let feed = Arc::clone(&feed);
        let tx = result_tx.clone();
        let observer = Arc::clone(&observer);
        workers.push(thread::spawn(move || {
            loop {
                // Lock only to take the next job; never held while executing.
                let next = match feed.lock() {
                    Ok(rx) => rx.recv(),
                    Err(poisoned) => poisoned.into_inner().recv(),
                };
                let Ok(job) = next else {
                    break;
                };
                let id = job.id();
                observer.on_event(&DispatchEvent::JobStarted { id, worker });
                let outcome = match panic::catch_unwind(AssertUnwindSafe(|| job.execute())) {
                    Ok(outcome) => outcome,
                    Err(_) => {
                        // No completion; the collector fills this slot.
                        observer.on_event(&DispatchEvent::JobPanicked { id, worker });
                        continue;
                    }
                };
                observer.on_event(&DispatchEvent::JobFinished {
                    id,
                    worker,
                    succeeded: outcome.is_ok(),
                });
                if tx.send(Completion { id, outcome }).is_err() {
                    break;
                }
            }
        }));
    }
    drop(result_tx);

    Pool {
        results,
        producer,
        workers,
        observer,
    }
}

/// Sends every job in input order; stops early if all workers are gone.
/// Returns how many jobs were handed to the feed.
fn produce<J>(jobs: Vec<J>, feed: SyncSender<J>) -> usize {
    let mut sent = 0usize;
    for job in jobs {
        if feed.send(job).is_err() {
            break;
        }
        sent += 1;
    }
    sent
}

impl<J: Job> Pool<J> {
    /// Waits for the producer and every worker to exit. Call after the
    /// result sink is drained. Returns the number of jobs fed to workers.
    pub fn join(self) -> usize {
        let Pool {
            results,
            producer,
            workers,
            observer,
        } = self;
        drop(results);
        for (worker, handle) in workers.into_iter().enumerate() {
            if handle.join().is_err() {
                observer.on_event(&DispatchEvent::WorkerPanicked { worker });
            }
        }
        producer.join().unwrap_or(0)
    }
}
