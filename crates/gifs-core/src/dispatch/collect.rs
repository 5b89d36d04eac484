//! Result reassembly: completions arrive in any order and are placed by
//! correlation id into a pre-sized output.

use std::fmt;

use super::job::{Completion, CorrelationId};
use super::observer::{DispatchEvent, Observer};

/// Why a completion could not be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrelationError {
    /// Id does not name a slot of this batch.
    OutOfRange { id: CorrelationId, len: usize },
    /// Slot already holds a result.
    Duplicate { id: CorrelationId },
}

impl fmt::Display for CorrelationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrelationError::OutOfRange { id, len } => {
                write!(f, "id {} outside batch of {} item(s)", id, len)
            }
            CorrelationError::Duplicate { id } => write!(f, "second completion for id {}", id),
        }
    }
}

impl std::error::Error for CorrelationError {}

/// Output sequence under construction. Each slot is filled at most once.
#[derive(Debug)]
pub struct Collector<S> {
    slots: Vec<Option<S>>,
    filled: usize,
}

impl<S> Collector<S> {
    pub fn new(len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        Self { slots, filled: 0 }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding a placed result.
    pub fn filled(&self) -> usize {
        self.filled
    }

    pub fn place(&mut self, id: CorrelationId, value: S) -> Result<(), CorrelationError> {
        let len = self.slots.len();
        let slot = id
            .index()
            .and_then(|i| self.slots.get_mut(i))
            .ok_or(CorrelationError::OutOfRange { id, len })?;
        if slot.is_some() {
            return Err(CorrelationError::Duplicate { id });
        }
        *slot = Some(value);
        self.filled += 1;
        Ok(())
    }

    /// Final output; slots nobody filled get `placeholder(id)`.
    pub fn finish<F>(self, mut placeholder: F) -> Vec<S>
    where
        F: FnMut(CorrelationId) -> S,
    {
        self.slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| slot.unwrap_or_else(|| placeholder(CorrelationId(i as u64))))
            .collect()
    }
}

/// Drains `completions` until the sink closes, resolving each outcome with
/// `resolve` and placing it by id. Uncorrelatable completions are reported
/// to `observer` and discarded. The caller finishes the returned collector.
pub fn collect_ordered<T, E, S, I, R>(
    completions: I,
    len: usize,
    observer: &dyn Observer,
    mut resolve: R,
) -> Collector<S>
where
    I: IntoIterator<Item = Completion<T, E>>,
    R: FnMut(Result<T, E>) -> S,
{
    let mut collector = Collector::new(len);
    for Completion { id, outcome } in completions {
        if let Err(e) = collector.place(id, resolve(outcome)) {
            observer.on_event(&DispatchEvent::CompletionDropped {
                id,
                reason: e.to_string(),
            });
        }
    }
    collector
}
