//! Units of work and their outcomes.

use std::fmt;

/// Position of an item in the submitted batch. Assigned once by the
/// producer; the collector places the item's result at this index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CorrelationId(pub u64);

impl CorrelationId {
    /// Slot index, or `None` if it does not fit in `usize`.
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One schedulable unit of work. `execute` takes `self` so a job cannot run
/// twice.
pub trait Job: Send + 'static {
    type Output: Send + 'static;
    type Error: Send + 'static;

    fn id(&self) -> CorrelationId;

    fn execute(self) -> Result<Self::Output, Self::Error>;
}

/// Outcome of one executed job, tagged with the job's id.
#[derive(Debug)]
pub struct Completion<T, E> {
    pub id: CorrelationId,
    pub outcome: Result<T, E>,
}
