//! Batch-level errors and per-item failures.
//!
//! Only `BatchError` is ever returned as an `Err` from the client. Anything
//! that goes wrong with a single import is recorded in that item's
//! `ResultSlot` as an `ItemFailure` and the rest of the batch carries on.

use serde::Serialize;
use std::fmt;

/// Failure of a batch call as a whole. No partial result exists.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// `import_sources` was called without any source URL.
    #[error("expecting at least one source")]
    NoSources,
    /// The collector returned a different number of slots than submitted.
    /// This indicates a bug in the dispatcher, not a remote condition.
    #[error("illogical and unexpected state: expected {expected} result(s), got {actual}")]
    InternalInconsistency { expected: usize, actual: usize },
    #[error("{0} is not implemented")]
    Unimplemented(&'static str),
}

/// Why a single item did not produce media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// Network error, timeout or non-2xx status.
    Transport,
    /// The response body was not a valid envelope.
    Decode,
    /// The API answered with an `errors` payload.
    Application,
    /// No completion was ever correlated to this item.
    Missing,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::Transport => "transport",
            FailureKind::Decode => "decode",
            FailureKind::Application => "application",
            FailureKind::Missing => "missing",
        };
        f.write_str(s)
    }
}

/// Error content of a failed `ResultSlot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ItemFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl ItemFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
