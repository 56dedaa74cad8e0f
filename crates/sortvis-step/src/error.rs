//! The single error a running procedure can observe.

use thiserror::Error;

/// The consumer of a step sequence has gone away.
///
/// Returned by a [`StepSink`](crate::StepSink) once nothing will read
/// further events (the session was cancelled or dropped, or a bounded
/// [`StepLog`](crate::StepLog) is full). Procedures propagate it with
/// `?` and stop immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("step consumer detached")]
pub struct Halted;
