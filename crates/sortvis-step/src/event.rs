//! The [`Event`] stream emitted by a running procedure and the
//! [`StepSink`] it is written into.

use serde::{Deserialize, Serialize};
use sortvis_core::Step;

use crate::error::Halted;

/// One item of a step sequence.
///
/// Besides the [`Step`]s themselves, the sequence carries the points at
/// which the producer yields for pacing, and brackets around write
/// regions that must not be cut short by cancellation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// An algorithmic operation.
    Step(Step),
    /// A pacing point: the consumer may delay here before pulling again.
    Suspend,
    /// Opens a region whose writes leave the array temporarily holding
    /// duplicates (e.g. a merge write-back). Regions nest.
    BeginAtomic,
    /// Closes the innermost region opened by [`BeginAtomic`](Event::BeginAtomic).
    EndAtomic,
}

impl Event {
    /// The carried step, if this is a [`Step`](Event::Step) event.
    pub fn as_step(&self) -> Option<&Step> {
        match self {
            Self::Step(step) => Some(step),
            _ => None,
        }
    }
}

impl From<Step> for Event {
    fn from(step: Step) -> Self {
        Self::Step(step)
    }
}

/// Destination for the events of a running procedure.
///
/// # Contract
///
/// - Events are delivered in emission order.
/// - Once `send` returns [`Halted`], every later call also returns it.
pub trait StepSink {
    /// Deliver one event.
    fn send(&mut self, event: Event) -> Result<(), Halted>;
}

impl<S: StepSink + ?Sized> StepSink for &mut S {
    fn send(&mut self, event: Event) -> Result<(), Halted> {
        (**self).send(event)
    }
}
