//! [`StepLog`]: a synchronous, in-memory [`StepSink`].

use sortvis_core::{ArrayState, OpCounters, Step, Value};

use crate::error::Halted;
use crate::event::{Event, StepSink};

/// Collects every event of a run into a `Vec`.
///
/// Optionally bounded: once `limit` events have been recorded, further
/// sends return [`Halted`], which exercises a procedure's early-exit
/// path without threads.
#[derive(Clone, Debug, Default)]
pub struct StepLog {
    events: Vec<Event>,
    limit: Option<usize>,
}

impl StepLog {
    /// An unbounded log.
    pub fn new() -> Self {
        Self::default()
    }

    /// A log that halts the producer after `limit` events.
    pub fn bounded(limit: usize) -> Self {
        Self {
            events: Vec::new(),
            limit: Some(limit),
        }
    }

    /// All recorded events, in order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Consume the log, returning its events.
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Recorded steps, skipping suspension and region markers.
    pub fn steps(&self) -> impl Iterator<Item = &Step> + '_ {
        self.events.iter().filter_map(Event::as_step)
    }

    /// Number of [`Event::Suspend`] points.
    pub fn suspensions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Suspend))
            .count()
    }

    /// Counters implied by the recorded steps.
    pub fn counters(&self) -> OpCounters {
        let mut counters = OpCounters::default();
        for step in self.steps() {
            match step {
                Step::Compare(..) => counters.comparisons += 1,
                s if s.is_mutation() => counters.swaps += 1,
                _ => {}
            }
        }
        counters
    }

    /// Apply the recorded steps to a fresh copy of `initial`.
    pub fn replay(&self, initial: &[Value]) -> ArrayState {
        let mut array = ArrayState::new(initial.to_vec());
        for step in self.steps() {
            array.apply(step);
        }
        array
    }
}

impl StepSink for StepLog {
    fn send(&mut self, event: Event) -> Result<(), Halted> {
        if self.limit.is_some_and(|limit| self.events.len() >= limit) {
            return Err(Halted);
        }
        self.events.push(event);
        Ok(())
    }
}
