//! [`Session`]: one run of one algorithm over one array, pulled step by step.
//!
//! A session owns the consumer side of a [`StepStream`] plus a mirror
//! [`ArrayState`] that it keeps in sync by applying every received step.
//! The mirror, not the producer's working copy, is what a renderer sees.
//!
//! Sessions do no pacing of their own. [`Player`](crate::Player) drives
//! one with delays; a host that wants to single-step can drive one
//! directly through [`advance()`](Session::advance) or the `Iterator` impl.
//!
//! Dropping a session mid-run detaches the producer, which stops at its
//! next emission and is joined before `drop` returns.

use std::time::Instant;

use sortvis_core::{Algorithm, ArrayState, SessionId, Stats, Step, Value};
use sortvis_step::{Event, ProducerReport, SortProcedure, StepStream};

use crate::config::PlaybackConfig;
use crate::error::EngineError;

/// One unit of progress from [`Session::advance`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// A step, already applied to the session's array.
    Step(Step),
    /// The procedure yielded; a paced consumer waits here.
    Suspend,
    /// An atomic write region opened.
    RegionOpened,
    /// An atomic write region closed; the array is a permutation again.
    RegionClosed,
}

/// A running sort session.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    algorithm: Algorithm,
    array: ArrayState,
    stream: StepStream,
    started: Instant,
    region_depth: usize,
    steps_applied: u64,
}

impl Session {
    /// Start `algorithm` with default tuning over `values`.
    pub fn start(algorithm: Algorithm, values: Vec<Value>) -> Result<Self, EngineError> {
        let procedure = PlaybackConfig::default().procedure(algorithm)?;
        Self::with_procedure(algorithm, procedure, values)
    }

    /// Start a session running `procedure`, reported as `algorithm`.
    pub fn with_procedure(
        algorithm: Algorithm,
        procedure: Box<dyn SortProcedure>,
        values: Vec<Value>,
    ) -> Result<Self, EngineError> {
        let array = ArrayState::new(values.clone());
        let stream = StepStream::spawn(procedure, values).map_err(|e| EngineError::Spawn {
            reason: e.to_string(),
        })?;
        Ok(Self {
            id: SessionId::next(),
            algorithm,
            array,
            stream,
            started: Instant::now(),
            region_depth: 0,
            steps_applied: 0,
        })
    }

    /// This session's id.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The algorithm being run.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The array as of the last applied step.
    pub fn values(&self) -> &[Value] {
        self.array.values()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Whether the array is empty.
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Counters from applied steps, plus time since start.
    pub fn stats(&self) -> Stats {
        Stats::new(self.array.counters(), self.started.elapsed())
    }

    /// Steps applied so far.
    pub fn steps_applied(&self) -> u64 {
        self.steps_applied
    }

    /// Whether an atomic write region is open.
    pub fn in_region(&self) -> bool {
        self.region_depth > 0
    }

    /// Whether the procedure has returned and every event was consumed.
    pub fn is_finished(&self) -> bool {
        self.stream.is_exhausted()
    }

    /// The producer's own final state, once finished.
    pub fn producer_report(&self) -> Option<&ProducerReport> {
        self.stream.report()
    }

    /// Pull and apply the next event.
    ///
    /// Returns `None` once the procedure has returned.
    ///
    /// # Panics
    ///
    /// Re-raises a panic from the procedure.
    pub fn advance(&mut self) -> Option<Advance> {
        let event = self.stream.recv()?;
        tracing::trace!(session = %self.id, ?event, "event");
        Some(match event {
            Event::Step(step) => {
                self.array.apply(&step);
                self.steps_applied += 1;
                Advance::Step(step)
            }
            Event::Suspend => Advance::Suspend,
            Event::BeginAtomic => {
                self.region_depth += 1;
                Advance::RegionOpened
            }
            Event::EndAtomic => {
                self.region_depth = self.region_depth.saturating_sub(1);
                Advance::RegionClosed
            }
        })
    }

    /// Consume the session, returning its array.
    pub fn into_values(self) -> Vec<Value> {
        self.array.into_values()
    }
}

impl Iterator for Session {
    type Item = Advance;

    fn next(&mut self) -> Option<Advance> {
        self.advance()
    }
}
