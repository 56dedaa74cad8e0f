//! [`StepStream`]: a lazy step sequence backed by a producer thread.
//!
//! The producer owns its working [`ArrayState`] exclusively (moved in via
//! `thread::Builder::spawn`) and reports through a zero-capacity crossbeam
//! channel. A rendezvous send blocks until the consumer receives, so the
//! producer never runs more than one event ahead: each `recv()` resumes
//! the algorithm exactly up to its next event.
//!
//! ```text
//! Consumer                         Producer thread
//!     |                                 |
//!     |--recv()----------------------->| ctx.compare(i, j)
//!     |<--Event::Step(Highlight)--------|   send blocks until taken
//!     |--recv()----------------------->|
//!     |<--Event::Step(Compare)----------|
//!     |--recv()----------------------->|
//!     |<--Event::Suspend----------------|
//!     |   (consumer paces here)         |   parked in send()
//!     |                                 |
//!     |  drop(rx) ---------------------> send() fails -> Halted -> return
//! ```
//!
//! Dropping the stream disconnects the channel and joins the producer,
//! which unwinds through `?` at its next send. A producer panic is a
//! programming defect and is re-raised on the consumer thread.

use std::io;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use sortvis_core::{ArrayState, OpCounters, Value};

use crate::error::Halted;
use crate::event::{Event, StepSink};
use crate::procedure::{execute, SortProcedure};

/// A [`StepSink`] that hands each event to a [`StepStream`] consumer.
struct ChannelSink {
    tx: Sender<Event>,
}

impl StepSink for ChannelSink {
    fn send(&mut self, event: Event) -> Result<(), Halted> {
        self.tx.send(event).map_err(|_| Halted)
    }
}

/// What the producer thread hands back when it finishes.
#[derive(Clone, Debug)]
pub struct ProducerReport {
    /// The producer's working array after the run.
    pub array: ArrayState,
    /// `Err(Halted)` if the consumer detached before the run completed.
    pub outcome: Result<(), Halted>,
}

impl ProducerReport {
    /// The producer-side counters.
    pub fn counters(&self) -> OpCounters {
        self.array.counters()
    }
}

/// A lazy, pull-driven sequence of [`Event`]s from one procedure run.
pub struct StepStream {
    rx: Option<Receiver<Event>>,
    producer: Option<JoinHandle<ProducerReport>>,
    report: Option<ProducerReport>,
}

impl StepStream {
    /// Spawn `procedure` over `values` on a parked producer thread.
    ///
    /// Nothing runs until the first [`recv()`](Self::recv).
    ///
    /// # Errors
    ///
    /// Returns the OS error if the thread cannot be spawned.
    pub fn spawn(procedure: Box<dyn SortProcedure>, values: Vec<Value>) -> io::Result<Self> {
        let (tx, rx) = crossbeam_channel::bounded(0);
        let name = format!("sortvis-{}", procedure.name());
        let producer = thread::Builder::new().name(name.clone()).spawn(move || {
            let mut array = ArrayState::new(values);
            let mut sink = ChannelSink { tx };
            let outcome = execute(&*procedure, &mut array, &mut sink);
            ProducerReport { array, outcome }
        })?;
        tracing::debug!(thread = %name, "step producer spawned");
        Ok(Self {
            rx: Some(rx),
            producer: Some(producer),
            report: None,
        })
    }

    /// Resume the producer until its next event.
    ///
    /// Returns `None` once the procedure has returned; the producer has
    /// then been joined and [`report()`](Self::report) is available.
    ///
    /// # Panics
    ///
    /// Re-raises a panic from the producer thread.
    pub fn recv(&mut self) -> Option<Event> {
        let rx = self.rx.as_ref()?;
        match rx.recv() {
            Ok(event) => Some(event),
            Err(_) => {
                self.rx = None;
                self.join();
                None
            }
        }
    }

    /// Whether the producer has finished and been joined.
    pub fn is_exhausted(&self) -> bool {
        self.rx.is_none()
    }

    /// The producer's final state, once exhausted.
    pub fn report(&self) -> Option<&ProducerReport> {
        self.report.as_ref()
    }

    fn join(&mut self) {
        if let Some(handle) = self.producer.take() {
            match handle.join() {
                Ok(report) => {
                    tracing::debug!(outcome = ?report.outcome, "step producer joined");
                    self.report = Some(report);
                }
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
    }
}

impl Iterator for StepStream {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        self.recv()
    }
}

impl Drop for StepStream {
    fn drop(&mut self) {
        // Disconnect first so a producer parked in send() observes Halted.
        self.rx = None;
        if let Some(handle) = self.producer.take() {
            if handle.join().is_err() && !thread::panicking() {
                tracing::error!("step producer panicked after its consumer detached");
            }
        }
    }
}

impl std::fmt::Debug for StepStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepStream")
            .field("exhausted", &self.is_exhausted())
            .field("report", &self.report)
            .finish()
    }
}
