//! Step sequencing for sortvis.
//!
//! Algorithms never talk to a renderer or a clock. They write into a
//! [`StepSink`] through a [`SortContext`], which keeps the working
//! [`ArrayState`](sortvis_core::ArrayState) and the emitted [`Event`]s in
//! lockstep. Two sinks are provided:
//!
//! - [`StepLog`] collects events synchronously (tests, benchmarks,
//!   offline analysis).
//! - [`StepStream`] runs a procedure on a producer thread behind a
//!   zero-capacity channel. Every send is a rendezvous, so the producer
//!   is parked until the consumer pulls the next event: a lazy sequence
//!   with explicit suspension points, restartable only by spawning a new
//!   stream.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod error;
pub mod event;
pub mod fingerprint;
pub mod log;
pub mod procedure;
pub mod stream;

pub use context::SortContext;
pub use error::Halted;
pub use event::{Event, StepSink};
pub use fingerprint::fingerprint;
pub use log::StepLog;
pub use procedure::{execute, SortProcedure};
pub use stream::{ProducerReport, StepStream};
