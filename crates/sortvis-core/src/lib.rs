//! Core types and traits for the sortvis sorting-algorithm engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace: the
//! mutable array model, the step vocabulary, operation counters, the
//! algorithm catalog, and the renderer boundary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod algorithm;
pub mod array;
pub mod cancel;
pub mod error;
pub mod id;
pub mod stats;
pub mod step;
pub mod traits;

pub use algorithm::Algorithm;
pub use array::{ArrayState, Value};
pub use cancel::CancelToken;
pub use error::ParseAlgorithmError;
pub use id::SessionId;
pub use stats::{OpCounters, Stats};
pub use step::{Indices, Step};
pub use traits::{NullRenderer, Renderer};
