//! Error types for the core crate.

use thiserror::Error;

/// A string did not name any [`Algorithm`](crate::Algorithm).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown algorithm '{input}'")]
pub struct ParseAlgorithmError {
    /// The rejected input.
    pub input: String,
}
