//! Engine error types.

use sortvis_core::Value;
use thiserror::Error;

/// A configuration field is out of range.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Speed setting outside `1..=100`.
    #[error("speed {speed} is outside 1..=100")]
    SpeedOutOfRange {
        /// The rejected setting.
        speed: u8,
    },
    /// Array size is zero.
    #[error("array size must be at least 1")]
    EmptyArray,
    /// `min_value` exceeds `max_value`.
    #[error("value range {min}..={max} is empty")]
    InvalidValueRange {
        /// Configured lower bound.
        min: Value,
        /// Configured upper bound.
        max: Value,
    },
    /// Bucket width is zero.
    #[error("bucket width must be at least 1")]
    InvalidBucketWidth,
}

/// Errors from starting or running a session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The producer thread could not be spawned.
    #[error("failed to spawn step producer: {reason}")]
    Spawn {
        /// OS error description.
        reason: String,
    },
    /// The player's configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
