//! Operation counters and the per-session [`Stats`] snapshot.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Comparison and write counters owned by an [`ArrayState`](crate::ArrayState).
///
/// `swaps` counts every write, including direct overwrites, so merge,
/// counting, radix and bucket sorts report their writes under the same
/// counter as swap-based sorts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpCounters {
    /// Number of element comparisons.
    pub comparisons: u64,
    /// Number of swaps and overwrites.
    pub swaps: u64,
}

/// Counters plus elapsed wall time since the session started.
///
/// Reset at the start of every session; all fields are monotonically
/// non-decreasing while it runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of element comparisons.
    pub comparisons: u64,
    /// Number of swaps and overwrites.
    pub swaps: u64,
    /// Time since the session started.
    pub elapsed: Duration,
}

impl Stats {
    /// Combine counters with an elapsed time.
    pub fn new(counters: OpCounters, elapsed: Duration) -> Self {
        Self {
            comparisons: counters.comparisons,
            swaps: counters.swaps,
            elapsed,
        }
    }

    /// The counter part of the snapshot.
    pub fn counters(&self) -> OpCounters {
        OpCounters {
            comparisons: self.comparisons,
            swaps: self.swaps,
        }
    }

    /// Elapsed time in fractional milliseconds, as shown by a stats panel.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}
