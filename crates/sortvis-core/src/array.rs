//! The mutable array model shared by algorithms and the playback mirror.
//!
//! [`ArrayState`] owns the value sequence together with the operation
//! counters. Every mutation goes through [`swap`](ArrayState::swap) or
//! [`set`](ArrayState::set), both of which bump the write counter, so the
//! counters can never drift from the mutations actually performed.

use crate::stats::OpCounters;
use crate::step::Step;

/// Element type of a sorted array.
///
/// Unsigned by construction: radix and counting sort are only defined
/// over non-negative keys. The full range is supported; distribution
/// sorts bound their tables by input length, not by value spread.
pub type Value = u32;

/// An ordered, fixed-length sequence of values plus its operation counters.
///
/// The length never changes after construction. Index arguments must be
/// in `0..len()`; an out-of-range index is a programming error and panics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayState {
    values: Vec<Value>,
    counters: OpCounters,
}

impl ArrayState {
    /// Wrap `values` with zeroed counters.
    pub fn new(values: Vec<Value>) -> Self {
        Self {
            values,
            counters: OpCounters::default(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at index `i`.
    pub fn get(&self, i: usize) -> Value {
        self.values[i]
    }

    /// Overwrite index `i` with `value`.
    ///
    /// Counted as a write (the `swaps` counter), matching how overwrite
    /// based sorts report their work.
    pub fn set(&mut self, i: usize, value: Value) {
        self.values[i] = value;
        self.counters.swaps += 1;
    }

    /// Exchange the values at `i` and `j`. Counts one swap even when `i == j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
        self.counters.swaps += 1;
    }

    /// Record one comparison. Comparisons never mutate values.
    pub fn count_comparison(&mut self) {
        self.counters.comparisons += 1;
    }

    /// Apply a step produced by an algorithm running on another copy.
    ///
    /// `Compare` bumps the comparison counter, `Swap` and `Overwrite`
    /// mutate and bump the write counter, visual-only steps are ignored.
    pub fn apply(&mut self, step: &Step) {
        match step {
            Step::Compare(..) => self.count_comparison(),
            Step::Swap(i, j) => self.swap(*i, *j),
            Step::Overwrite { index, value } => self.set(*index, *value),
            Step::MarkSorted(_) | Step::Highlight(_) | Step::Unhighlight(_) => {}
        }
    }

    /// Current counters.
    pub fn counters(&self) -> OpCounters {
        self.counters
    }

    /// Zero the counters without touching values.
    pub fn reset_counters(&mut self) {
        self.counters = OpCounters::default();
    }

    /// Read-only view of the values.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consume the state, returning the values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Whether the values are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

impl From<Vec<Value>> for ArrayState {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}
