//! The [`Step`] vocabulary: atomic, observable algorithm operations.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::array::Value;

/// Index list carried by highlight steps. Almost always a pair.
pub type Indices = SmallVec<[usize; 2]>;

/// One atomic operation emitted by a running algorithm.
///
/// Only [`Swap`](Step::Swap) and [`Overwrite`](Step::Overwrite) mutate
/// the array; the remaining variants are bookkeeping or visual cues.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// Two positions are being compared. Counts one comparison.
    Compare(usize, usize),
    /// Exchange the values at two positions. Counts one swap.
    Swap(usize, usize),
    /// Direct assignment. Counts one swap (a write).
    Overwrite {
        /// Position written.
        index: usize,
        /// Value stored there.
        value: Value,
    },
    /// Positions in the half-open range are in their final place.
    MarkSorted(Range<usize>),
    /// Transient visual cue preceding a comparison or swap.
    Highlight(Indices),
    /// Clears a previous [`Highlight`](Step::Highlight).
    Unhighlight(Indices),
}

impl Step {
    /// `Highlight` of a pair.
    pub fn highlight(i: usize, j: usize) -> Self {
        Self::Highlight(smallvec![i, j])
    }

    /// `Unhighlight` of a pair.
    pub fn unhighlight(i: usize, j: usize) -> Self {
        Self::Unhighlight(smallvec![i, j])
    }

    /// `MarkSorted` of a single position.
    pub fn mark(index: usize) -> Self {
        Self::MarkSorted(index..index + 1)
    }

    /// Whether applying this step changes array values.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Swap(..) | Self::Overwrite { .. })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare(i, j) => write!(f, "compare {i} {j}"),
            Self::Swap(i, j) => write!(f, "swap {i} {j}"),
            Self::Overwrite { index, value } => write!(f, "overwrite {index} <- {value}"),
            Self::MarkSorted(r) => write!(f, "sorted {}..{}", r.start, r.end),
            Self::Highlight(ix) => write!(f, "highlight {ix:?}"),
            Self::Unhighlight(ix) => write!(f, "unhighlight {ix:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_swap_and_overwrite_mutate() {
        assert!(Step::Swap(0, 1).is_mutation());
        assert!(Step::Overwrite { index: 0, value: 3 }.is_mutation());
        assert!(!Step::Compare(0, 1).is_mutation());
        assert!(!Step::mark(4).is_mutation());
        assert!(!Step::highlight(0, 1).is_mutation());
        assert!(!Step::unhighlight(0, 1).is_mutation());
    }

    #[test]
    fn mark_covers_one_index() {
        assert_eq!(Step::mark(3), Step::MarkSorted(3..4));
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(Step::Swap(2, 5).to_string(), "swap 2 5");
        assert_eq!(
            Step::Overwrite { index: 1, value: 42 }.to_string(),
            "overwrite 1 <- 42"
        );
        assert_eq!(Step::MarkSorted(0..3).to_string(), "sorted 0..3");
    }

    #[test]
    fn steps_serialize_for_hosts() {
        let steps = vec![
            Step::highlight(0, 1),
            Step::Compare(0, 1),
            Step::Overwrite { index: 0, value: 9 },
            Step::MarkSorted(0..2),
        ];
        let json = serde_json::to_string(&steps).unwrap();
        let back: Vec<Step> = serde_json::from_str(&json).unwrap();
        assert_eq!(steps, back);
    }
}
