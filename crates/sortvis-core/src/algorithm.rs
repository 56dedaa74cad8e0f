//! The catalog of selectable sorting algorithms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseAlgorithmError;

/// One of the eleven supported sorting procedures.
///
/// The catalog order in [`Algorithm::ALL`] is the order a selector
/// presents them in. [`key()`](Algorithm::key) is the stable selector
/// value; [`label()`](Algorithm::label) is the human-readable name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Adjacent-swap double loop.
    Bubble,
    /// Repeated minimum selection.
    Selection,
    /// Leftward shifting into a sorted prefix.
    Insertion,
    /// Top-down recursive merge sort.
    Merge,
    /// Quicksort, last-element pivot.
    QuickLomuto,
    /// Quicksort, middle-element pivot with converging pointers.
    QuickHoare,
    /// Minimum-write cycle sort.
    Cycle,
    /// In-place max-heap sort.
    Heap,
    /// Stable counting sort over `[min, max]`.
    Counting,
    /// LSD radix sort, base 10.
    Radix,
    /// Fixed-width bucket sort.
    Bucket,
}

impl Algorithm {
    /// Every algorithm, in selector order.
    pub const ALL: [Algorithm; 11] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::QuickLomuto,
        Self::QuickHoare,
        Self::Cycle,
        Self::Heap,
        Self::Counting,
        Self::Radix,
        Self::Bucket,
    ];

    /// Stable selector key, e.g. `"quickSortLomuto"`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Bubble => "bubbleSort",
            Self::Selection => "selectionSort",
            Self::Insertion => "insertionSort",
            Self::Merge => "mergeSort",
            Self::QuickLomuto => "quickSortLomuto",
            Self::QuickHoare => "quickSortHoare",
            Self::Cycle => "cycleSort",
            Self::Heap => "heapSort",
            Self::Counting => "countingSort",
            Self::Radix => "radixSort",
            Self::Bucket => "bucketSort",
        }
    }

    /// snake_case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::QuickLomuto => "quick_lomuto",
            Self::QuickHoare => "quick_hoare",
            Self::Cycle => "cycle",
            Self::Heap => "heap",
            Self::Counting => "counting",
            Self::Radix => "radix",
            Self::Bucket => "bucket",
        }
    }

    /// Display label, e.g. `"Quick Sort (Hoare)"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
            Self::QuickLomuto => "Quick Sort (Lomuto)",
            Self::QuickHoare => "Quick Sort (Hoare)",
            Self::Cycle => "Cycle Sort",
            Self::Heap => "Heap Sort",
            Self::Counting => "Counting Sort",
            Self::Radix => "Radix Sort",
            Self::Bucket => "Bucket Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts either the selector key or the snake_case name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.key() == s || a.name() == s)
            .ok_or_else(|| ParseAlgorithmError {
                input: s.to_string(),
            })
    }
}
