//! The sort procedures for sortvis.
//!
//! Each procedure implements [`SortProcedure`] and reports every compare,
//! swap and overwrite through its [`SortContext`](sortvis_step::SortContext).
//! Procedures are stateless unit structs (bucket sort carries its bucket
//! width), so the same instance can run any number of sessions.
//!
//! # Pacing
//!
//! | Procedure | Paced | Writes via |
//! |-----------|-------|------------|
//! | [`BubbleSort`], [`SelectionSort`], [`InsertionSort`] | yes | swap |
//! | [`QuickSortLomuto`], [`QuickSortHoare`], [`HeapSort`] | yes | swap |
//! | [`MergeSort`], [`CycleSort`] | yes | overwrite (atomic regions) |
//! | [`CountingSort`], [`RadixSort`], [`BucketSort`] | no | overwrite |

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bubble;
pub mod bucket;
pub mod counting;
pub mod cycle;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick_hoare;
pub mod quick_lomuto;
pub mod radix;
pub mod selection;

pub use bubble::BubbleSort;
pub use bucket::{BucketSort, BucketWidthError, DEFAULT_BUCKET_WIDTH};
pub use counting::CountingSort;
pub use cycle::CycleSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick_hoare::QuickSortHoare;
pub use quick_lomuto::QuickSortLomuto;
pub use radix::RadixSort;
pub use selection::SelectionSort;

use sortvis_core::Algorithm;
use sortvis_step::SortProcedure;

/// Largest tally table a distribution sort allocates per input element.
const DENSE_SLOTS_PER_ELEMENT: usize = 64;

/// Smallest tally table a distribution sort is always allowed.
const MIN_DENSE_SLOTS: usize = 1024;

/// Whether a table of `slots` entries is proportionate to `len` inputs.
///
/// Counting and bucket sort size their tables by the value spread, which
/// for `u32` keys can reach 2^32. Past this bound they switch to a sparse
/// tally with the same output and the same steps.
pub(crate) fn dense_table_fits(slots: usize, len: usize) -> bool {
    slots <= len.saturating_mul(DENSE_SLOTS_PER_ELEMENT).max(MIN_DENSE_SLOTS)
}

/// The default-configured procedure for `algorithm`.
pub fn procedure_for(algorithm: Algorithm) -> Box<dyn SortProcedure> {
    match algorithm {
        Algorithm::Bubble => Box::new(BubbleSort),
        Algorithm::Selection => Box::new(SelectionSort),
        Algorithm::Insertion => Box::new(InsertionSort),
        Algorithm::Merge => Box::new(MergeSort),
        Algorithm::QuickLomuto => Box::new(QuickSortLomuto),
        Algorithm::QuickHoare => Box::new(QuickSortHoare),
        Algorithm::Cycle => Box::new(CycleSort),
        Algorithm::Heap => Box::new(HeapSort),
        Algorithm::Counting => Box::new(CountingSort),
        Algorithm::Radix => Box::new(RadixSort),
        Algorithm::Bucket => Box::new(BucketSort::default()),
    }
}
