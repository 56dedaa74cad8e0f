//! Heap sort.
//!
//! Builds a max-heap bottom-up from `n/2 - 1` down to the root, then
//! repeatedly swaps the root into the last unsorted slot, marks that slot,
//! and sifts the new root down through the shrunken heap.

use sortvis_step::{Halted, SortContext, SortProcedure};

/// In-place max-heap sort.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapSort;

impl SortProcedure for HeapSort {
    fn name(&self) -> &str {
        "heap"
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), Halted> {
        let n = ctx.len();
        for i in (0..n / 2).rev() {
            sift_down(ctx, n, i)?;
        }
        for end in (1..n).rev() {
            ctx.swap(0, end)?;
            ctx.mark(end)?;
            sift_down(ctx, end, 0)?;
        }
        ctx.mark_all_sorted()
    }
}

/// Restore the heap property below `root` within the first `len` slots.
fn sift_down(ctx: &mut SortContext<'_>, len: usize, mut root: usize) -> Result<(), Halted> {
    loop {
        let mut largest = root;
        for child in [2 * root + 1, 2 * root + 2] {
            if child >= len {
                break;
            }
            ctx.compare(child, largest)?;
            let highlighted = largest;
            if ctx.get(child) > ctx.get(largest) {
                largest = child;
            }
            ctx.release(child, highlighted)?;
        }
        if largest == root {
            return Ok(());
        }
        ctx.swap(root, largest)?;
        root = largest;
    }
}
