//! Quicksort with Lomuto partitioning.
//!
//! The pivot is the last element of the range. Elements strictly smaller
//! than the pivot are swapped to the front (self-swaps included), then the
//! pivot is swapped into slot `pi`. Recursion covers the ranges either side
//! of `pi`, excluding it. Every visited range is marked once its own
//! partition and recursion return, so finalization sweeps left to right.

use std::ops::Range;

use sortvis_step::{Halted, SortContext, SortProcedure};

/// Quicksort, Lomuto partition scheme.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuickSortLomuto;

impl SortProcedure for QuickSortLomuto {
    fn name(&self) -> &str {
        "quick_lomuto"
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), Halted> {
        let n = ctx.len();
        sort_range(ctx, 0..n)
    }
}

fn sort_range(ctx: &mut SortContext<'_>, range: Range<usize>) -> Result<(), Halted> {
    if range.len() > 1 {
        let pi = partition(ctx, range.clone())?;
        sort_range(ctx, range.start..pi)?;
        sort_range(ctx, pi + 1..range.end)?;
    }
    ctx.mark_sorted(range)
}

/// Partition `range` around its last element; returns the pivot's slot.
fn partition(ctx: &mut SortContext<'_>, range: Range<usize>) -> Result<usize, Halted> {
    let high = range.end - 1;
    let pivot = ctx.get(high);
    let mut store = range.start;
    for j in range.start..high {
        ctx.compare(j, high)?;
        if ctx.get(j) < pivot {
            ctx.swap(store, j)?;
            store += 1;
        }
        ctx.release(j, high)?;
    }
    ctx.swap(store, high)?;
    Ok(store)
}
