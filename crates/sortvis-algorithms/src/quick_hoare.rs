//! Quicksort with Hoare partitioning.
//!
//! # Semantics
//!
//! The pivot value is read from the middle index `lo + (hi - lo) / 2` of
//! the inclusive range `[lo, hi]`. Two pointers close in from either end,
//! skipping elements already on the correct side; each pointer test counts
//! one comparison against the middle index but is not highlighted or
//! paced. Out-of-place pairs are highlighted, paced, then swapped.
//!
//! The partition point `j` stays inside the left half, so recursion is on
//! `[lo, j]` and `[j+1, hi]`. This split differs from Lomuto's on purpose.

use sortvis_step::{Halted, SortContext, SortProcedure};

/// Quicksort, Hoare partition scheme.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuickSortHoare;

impl SortProcedure for QuickSortHoare {
    fn name(&self) -> &str {
        "quick_hoare"
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), Halted> {
        let n = ctx.len();
        sort_range(ctx, 0, n - 1)
    }
}

fn sort_range(ctx: &mut SortContext<'_>, lo: usize, hi: usize) -> Result<(), Halted> {
    if lo < hi {
        let pi = partition(ctx, lo, hi)?;
        sort_range(ctx, lo, pi)?;
        sort_range(ctx, pi + 1, hi)?;
    }
    ctx.mark_sorted(lo..hi + 1)
}

fn partition(ctx: &mut SortContext<'_>, lo: usize, hi: usize) -> Result<usize, Halted> {
    let mid = lo + (hi - lo) / 2;
    let pivot = ctx.get(mid);
    let (mut i, mut j) = (lo, hi);
    loop {
        loop {
            ctx.tally(i, mid)?;
            if ctx.get(i) >= pivot {
                break;
            }
            i += 1;
        }
        loop {
            ctx.tally(j, mid)?;
            if ctx.get(j) <= pivot {
                break;
            }
            j -= 1;
        }
        if i >= j {
            return Ok(j);
        }
        ctx.focus(i, j)?;
        ctx.swap(i, j)?;
        ctx.release(i, j)?;
        i += 1;
        j -= 1;
    }
}
