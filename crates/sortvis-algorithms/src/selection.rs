//! Selection sort.
//!
//! For each `i`, scans `i+1..n` for the minimum and swaps it into `i` if it
//! is not already there. Index `i` is marked as soon as the swap decision
//! is made; the last index is marked once the outer loop finishes.

use sortvis_step::{Halted, SortContext, SortProcedure};

/// Minimum-selection sort.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionSort;

impl SortProcedure for SelectionSort {
    fn name(&self) -> &str {
        "selection"
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), Halted> {
        let n = ctx.len();
        for i in 0..n - 1 {
            let mut min = i;
            for j in i + 1..n {
                ctx.compare(j, min)?;
                let highlighted = min;
                if ctx.get(j) < ctx.get(min) {
                    min = j;
                }
                ctx.release(j, highlighted)?;
            }
            if min != i {
                ctx.swap(i, min)?;
            }
            ctx.mark(i)?;
        }
        ctx.mark(n - 1)
    }
}
