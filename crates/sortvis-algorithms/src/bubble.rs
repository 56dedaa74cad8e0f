//! Bubble sort.
//!
//! Pass `i` walks `j` over `0..n-1-i`, comparing each adjacent pair and
//! swapping when out of order. After the pass, index `n-1-i` holds its
//! final value and is marked sorted. No early exit: the comparison count
//! is always `n(n-1)/2`.

use sortvis_step::{Halted, SortContext, SortProcedure};

/// Adjacent-swap bubble sort.
#[derive(Clone, Copy, Debug, Default)]
pub struct BubbleSort;

impl SortProcedure for BubbleSort {
    fn name(&self) -> &str {
        "bubble"
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), Halted> {
        let n = ctx.len();
        for i in 0..n {
            for j in 0..n - i - 1 {
                ctx.compare(j, j + 1)?;
                if ctx.get(j) > ctx.get(j + 1) {
                    ctx.swap(j, j + 1)?;
                }
                ctx.release(j, j + 1)?;
            }
            ctx.mark(n - i - 1)?;
        }
        Ok(())
    }
}
