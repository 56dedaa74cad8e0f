//! Cycle sort.
//!
//! For each cycle start, the item's final slot is the start plus the
//! number of strictly smaller elements after it. The item is written
//! there, the displaced value becomes the new item, and placement repeats
//! until the cycle closes back at the start. Slots already holding an
//! equal value are skipped, so duplicates terminate.
//!
//! While a cycle is open the array holds one value twice and is missing
//! the item in hand; each cycle's writes therefore run inside an atomic
//! region.

use sortvis_core::Value;
use sortvis_step::{Halted, SortContext, SortProcedure};

/// Write-minimal cycle sort.
#[derive(Clone, Copy, Debug, Default)]
pub struct CycleSort;

impl SortProcedure for CycleSort {
    fn name(&self) -> &str {
        "cycle"
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), Halted> {
        let n = ctx.len();
        for start in 0..n - 1 {
            let mut item = ctx.get(start);
            let mut pos = rank(ctx, start, item)?;
            if pos == start {
                continue;
            }
            ctx.atomic(|ctx| {
                pos = skip_equal(ctx, pos, item);
                item = place(ctx, pos, item)?;
                while pos != start {
                    pos = rank(ctx, start, item)?;
                    pos = skip_equal(ctx, pos, item);
                    if item != ctx.get(pos) {
                        item = place(ctx, pos, item)?;
                    }
                }
                Ok(())
            })?;
        }
        ctx.mark_all_sorted()
    }
}

/// `start` plus the count of elements after `start` smaller than `item`.
fn rank(ctx: &mut SortContext<'_>, start: usize, item: Value) -> Result<usize, Halted> {
    let mut pos = start;
    for i in start + 1..ctx.len() {
        ctx.compare(i, start)?;
        if ctx.get(i) < item {
            pos += 1;
        }
        ctx.release(i, start)?;
    }
    Ok(pos)
}

fn skip_equal(ctx: &SortContext<'_>, mut pos: usize, item: Value) -> usize {
    while ctx.get(pos) == item {
        pos += 1;
    }
    pos
}

/// Write `item` to `pos`, returning the value it displaced.
fn place(ctx: &mut SortContext<'_>, pos: usize, item: Value) -> Result<Value, Halted> {
    let displaced = ctx.get(pos);
    ctx.overwrite(pos, item)?;
    Ok(displaced)
}
