//! LSD radix sort, base 10.
//!
//! One stable counting pass per decimal digit, for `exp = 1, 10, 100, ..`
//! while `max / exp > 0`. Each pass rewrites the whole array. Values are
//! unsigned, so there is no sign digit to handle.

use sortvis_core::Value;
use sortvis_step::{Halted, SortContext, SortProcedure};

/// Least-significant-digit radix sort.
#[derive(Clone, Copy, Debug, Default)]
pub struct RadixSort;

impl SortProcedure for RadixSort {
    fn name(&self) -> &str {
        "radix"
    }

    fn paced(&self) -> bool {
        false
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), Halted> {
        let max = u64::from(ctx.values().iter().copied().max().unwrap_or(0));
        let mut exp: u64 = 1;
        while max / exp > 0 {
            digit_pass(ctx, exp)?;
            exp *= 10;
        }
        ctx.mark_all_sorted()
    }
}

fn digit_pass(ctx: &mut SortContext<'_>, exp: u64) -> Result<(), Halted> {
    let digit = |v: Value| ((u64::from(v) / exp) % 10) as usize;
    let values = ctx.values();

    let mut count = [0usize; 10];
    for &v in values {
        count[digit(v)] += 1;
    }
    for d in 1..10 {
        count[d] += count[d - 1];
    }
    let mut output = vec![0; values.len()];
    for &v in values.iter().rev() {
        count[digit(v)] -= 1;
        output[count[digit(v)]] = v;
    }

    for (i, v) in output.into_iter().enumerate() {
        ctx.overwrite(i, v)?;
    }
    Ok(())
}
