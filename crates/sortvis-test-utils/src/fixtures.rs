//! Reusable inputs and procedures for sortvis tests.
//!
//! Input shapes that stress different paths:
//!
//! - [`sorted`] / [`reversed`]: best and worst case for the quadratic sorts
//!   and the degenerate pivot case for Lomuto.
//! - [`few_unique`] and [`all_equal`]: duplicate handling (cycle sort's
//!   equal-skip, Hoare's pointer stops, bucket sort's single bucket).
//! - [`shapes`]: all of the above plus a pseudo-random mix, by name.
//!
//! And two procedures for engine tests: [`PanickingSort`] and
//! [`SlowSort`].

use sortvis_core::Value;
use sortvis_step::{Halted, SortContext, SortProcedure};

/// `1..=n`.
pub fn sorted(n: usize) -> Vec<Value> {
    (1..=n as Value).collect()
}

/// `n..=1`.
pub fn reversed(n: usize) -> Vec<Value> {
    (1..=n as Value).rev().collect()
}

/// `n` copies of `v`.
pub fn all_equal(n: usize, v: Value) -> Vec<Value> {
    vec![v; n]
}

/// Values cycling through `1..=3`, starting high.
pub fn few_unique(n: usize) -> Vec<Value> {
    (0..n).map(|i| 3 - (i % 3) as Value).collect()
}

/// A fixed pseudo-random sequence in `1..=100` (LCG, seed 7).
pub fn scrambled(n: usize) -> Vec<Value> {
    let mut state: u32 = 7;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) % 100 + 1
        })
        .collect()
}

/// Every fixture shape at length `n`, tagged with a name for messages.
pub fn shapes(n: usize) -> Vec<(&'static str, Vec<Value>)> {
    vec![
        ("sorted", sorted(n)),
        ("reversed", reversed(n)),
        ("all_equal", all_equal(n, 4)),
        ("few_unique", few_unique(n)),
        ("scrambled", scrambled(n)),
    ]
}

/// Panics after emitting one swap. For producer-panic propagation tests.
pub struct PanickingSort;

impl SortProcedure for PanickingSort {
    fn name(&self) -> &str {
        "panicking"
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), Halted> {
        if ctx.len() > 1 {
            ctx.swap(0, 1)?;
        }
        panic!("PanickingSort: deliberate failure");
    }
}

/// Compares every pair `rounds` times without moving anything, then
/// marks the array. Produces a long, paced, side-effect-free run for
/// cancellation tests.
pub struct SlowSort {
    pub rounds: usize,
}

impl SortProcedure for SlowSort {
    fn name(&self) -> &str {
        "slow"
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), Halted> {
        let n = ctx.len();
        for _ in 0..self.rounds {
            for i in 1..n {
                ctx.compare(i - 1, i)?;
                ctx.release(i - 1, i)?;
            }
        }
        ctx.mark_all_sorted()
    }
}
