//! Counting sort.
//!
//! Tallies each value's offset from the minimum, prefix-sums the tally,
//! and places elements into an output buffer scanning right to left so
//! equal keys keep their order. The buffer is written back one
//! [`overwrite`](SortContext::overwrite) per index.
//!
//! The tally table has `max - min + 1` slots. When that spread dwarfs the
//! input (`[0, 4_000_000_000]` would need billions of slots) the tally is
//! kept sparse in a `BTreeMap` instead; the output, and so every emitted
//! step, is the same.

use std::collections::BTreeMap;

use sortvis_core::Value;
use sortvis_step::{Halted, SortContext, SortProcedure};

use crate::dense_table_fits;

/// Stable counting sort over the value range.
#[derive(Clone, Copy, Debug, Default)]
pub struct CountingSort;

impl SortProcedure for CountingSort {
    fn name(&self) -> &str {
        "counting"
    }

    fn paced(&self) -> bool {
        false
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), Halted> {
        let values = ctx.values();
        let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
            return Ok(());
        };
        let slots = (max - min) as usize + 1;
        let output = if dense_table_fits(slots, values.len()) {
            dense(values, min, slots)
        } else {
            sparse(values)
        };

        for (i, v) in output.into_iter().enumerate() {
            ctx.overwrite(i, v)?;
        }
        ctx.mark_all_sorted()
    }
}

/// Prefix-summed tally over `slots` offsets from `min`, placed right to left.
fn dense(values: &[Value], min: Value, slots: usize) -> Vec<Value> {
    let offset = |v: Value| (v - min) as usize;
    let mut count = vec![0usize; slots];
    for &v in values {
        count[offset(v)] += 1;
    }
    for k in 1..count.len() {
        count[k] += count[k - 1];
    }
    let mut output = vec![0; values.len()];
    for &v in values.iter().rev() {
        count[offset(v)] -= 1;
        output[count[offset(v)]] = v;
    }
    output
}

/// Tally of distinct values only, expanded in key order.
fn sparse(values: &[Value]) -> Vec<Value> {
    let mut count: BTreeMap<Value, usize> = BTreeMap::new();
    for &v in values {
        *count.entry(v).or_default() += 1;
    }
    count
        .into_iter()
        .flat_map(|(v, n)| std::iter::repeat_n(v, n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::run;
    use sortvis_core::Step;

    #[test]
    fn sorts_without_comparisons() {
        let (array, log) = run(&CountingSort, &[4, 2, 2, 8, 3, 3, 1]);
        assert_eq!(array.values(), &[1, 2, 2, 3, 3, 4, 8]);
        assert_eq!(array.counters().comparisons, 0);
        assert_eq!(array.counters().swaps, 7);
        assert_eq!(log.suspensions(), 0);
    }

    #[test]
    fn overwrites_every_index_in_order() {
        let (_, log) = run(&CountingSort, &[3, 1, 2]);
        let writes: Vec<_> = log
            .steps()
            .filter_map(|s| match s {
                Step::Overwrite { index, value } => Some((*index, *value)),
                _ => None,
            })
            .collect();
        assert_eq!(writes, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn wide_spread_uses_a_sparse_tally() {
        let (array, log) = run(&CountingSort, &[4_000_000_000, 0, 7, 4_000_000_000]);
        assert_eq!(array.values(), &[0, 7, 4_000_000_000, 4_000_000_000]);
        assert_eq!(array.counters().swaps, 4);
        assert_eq!(log.steps().last(), Some(&Step::MarkSorted(0..4)));
    }

    #[test]
    fn dense_and_sparse_tallies_agree() {
        let values = [9, 3, 3, 100, 1, 57, 3];
        assert_eq!(dense(&values, 1, 100), sparse(&values));
    }

    #[test]
    fn single_value_range() {
        let (array, _) = run(&CountingSort, &[9, 9, 9]);
        assert_eq!(array.values(), &[9, 9, 9]);
    }
}
