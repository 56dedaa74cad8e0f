//! Top-down merge sort.
//!
//! # Semantics
//!
//! Splits `[l, r]` at `m = l + (r - l) / 2`, sorts `[l, m]` and `[m+1, r]`,
//! then merges them through two scratch buffers. Ties take the left run
//! (`L[i] <= R[j]`), which makes the sort stable.
//!
//! Each merge writes back with [`overwrite`](SortContext::overwrite) inside
//! an atomic region: between the first and last write of a merge the
//! array holds a duplicate in place of a value still sitting in a buffer.
//! The whole array is marked once the top-level merge returns.

use sortvis_core::Value;
use sortvis_step::{Halted, SortContext, SortProcedure};

/// Stable top-down merge sort.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeSort;

impl SortProcedure for MergeSort {
    fn name(&self) -> &str {
        "merge"
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), Halted> {
        let n = ctx.len();
        sort_range(ctx, 0, n - 1)?;
        ctx.mark_all_sorted()
    }
}

fn sort_range(ctx: &mut SortContext<'_>, l: usize, r: usize) -> Result<(), Halted> {
    if l >= r {
        return Ok(());
    }
    let m = l + (r - l) / 2;
    sort_range(ctx, l, m)?;
    sort_range(ctx, m + 1, r)?;
    merge(ctx, l, m, r)
}

fn merge(ctx: &mut SortContext<'_>, l: usize, m: usize, r: usize) -> Result<(), Halted> {
    let left: Vec<Value> = ctx.values()[l..=m].to_vec();
    let right: Vec<Value> = ctx.values()[m + 1..=r].to_vec();
    let plan = merge_plan(&left, &right, |&v| v);

    ctx.atomic(|ctx| {
        for (k, take) in (l..).zip(plan) {
            let value = *take.source(&left, &right);
            match take {
                Take::Left { i, j } | Take::Right { i, j } => {
                    let (li, rj) = (l + i, m + 1 + j);
                    ctx.compare(li, rj)?;
                    ctx.overwrite(k, value)?;
                    ctx.release(li, rj)?;
                }
                Take::LeftTail(_) | Take::RightTail(_) => ctx.overwrite(k, value)?,
            }
        }
        Ok(())
    })
}

/// Where one output slot of a merge comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Take {
    /// `left[i]` won its comparison with `right[j]`, ties included.
    Left { i: usize, j: usize },
    /// `right[j]` was strictly smaller than `left[i]`.
    Right { i: usize, j: usize },
    /// `left[i]`, copied after the right run ran out.
    LeftTail(usize),
    /// `right[j]`, copied after the left run ran out.
    RightTail(usize),
}

impl Take {
    fn source<'a, T>(self, left: &'a [T], right: &'a [T]) -> &'a T {
        match self {
            Self::Left { i, .. } | Self::LeftTail(i) => &left[i],
            Self::Right { j, .. } | Self::RightTail(j) => &right[j],
        }
    }
}

/// Output order of a stable merge of two sorted runs, by `key`.
fn merge_plan<T, K: Ord>(left: &[T], right: &[T], key: impl Fn(&T) -> K) -> Vec<Take> {
    let mut plan = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if key(&left[i]) <= key(&right[j]) {
            plan.push(Take::Left { i, j });
            i += 1;
        } else {
            plan.push(Take::Right { i, j });
            j += 1;
        }
    }
    plan.extend((i..left.len()).map(Take::LeftTail));
    plan.extend((j..right.len()).map(Take::RightTail));
    plan
}
