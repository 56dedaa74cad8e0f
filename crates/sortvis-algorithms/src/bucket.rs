//! Bucket sort.
//!
//! # Semantics
//!
//! Values are distributed into `(max - min) / width + 1` buckets, bucket
//! `(v - min) / width`. Each bucket is insertion-sorted privately (no
//! steps, no counters) and the buckets are concatenated in index order,
//! which is ascending value order. The result is written back one
//! [`overwrite`](SortContext::overwrite) per index.
//!
//! When the bucket count dwarfs the input, only non-empty buckets are
//! kept, in a `BTreeMap` keyed by bucket index. Iteration order and
//! output are unchanged.
//!
//! # Construction
//!
//! [`BucketSort::default()`] uses a width of 5.
//! [`BucketSort::with_width`] rejects a zero width.

use std::collections::BTreeMap;

use sortvis_core::Value;
use sortvis_step::{Halted, SortContext, SortProcedure};
use thiserror::Error;

use crate::dense_table_fits;

/// Default value span per bucket.
pub const DEFAULT_BUCKET_WIDTH: Value = 5;

/// Error returned by [`BucketSort::with_width`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("bucket width must be at least 1")]
pub struct BucketWidthError;

/// Fixed-width bucket sort.
#[derive(Clone, Copy, Debug)]
pub struct BucketSort {
    width: Value,
}

impl BucketSort {
    /// A bucket sort whose buckets each span `width` values.
    pub fn with_width(width: Value) -> Result<Self, BucketWidthError> {
        if width == 0 {
            return Err(BucketWidthError);
        }
        Ok(Self { width })
    }

    /// Value span per bucket.
    pub fn width(&self) -> Value {
        self.width
    }
}

impl Default for BucketSort {
    fn default() -> Self {
        Self {
            width: DEFAULT_BUCKET_WIDTH,
        }
    }
}

impl SortProcedure for BucketSort {
    fn name(&self) -> &str {
        "bucket"
    }

    fn paced(&self) -> bool {
        false
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), Halted> {
        let values = ctx.values();
        let Some(&min) = values.iter().min() else {
            return Ok(());
        };
        let max = values.iter().copied().max().unwrap_or(min);
        let index = |v: Value| ((v - min) / self.width) as usize;
        let count = index(max) + 1;

        let buckets: Vec<Vec<Value>> = if dense_table_fits(count, values.len()) {
            let mut buckets = vec![Vec::new(); count];
            for &v in values {
                buckets[index(v)].push(v);
            }
            buckets
        } else {
            let mut occupied: BTreeMap<usize, Vec<Value>> = BTreeMap::new();
            for &v in values {
                occupied.entry(index(v)).or_default().push(v);
            }
            occupied.into_values().collect()
        };

        let sorted: Vec<Value> = buckets
            .into_iter()
            .flat_map(|mut bucket| {
                insertion_sort(&mut bucket);
                bucket
            })
            .collect();
        for (i, v) in sorted.into_iter().enumerate() {
            ctx.overwrite(i, v)?;
        }
        ctx.mark_all_sorted()
    }
}

fn insertion_sort(bucket: &mut [Value]) {
    for i in 1..bucket.len() {
        let mut j = i;
        while j > 0 && bucket[j] < bucket[j - 1] {
            bucket.swap(j, j - 1);
            j -= 1;
        }
    }
}
