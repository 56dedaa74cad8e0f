//! Benchmark inputs for sortvis.
//!
//! - [`random_input`]: seeded uniform values in `1..=100`, the shape a
//!   host's "new array" button produces.
//! - [`reversed_input`]: worst case for the quadratic sorts.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sortvis_core::Value;
use sortvis_engine::ArrayConfig;

/// `size` seeded random values in `1..=100`.
pub fn random_input(size: usize, seed: u64) -> Vec<Value> {
    ArrayConfig {
        size,
        seed: Some(seed),
        ..ArrayConfig::default()
    }
    .generate()
}

/// `size..=1`.
pub fn reversed_input(size: usize) -> Vec<Value> {
    (1..=size as Value).rev().collect()
}

/// Input sizes every benchmark sweeps.
pub const SIZES: [usize; 3] = [16, 64, 256];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_have_requested_size() {
        for size in SIZES {
            assert_eq!(random_input(size, 1).len(), size);
            assert_eq!(reversed_input(size).len(), size);
        }
        assert_eq!(random_input(8, 3), random_input(8, 3));
    }
}
