//! Hashing of event sequences for determinism checks.
//!
//! Uses FNV-1a over a fixed little-endian encoding of each event. Not
//! cryptographically secure; two runs with equal fingerprints emitted the
//! same events with overwhelming probability.

use sortvis_core::Step;

use crate::event::Event;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

fn hash_step(mut hash: u64, step: &Step) -> u64 {
    match step {
        Step::Compare(i, j) => {
            hash = fnv1a_byte(hash, 0x10);
            hash = fnv1a_u64(hash, *i as u64);
            fnv1a_u64(hash, *j as u64)
        }
        Step::Swap(i, j) => {
            hash = fnv1a_byte(hash, 0x11);
            hash = fnv1a_u64(hash, *i as u64);
            fnv1a_u64(hash, *j as u64)
        }
        Step::Overwrite { index, value } => {
            hash = fnv1a_byte(hash, 0x12);
            hash = fnv1a_u64(hash, *index as u64);
            fnv1a_u64(hash, u64::from(*value))
        }
        Step::MarkSorted(range) => {
            hash = fnv1a_byte(hash, 0x13);
            hash = fnv1a_u64(hash, range.start as u64);
            fnv1a_u64(hash, range.end as u64)
        }
        Step::Highlight(ix) | Step::Unhighlight(ix) => {
            let tag = if matches!(step, Step::Highlight(_)) { 0x14 } else { 0x15 };
            hash = fnv1a_byte(hash, tag);
            // Fold in the length so [a, b] and [a] [b] never collide.
            hash = fnv1a_u64(hash, ix.len() as u64);
            for &i in ix {
                hash = fnv1a_u64(hash, i as u64);
            }
            hash
        }
    }
}

/// Fingerprint a complete event sequence.
///
/// Returns `FNV_OFFSET` for an empty sequence.
pub fn fingerprint(events: &[Event]) -> u64 {
    events.iter().fold(FNV_OFFSET, |hash, event| match event {
        Event::Step(step) => hash_step(hash, step),
        Event::Suspend => fnv1a_byte(hash, 0x01),
        Event::BeginAtomic => fnv1a_byte(hash, 0x02),
        Event::EndAtomic => fnv1a_byte(hash, 0x03),
    })
}
