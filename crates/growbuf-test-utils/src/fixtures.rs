//! Seeded fixtures for model-based buffer tests.
//!
//! - [`OpStream`] — deterministic stream of buffer operations.
//! - [`seeded_bytes`] — deterministic byte blobs.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One buffer operation, applied by the test to both the buffer and a model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Add(u32),
    RemoveLast,
    Put { index: usize, value: u32 },
    Get(usize),
    Clear,
    Snapshot,
}

/// Deterministic generator of [`Op`]s.
///
/// Weighted towards `Add` so buffers grow through several doublings
/// before a `Clear` resets them. Indices are drawn from a small range so
/// both live and out-of-bounds positions are exercised.
pub struct OpStream {
    rng: ChaCha8Rng,
    max_index: usize,
}

impl OpStream {
    pub fn new(seed: u64, max_index: usize) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            max_index: max_index.max(1),
        }
    }

    fn index(&mut self) -> usize {
        self.rng.next_u32() as usize % self.max_index
    }
}

impl Iterator for OpStream {
    type Item = Op;

    fn next(&mut self) -> Option<Op> {
        let op = match self.rng.next_u32() % 100 {
            0..=54 => Op::Add(self.rng.next_u32()),
            55..=69 => Op::RemoveLast,
            70..=79 => {
                let index = self.index();
                Op::Put {
                    index,
                    value: self.rng.next_u32(),
                }
            }
            80..=92 => Op::Get(self.index()),
            93..=96 => Op::Snapshot,
            _ => Op::Clear,
        };
        Some(op)
    }
}

/// `len` pseudo-random bytes derived from `seed`.
pub fn seeded_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let a: Vec<Op> = OpStream::new(7, 16).take(100).collect();
        let b: Vec<Op> = OpStream::new(7, 16).take(100).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn indices_respect_bound() {
        for op in OpStream::new(1, 4).take(500) {
            match op {
                Op::Put { index, .. } | Op::Get(index) => assert!(index < 4),
                _ => {}
            }
        }
    }

    #[test]
    fn seeded_bytes_are_deterministic() {
        assert_eq!(seeded_bytes(3, 64), seeded_bytes(3, 64));
        assert_eq!(seeded_bytes(3, 64).len(), 64);
    }
}
