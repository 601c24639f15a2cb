//! Benchmark inputs for growbuf.
//!
//! - [`seeded_values`]: deterministic element streams
//! - [`filled_buffer`]: a buffer grown from zero capacity via `add`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use growbuf::GrowableBuffer;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Element counts used across the benchmark suite.
pub const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Generate `n` deterministic `u64` values from `seed`.
pub fn seeded_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u64()).collect()
}

/// Build a buffer of `n` seeded values, starting from an unallocated store.
pub fn filled_buffer(n: usize, seed: u64) -> GrowableBuffer<u64> {
    let mut buf = GrowableBuffer::new(0);
    for v in seeded_values(n, seed) {
        buf.add(v);
    }
    buf
}
