//! Test utilities for growbuf development.
//!
//! Provides tracing-based logging initialization for tests and seeded
//! fixtures ([`OpStream`], [`seeded_bytes`]) for model-based testing.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::Once;

pub use fixtures::{seeded_bytes, Op, OpStream};

static INIT_LOGGING: Once = Once::new();

/// Default seed used by the fixture helpers.
pub const DEFAULT_TEST_SEED: u64 = 0xDEAD_BEEF;

/// Initialize test logging with trace-level output.
///
/// Safe to call multiple times; only initializes once.
pub fn init_test_logging() {
    init_test_logging_with_level(tracing::Level::TRACE);
}

/// Initialize test logging with a custom level.
///
/// The first call wins; later calls are no-ops.
pub fn init_test_logging_with_level(level: tracing::Level) {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_test_writer()
            .with_target(true)
            .with_ansi(false)
            .try_init();
    });
}
