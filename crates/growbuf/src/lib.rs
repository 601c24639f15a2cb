//! Growable append-only buffers.
//!
//! [`GrowableBuffer`] is the extensible counterpart to a fixed-length
//! array: amortized O(1) append at the end, random-access read and
//! overwrite of live elements, removal from the end, and snapshots into
//! fixed-length sequences.
//!
//! # Architecture
//!
//! ```text
//! GrowableBuffer<T>
//! ├── store: Box<[Option<T>]>   (capacity slots, allocated on first add)
//! ├── count                     (live prefix [0, count))
//! └── initial_capacity          (size of the first allocation)
//!
//! convert  — build from / snapshot to fixed sequences (Arc<[T]>, Box<[T]>)
//! blob     — the same for raw bytes (GrowableBuffer<u8> <-> Blob)
//! ```
//!
//! # Growth
//!
//! A full store is replaced by one of `initial_capacity` slots (one slot
//! when the hint is zero) on first use and by one of twice its size
//! afterwards. Capacity never shrinks; [`GrowableBuffer::clear`] only
//! resets the count.
//!
//! # Failure classes
//!
//! Out-of-bounds `get`/`put`/indexing is a caller bug and panics before
//! anything is modified. The `try_*` and `*_option` siblings report the
//! same conditions as [`BufferError`] or `None`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod blob;
pub mod buffer;
pub mod config;
pub mod convert;
pub mod error;
pub mod iter;

// Public re-exports for the primary API surface.
pub use blob::Blob;
pub use buffer::GrowableBuffer;
pub use config::BufferConfig;
pub use error::BufferError;
pub use iter::{IntoIter, Iter};
