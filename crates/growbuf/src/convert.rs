//! Conversions between buffers and fixed-length sequences.
//!
//! Everything here goes through the buffer's public operations: builders
//! size the first allocation to the input length and then `add` each
//! element, so a built buffer never reallocates.

use std::sync::Arc;

use crate::buffer::GrowableBuffer;

/// Build a buffer holding a clone of each element of `elems`, in order.
pub fn build_from_fixed<T: Clone>(elems: &[T]) -> GrowableBuffer<T> {
    let mut buf = GrowableBuffer::new(elems.len());
    for elem in elems {
        buf.add(elem.clone());
    }
    tracing::debug!(len = elems.len(), "built buffer from fixed sequence");
    buf
}

/// Build a buffer by moving each element out of `elems`, in order.
pub fn build_from_mutable_fixed<T>(elems: Box<[T]>) -> GrowableBuffer<T> {
    let len = elems.len();
    let mut buf = GrowableBuffer::new(len);
    for elem in elems.into_vec() {
        buf.add(elem);
    }
    tracing::debug!(len, "built buffer from mutable fixed sequence");
    buf
}

/// Immutable snapshot of the live elements of `buf`.
pub fn to_fixed<T: Clone>(buf: &GrowableBuffer<T>) -> Arc<[T]> {
    buf.to_fixed()
}

/// Mutable snapshot of the live elements of `buf`.
pub fn to_mutable_fixed<T: Clone>(buf: &GrowableBuffer<T>) -> Box<[T]> {
    buf.to_mutable_fixed()
}
