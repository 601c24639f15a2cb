//! Byte-blob helpers for `GrowableBuffer<u8>`.

use std::sync::Arc;

use crate::buffer::GrowableBuffer;

/// An immutable sequence of raw bytes.
pub type Blob = Arc<[u8]>;

/// Append each byte of `blob` to `buf`, in order.
pub fn append_blob(buf: &mut GrowableBuffer<u8>, blob: &[u8]) {
    buf.extend(blob);
}

/// Build a byte buffer sized to `blob` and holding its bytes.
pub fn build_from_blob(blob: &[u8]) -> GrowableBuffer<u8> {
    let mut buf = GrowableBuffer::new(blob.len());
    append_blob(&mut buf, blob);
    tracing::debug!(len = blob.len(), "built buffer from blob");
    buf
}

/// Snapshot the live bytes of `buf`.
pub fn to_blob(buf: &GrowableBuffer<u8>) -> Blob {
    buf.to_fixed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_byte_roundtrip() {
        let buf = build_from_blob(&[0x01, 0x02, 0x03]);
        assert_eq!(buf.size(), 3);
        assert_eq!(&*to_blob(&buf), &[0x01, 0x02, 0x03]);
    }

    #[test]
    fn append_blob_extends_existing_bytes() {
        let mut buf = build_from_blob(b"ab");
        append_blob(&mut buf, b"cd");
        assert_eq!(&*to_blob(&buf), b"abcd");
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn empty_blob_roundtrip() {
        let buf = build_from_blob(&[]);
        assert_eq!(buf.capacity(), 0);
        assert!(to_blob(&buf).is_empty());
    }

    #[test]
    fn blob_is_independent_of_buffer() {
        let mut buf = build_from_blob(b"xyz");
        let blob = to_blob(&buf);
        buf.put(0, b'!');
        buf.remove_last();
        assert_eq!(&*blob, b"xyz");
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn blob_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
                let blob = to_blob(&build_from_blob(&bytes));
                prop_assert_eq!(&*blob, bytes.as_slice());
            }
        }
    }
}
