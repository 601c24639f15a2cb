//! Buffer error types.

use std::error::Error;
use std::fmt;

/// Errors reported by the checked buffer operations.
///
/// The unchecked operations (`get`, `put`, indexing, `add`) panic with the
/// same message this type renders through [`Display`](fmt::Display).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// An index at or past the number of live elements.
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// Number of live elements at the time of the request.
        len: usize,
    },
    /// A capacity whose backing store would exceed `isize::MAX` bytes.
    CapacityOverflow {
        /// Number of element slots that were requested.
        requested: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index out of bounds: index {index}, len {len}")
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} slots requested")
            }
        }
    }
}

impl Error for BufferError {}
