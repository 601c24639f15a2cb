//! Buffer configuration parameters.

use crate::error::BufferError;

/// Configuration for a [`GrowableBuffer`](crate::GrowableBuffer).
///
/// Only consulted when the first backing store is allocated; later growth
/// always doubles the current capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferConfig {
    /// Number of slots allocated by the first `add`.
    ///
    /// Default: 0, which allocates a single slot on first use.
    pub initial_capacity: usize,
}

impl BufferConfig {
    /// Default initial capacity hint.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

    /// Create a config with the given initial capacity hint.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Check that the first allocation for element type `T` is representable.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::CapacityOverflow`] if `initial_capacity` slots
    /// of `T` would exceed `isize::MAX` bytes.
    pub fn validate<T>(&self) -> Result<(), BufferError> {
        check_slots::<T>(self.initial_capacity)
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

/// Reject slot counts whose store size overflows `isize::MAX` bytes.
pub(crate) fn check_slots<T>(slots: usize) -> Result<(), BufferError> {
    let slot_bytes = std::mem::size_of::<Option<T>>();
    match slots.checked_mul(slot_bytes) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(()),
        _ => Err(BufferError::CapacityOverflow { requested: slots }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lazy_single_slot() {
        let config = BufferConfig::default();
        assert_eq!(config.initial_capacity, 0);
    }

    #[test]
    fn reasonable_capacity_validates() {
        assert!(BufferConfig::new(1024).validate::<u64>().is_ok());
    }

    #[test]
    fn huge_capacity_is_rejected() {
        let config = BufferConfig::new(usize::MAX / 2);
        assert_eq!(
            config.validate::<u64>(),
            Err(BufferError::CapacityOverflow {
                requested: usize::MAX / 2
            })
        );
    }

    #[test]
    fn zero_capacity_always_validates() {
        assert!(BufferConfig::new(0).validate::<[u8; 4096]>().is_ok());
    }
}
