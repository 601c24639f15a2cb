//! The growable buffer and its doubling growth strategy.
//!
//! A [`GrowableBuffer`] keeps a logical element count alongside a backing
//! store of `capacity` slots. The store is allocated lazily on the first
//! [`add`](GrowableBuffer::add), sized by the construction-time hint, and
//! doubled whenever an append finds it full. Slots at or past the count are
//! never exposed: they are vacant, or hold values left behind by
//! [`clear`](GrowableBuffer::clear) until the next append overwrites them.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::sync::Arc;

use crate::config::{check_slots, BufferConfig};
use crate::error::BufferError;
use crate::iter::{IntoIter, Iter};

/// A mutable, append-only sequence with amortized O(1) `add`.
///
/// Supports push/pop at the end, random-access read and overwrite of live
/// elements, and snapshots into fixed-length sequences. There is no
/// insertion or removal in the middle.
///
/// # Example
///
/// ```
/// use growbuf::GrowableBuffer;
///
/// let mut buf = GrowableBuffer::new(0);
/// buf.add(10);
/// buf.add(20);
/// buf.add(30);
/// assert_eq!(buf.size(), 3);
/// assert_eq!(*buf.get(1), 20);
/// assert_eq!(buf.remove_last(), Some(30));
/// assert_eq!(buf.size(), 2);
/// ```
pub struct GrowableBuffer<T> {
    /// Backing slots. `store.len()` is the capacity.
    store: Box<[Option<T>]>,
    /// Number of live elements; slots `[0, count)` are always `Some`.
    count: usize,
    /// Size of the first allocation. Ignored once the store is non-empty.
    initial_capacity: usize,
}

impl<T> GrowableBuffer<T> {
    /// Create an empty buffer. No storage is allocated until the first `add`.
    ///
    /// `initial_capacity` sizes that first allocation; zero means one slot.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            store: Box::default(),
            count: 0,
            initial_capacity,
        }
    }

    /// Create an empty buffer from a validated [`BufferConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::CapacityOverflow`] if the configured initial
    /// capacity cannot be allocated for `T`.
    pub fn with_config(config: BufferConfig) -> Result<Self, BufferError> {
        config.validate::<T>()?;
        Ok(Self::new(config.initial_capacity))
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.count
    }

    /// Number of live elements. Same as [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the buffer holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of allocated slots. Zero until the first `add`.
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// Append `elem` as the new last element, growing the store if full.
    ///
    /// # Panics
    ///
    /// Panics if the grown store would exceed `isize::MAX` bytes.
    pub fn add(&mut self, elem: T) {
        if let Err(err) = self.try_add(elem) {
            panic!("{err}");
        }
    }

    /// Append `elem`, reporting capacity overflow instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::CapacityOverflow`] if the store is full and
    /// its next size is not representable. The buffer is left unchanged.
    pub fn try_add(&mut self, elem: T) -> Result<(), BufferError> {
        if self.count == self.store.len() {
            self.grow()?;
        }
        self.store[self.count] = Some(elem);
        self.count += 1;
        Ok(())
    }

    /// Remove and return the last element, or `None` if the buffer is empty.
    ///
    /// Capacity is never released.
    pub fn remove_last(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        self.store[self.count].take()
    }

    /// Reset the count to zero. Capacity is retained.
    ///
    /// Former elements stay in their slots until an `add` overwrites them
    /// or the buffer is dropped.
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Borrow the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`. Use [`get_option`](Self::get_option)
    /// or [`try_get`](Self::try_get) when the index is not known to be live.
    pub fn get(&self, index: usize) -> &T {
        match self.try_get(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }

    /// Borrow the element at `index`, or `None` if it is not live.
    pub fn get_option(&self, index: usize) -> Option<&T> {
        if index < self.count {
            self.store[index].as_ref()
        } else {
            None
        }
    }

    /// Borrow the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::IndexOutOfBounds`] if `index >= self.size()`.
    pub fn try_get(&self, index: usize) -> Result<&T, BufferError> {
        self.get_option(index).ok_or(BufferError::IndexOutOfBounds {
            index,
            len: self.count,
        })
    }

    /// Mutably borrow the element at `index`, or `None` if it is not live.
    pub fn get_option_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.count {
            self.store[index].as_mut()
        } else {
            None
        }
    }

    /// Overwrite the live element at `index`.
    ///
    /// Only live indices are writable: allocated slots past the count are
    /// rejected even though they exist.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`. The buffer is not modified.
    pub fn put(&mut self, index: usize, elem: T) {
        if let Err(err) = self.try_put(index, elem) {
            panic!("{err}");
        }
    }

    /// Overwrite the live element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::IndexOutOfBounds`] if `index >= self.size()`.
    /// `elem` is dropped and the buffer is not modified.
    pub fn try_put(&mut self, index: usize, elem: T) -> Result<(), BufferError> {
        if index >= self.count {
            return Err(BufferError::IndexOutOfBounds {
                index,
                len: self.count,
            });
        }
        self.store[index] = Some(elem);
        Ok(())
    }

    /// Borrow the last live element.
    pub fn last(&self) -> Option<&T> {
        self.count.checked_sub(1).and_then(|i| self.get_option(i))
    }

    /// Iterate over the live elements in index order.
    ///
    /// Every call returns a fresh cursor starting at index 0.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.store[..self.count])
    }

    /// Replace the store with one of the next size, moving live elements over.
    fn grow(&mut self) -> Result<(), BufferError> {
        let old_capacity = self.store.len();
        let new_capacity = next_capacity(old_capacity, self.initial_capacity)?;
        check_slots::<T>(new_capacity)?;

        let mut next: Vec<Option<T>> = Vec::with_capacity(new_capacity);
        next.extend(self.store[..self.count].iter_mut().map(Option::take));
        next.resize_with(new_capacity, || None);
        self.store = next.into_boxed_slice();

        tracing::trace!(
            old_capacity,
            new_capacity,
            count = self.count,
            "grew buffer store"
        );
        Ok(())
    }
}

impl<T: Clone> GrowableBuffer<T> {
    /// Append a clone of every element of `other`, in order.
    ///
    /// Equivalent to calling [`add`](Self::add) for each element. `other`
    /// is not modified.
    pub fn append(&mut self, other: &GrowableBuffer<T>) {
        for elem in other.iter() {
            self.add(elem.clone());
        }
    }

    /// Snapshot the live elements into an immutable fixed-length sequence.
    ///
    /// The snapshot is independent of later mutation of the buffer.
    pub fn to_fixed(&self) -> Arc<[T]> {
        self.iter().cloned().collect()
    }

    /// Snapshot the live elements into a mutable fixed-length sequence.
    ///
    /// Writes to the result never reach the buffer, and vice versa.
    pub fn to_mutable_fixed(&self) -> Box<[T]> {
        self.iter().cloned().collect()
    }
}

/// Capacity to allocate when a store of `capacity` slots is full.
///
/// An unallocated store takes the construction hint (or a single slot when
/// the hint is zero); an allocated one doubles.
pub(crate) fn next_capacity(
    capacity: usize,
    initial_capacity: usize,
) -> Result<usize, BufferError> {
    match (capacity, initial_capacity) {
        (0, 0) => Ok(1),
        (0, hint) => Ok(hint),
        (cap, _) => cap
            .checked_mul(2)
            .ok_or(BufferError::CapacityOverflow { requested: cap }),
    }
}

impl<T> Default for GrowableBuffer<T> {
    fn default() -> Self {
        Self::new(BufferConfig::DEFAULT_INITIAL_CAPACITY)
    }
}

impl<T: Clone> Clone for GrowableBuffer<T> {
    fn clone(&self) -> Self {
        let mut store: Vec<Option<T>> = Vec::with_capacity(self.store.len());
        store.extend(self.iter().cloned().map(Some));
        store.resize_with(self.store.len(), || None);
        Self {
            store: store.into_boxed_slice(),
            count: self.count,
            initial_capacity: self.initial_capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Buffers compare by their live elements; capacity is ignored.
impl<T: PartialEq> PartialEq for GrowableBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GrowableBuffer<T> {}

impl<T> Index<usize> for GrowableBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for GrowableBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.count;
        match self.get_option_mut(index) {
            Some(elem) => elem,
            None => panic!("{}", BufferError::IndexOutOfBounds { index, len }),
        }
    }
}

impl<T> Extend<T> for GrowableBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.add(elem);
        }
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for GrowableBuffer<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for elem in iter {
            self.add(elem.clone());
        }
    }
}

impl<T> FromIterator<T> for GrowableBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut buf = Self::new(iter.size_hint().0);
        buf.extend(iter);
        buf
    }
}

impl<T> From<Vec<T>> for GrowableBuffer<T> {
    fn from(elems: Vec<T>) -> Self {
        crate::convert::build_from_mutable_fixed(elems.into_boxed_slice())
    }
}

impl<T: Clone> From<&[T]> for GrowableBuffer<T> {
    fn from(elems: &[T]) -> Self {
        crate::convert::build_from_fixed(elems)
    }
}

impl<'a, T> IntoIterator for &'a GrowableBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for GrowableBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let mut store = self.store.into_vec();
        store.truncate(self.count);
        IntoIter::new(store)
    }
}
