//! Iterators over the live elements of a buffer.

use std::iter::FusedIterator;
use std::slice;
use std::vec;

/// Borrowing iterator returned by [`GrowableBuffer::iter`](crate::GrowableBuffer::iter).
///
/// Yields the live elements in index order. The cursor is owned by the
/// iterator, so independent iterators over the same buffer never interfere.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// `live` must be the `[0, count)` prefix of the store.
    pub(crate) fn new(live: &'a [Option<T>]) -> Self {
        Self { slots: live.iter() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.slots.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator produced by consuming a buffer.
#[derive(Debug)]
pub struct IntoIter<T> {
    slots: vec::IntoIter<Option<T>>,
}

impl<T> IntoIter<T> {
    /// `live` must hold exactly the live slots, all occupied.
    pub(crate) fn new(live: Vec<Option<T>>) -> Self {
        Self {
            slots: live.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.slots.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.slots.next_back().flatten()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
