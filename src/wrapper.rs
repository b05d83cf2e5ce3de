use std::fmt;

use crate::backend::{active_backend, Backend};
use crate::engine;
use crate::error::HeapError;

/// A max-heap owning its sequence.
///
/// Thin wrapper over the functional API: every method forwards to the active backend, on the
/// owned `Vec`.
///
/// ```
/// use maxheap::MaxHeap;
///
/// let mut heap = MaxHeap::from(vec![3, 1, 6, 5, 2, 4]);
/// heap.push(7);
/// assert_eq!(heap.peek(), Ok(&7));
/// assert_eq!(heap.pop(), Ok(7));
/// assert_eq!(heap.len(), 6);
/// ```
#[derive(Clone)]
pub struct MaxHeap<T> {
    data: Vec<T>,
    backend: Backend,
}

impl<T> MaxHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_backend(active_backend(), capacity)
    }

    /// Creates an empty heap serviced by `backend` instead of the active backend.
    pub fn with_backend(backend: Backend, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            backend,
        }
    }

    /// The backend servicing this heap.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the greatest element, *O*(1).
    pub fn peek(&self) -> Result<&T, HeapError> {
        engine::peek(&self.data)
    }

    /// The underlying sequence, in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the underlying sequence.
    ///
    /// Edits made through it can break the heap invariant, call [`MaxHeap::rebuild`] afterwards.
    pub fn as_mut_vec(&mut self) -> &mut Vec<T> {
        &mut self.data
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Releases the underlying sequence, in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Ord> MaxHeap<T> {
    /// Takes ownership of `data` and heapifies it, *O*(*n*).
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_vec_with_backend(active_backend(), data)
    }

    pub fn from_vec_with_backend(backend: Backend, mut data: Vec<T>) -> Self {
        backend.heapify(&mut data);

        Self { data, backend }
    }

    pub fn push(&mut self, item: T) {
        self.backend.push(&mut self.data, item);
    }

    pub fn pop(&mut self) -> Result<T, HeapError> {
        self.backend.pop(&mut self.data)
    }

    pub fn pushpop(&mut self, item: T) -> T {
        self.backend.pushpop(&mut self.data, item)
    }

    pub fn replace(&mut self, item: T) -> Result<T, HeapError> {
        self.backend.replace(&mut self.data, item)
    }

    /// Re-establishes the invariant after edits through [`MaxHeap::as_mut_vec`].
    pub fn rebuild(&mut self) {
        self.backend.heapify(&mut self.data);
    }

    pub fn is_valid(&self) -> bool {
        engine::is_heap(&self.data)
    }

    /// Drains the heap, greatest element first.
    pub fn into_descending_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Ok(item) = self.pop() {
            out.push(item);
        }

        out
    }
}

impl<T> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for MaxHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Ord> From<Vec<T>> for MaxHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for MaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> From<MaxHeap<T>> for Vec<T> {
    fn from(heap: MaxHeap<T>) -> Self {
        heap.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_descending() {
        let heap: MaxHeap<i32> = [3, 1, 6, 5, 2, 4].into_iter().collect();
        assert!(heap.is_valid());
        assert_eq!(heap.into_descending_vec(), [6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn debug_lists_heap_order() {
        let heap = MaxHeap::from(vec![1, 2, 3]);
        assert_eq!(format!("{heap:?}"), "[3, 2, 1]");
    }
}
