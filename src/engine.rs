//! Heap operations on caller-owned sequences, for an explicit [`Backend`].
//!
//! The sequence encodes a complete binary tree: the children of index `i` live at `2i + 1` and
//! `2i + 2`. Every operation except [`Backend::heapify`] expects the sequence to satisfy the
//! max-heap invariant, `seq[parent] >= seq[child]`, and leaves it satisfied.
//!
//! Each comparison-using operation has an `Ord` form and a `_by` form taking a comparator. The
//! comparator must define a total order, otherwise the resulting order is unspecified, but the
//! sequence still holds the same elements.
//!
//! If the comparator panics, the panic propagates out of the operation. The sequence then holds
//! all elements it held, except one that was already moved out to be returned, and may violate
//! the invariant.

use std::cmp::Ordering;
use std::mem;

use crate::backend::Backend;
use crate::error::HeapError;

impl Backend {
    /// Restores the invariant for the element at `pos` relative to its ancestors.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= heap.len()`.
    pub fn sift_up<T: Ord>(self, heap: &mut [T], pos: usize) {
        self.sift_up_impl(heap, pos, &mut T::lt);
    }

    pub fn sift_up_by<T, F>(self, heap: &mut [T], pos: usize, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sift_up_impl(heap, pos, &mut |a, b| compare(a, b) == Ordering::Less);
    }

    /// Restores the invariant for the element at `pos` relative to its descendants in
    /// `heap[..len]`. On equal children the left one is preferred.
    ///
    /// # Panics
    ///
    /// Panics if `len > heap.len()`. A `pos` at or beyond `len` is a no-op.
    pub fn sift_down<T: Ord>(self, heap: &mut [T], pos: usize, len: usize) {
        self.sift_down_impl(heap, pos, len, &mut T::lt);
    }

    pub fn sift_down_by<T, F>(self, heap: &mut [T], pos: usize, len: usize, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sift_down_impl(heap, pos, len, &mut |a, b| compare(a, b) == Ordering::Less);
    }

    /// Rearranges `v` into a max-heap, in place, in *O*(*n*).
    pub fn heapify<T: Ord>(self, v: &mut [T]) {
        self.heapify_impl(v, &mut T::lt);
    }

    pub fn heapify_by<T, F>(self, v: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.heapify_impl(v, &mut |a, b| compare(a, b) == Ordering::Less);
    }

    /// Appends `item` and sifts it up, *O*(log *n*).
    pub fn push<T: Ord>(self, heap: &mut Vec<T>, item: T) {
        self.push_impl(heap, item, &mut T::lt);
    }

    pub fn push_by<T, F>(self, heap: &mut Vec<T>, item: T, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.push_impl(heap, item, &mut |a, b| compare(a, b) == Ordering::Less);
    }

    /// Removes and returns the greatest element, *O*(log *n*).
    ///
    /// The last element takes the place of the root and is sifted down.
    pub fn pop<T: Ord>(self, heap: &mut Vec<T>) -> Result<T, HeapError> {
        self.pop_impl(heap, &mut T::lt)
    }

    pub fn pop_by<T, F>(self, heap: &mut Vec<T>, mut compare: F) -> Result<T, HeapError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.pop_impl(heap, &mut |a, b| compare(a, b) == Ordering::Less)
    }

    /// Pushes `item` then pops the greatest element, in one sift.
    ///
    /// If `item` is strictly greater than the root, it is returned right away and `heap` is not
    /// touched. Otherwise, including when `item` equals the root, `item` takes the place of the
    /// root and the old root is returned. An empty heap returns `item`.
    pub fn pushpop<T: Ord>(self, heap: &mut [T], item: T) -> T {
        self.pushpop_impl(heap, item, &mut T::lt)
    }

    pub fn pushpop_by<T, F>(self, heap: &mut [T], item: T, mut compare: F) -> T
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.pushpop_impl(heap, item, &mut |a, b| compare(a, b) == Ordering::Less)
    }

    /// Pops the greatest element then pushes `item`, in one sift.
    ///
    /// Unlike [`Backend::pushpop`] the swap is unconditional, the old root is returned even if
    /// `item` is greater.
    pub fn replace<T: Ord>(self, heap: &mut [T], item: T) -> Result<T, HeapError> {
        self.replace_impl(heap, item, &mut T::lt)
    }

    pub fn replace_by<T, F>(self, heap: &mut [T], item: T, mut compare: F) -> Result<T, HeapError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.replace_impl(heap, item, &mut |a, b| compare(a, b) == Ordering::Less)
    }

    // --- IMPL ---

    fn push_impl<T, F>(self, heap: &mut Vec<T>, item: T, is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        heap.push(item);
        let pos = heap.len() - 1;
        self.sift_up_impl(heap, pos, is_less);
    }

    fn pop_impl<T, F>(self, heap: &mut Vec<T>, is_less: &mut F) -> Result<T, HeapError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut item = heap.pop().ok_or(HeapError::EmptyHeap)?;

        if !heap.is_empty() {
            mem::swap(&mut item, &mut heap[0]);
            let len = heap.len();
            self.sift_down_impl(heap, 0, len, is_less);
        }

        Ok(item)
    }

    fn pushpop_impl<T, F>(self, heap: &mut [T], mut item: T, is_less: &mut F) -> T
    where
        F: FnMut(&T, &T) -> bool,
    {
        let Some(top) = heap.first_mut() else {
            return item;
        };

        // `item` would be the next maximum, skip the round trip through the heap.
        if is_less(top, &item) {
            return item;
        }

        mem::swap(top, &mut item);
        let len = heap.len();
        self.sift_down_impl(heap, 0, len, is_less);

        item
    }

    fn replace_impl<T, F>(self, heap: &mut [T], item: T, is_less: &mut F) -> Result<T, HeapError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let top = heap.first_mut().ok_or(HeapError::EmptyHeap)?;
        let old_top = mem::replace(top, item);

        let len = heap.len();
        self.sift_down_impl(heap, 0, len, is_less);

        Ok(old_top)
    }
}

/// Returns the greatest element without removing it, *O*(1).
pub fn peek<T>(heap: &[T]) -> Result<&T, HeapError> {
    heap.first().ok_or(HeapError::EmptyHeap)
}

/// Checks the max-heap invariant for every parent/child pair, *O*(*n*).
pub fn is_heap<T: Ord>(v: &[T]) -> bool {
    is_heap_impl(v, &mut T::lt)
}

pub fn is_heap_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    is_heap_impl(v, &mut |a, b| compare(a, b) == Ordering::Less)
}

pub(crate) fn is_heap_impl<T, F>(v: &[T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    (1..v.len()).all(|child| !is_less(&v[(child - 1) / 2], &v[child]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKENDS: [Backend; 2] = [Backend::Optimized, Backend::Portable];

    #[test]
    fn is_heap_small() {
        assert!(is_heap::<i32>(&[]));
        assert!(is_heap(&[1]));
        assert!(is_heap(&[2, 1]));
        assert!(!is_heap(&[1, 2]));
        assert!(is_heap(&[3, 3, 3]));
        assert!(!is_heap(&[3, 1, 4]));
        assert!(is_heap(&[7, 5, 6, 4, 2, 1, 3]));
        assert!(!is_heap(&[7, 5, 6, 4, 2, 1, 8]));
    }

    #[test]
    fn pushpop_equal_item_is_swapped_in() {
        for backend in BACKENDS {
            let mut heap = vec![(5, 'a'), (1, 'b')];
            let out = backend.pushpop_by(&mut heap, (5, 'c'), |a, b| a.0.cmp(&b.0));
            assert_eq!(out, (5, 'a'));
            assert_eq!(heap, [(5, 'c'), (1, 'b')]);
        }
    }

    #[test]
    fn replace_empty() {
        for backend in BACKENDS {
            let mut heap: Vec<i32> = Vec::new();
            assert_eq!(backend.replace(&mut heap, 3), Err(HeapError::EmptyHeap));
            assert!(heap.is_empty());
        }
    }

    #[test]
    #[should_panic]
    fn sift_up_out_of_range() {
        let mut heap = vec![1, 2];
        Backend::Portable.sift_up(&mut heap, 2);
    }
}
