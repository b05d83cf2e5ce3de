//! Heap operations on caller-owned sequences, serviced by [`active_backend`](crate::active_backend).
//!
//! These mirror the methods on [`Backend`](crate::Backend), see [`crate::engine`] for the shared
//! contract.

use std::cmp::Ordering;

use crate::backend::active_backend;
use crate::error::HeapError;

/// Transforms `v` into a max-heap, in place, in *O*(*n*).
///
/// ```
/// let mut v = vec![3, 1, 6, 5, 2, 4];
/// maxheap::heapify(&mut v);
/// assert_eq!(maxheap::peek(&v), Ok(&6));
/// assert!(maxheap::is_heap(&v));
/// ```
#[inline]
pub fn heapify<T: Ord>(v: &mut [T]) {
    active_backend().heapify(v);
}

#[inline]
pub fn heapify_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    active_backend().heapify_by(v, compare);
}

/// Pushes `item` onto `heap`, *O*(log *n*).
///
/// ```
/// let mut heap = Vec::new();
/// maxheap::push(&mut heap, 10);
/// maxheap::push(&mut heap, 3);
/// maxheap::push(&mut heap, 42);
/// assert_eq!(maxheap::pop(&mut heap), Ok(42));
/// ```
#[inline]
pub fn push<T: Ord>(heap: &mut Vec<T>, item: T) {
    active_backend().push(heap, item);
}

#[inline]
pub fn push_by<T, F>(heap: &mut Vec<T>, item: T, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    active_backend().push_by(heap, item, compare);
}

/// Removes and returns the greatest element, *O*(log *n*).
///
/// Fails with [`HeapError::EmptyHeap`] if `heap` is empty.
#[inline]
pub fn pop<T: Ord>(heap: &mut Vec<T>) -> Result<T, HeapError> {
    active_backend().pop(heap)
}

#[inline]
pub fn pop_by<T, F>(heap: &mut Vec<T>, compare: F) -> Result<T, HeapError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    active_backend().pop_by(heap, compare)
}

/// Push then pop, faster than calling both. Never fails, an empty heap returns `item`.
#[inline]
pub fn pushpop<T: Ord>(heap: &mut [T], item: T) -> T {
    active_backend().pushpop(heap, item)
}

#[inline]
pub fn pushpop_by<T, F>(heap: &mut [T], item: T, compare: F) -> T
where
    F: FnMut(&T, &T) -> Ordering,
{
    active_backend().pushpop_by(heap, item, compare)
}

/// Pop then push, faster than calling both.
///
/// Fails with [`HeapError::EmptyHeap`] if `heap` is empty, leaving `item` dropped.
#[inline]
pub fn replace<T: Ord>(heap: &mut [T], item: T) -> Result<T, HeapError> {
    active_backend().replace(heap, item)
}

#[inline]
pub fn replace_by<T, F>(heap: &mut [T], item: T, compare: F) -> Result<T, HeapError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    active_backend().replace_by(heap, item, compare)
}

#[inline]
pub fn sift_up<T: Ord>(heap: &mut [T], pos: usize) {
    active_backend().sift_up(heap, pos);
}

#[inline]
pub fn sift_up_by<T, F>(heap: &mut [T], pos: usize, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    active_backend().sift_up_by(heap, pos, compare);
}

#[inline]
pub fn sift_down<T: Ord>(heap: &mut [T], pos: usize, len: usize) {
    active_backend().sift_down(heap, pos, len);
}

#[inline]
pub fn sift_down_by<T, F>(heap: &mut [T], pos: usize, len: usize, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    active_backend().sift_down_by(heap, pos, len, compare);
}
