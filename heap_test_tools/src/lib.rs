//! Backend-generic test battery for max-heap implementations.
//!
//! Implement [`HeapImpl`] for a type that forwards to one implementation, then call
//! [`instantiate_heap_tests!`] with it to get the whole battery as `#[test]` functions.

use std::cmp::Ordering;

pub trait HeapImpl {
    fn name() -> String;

    fn heapify<T: Ord>(v: &mut [T]);

    fn heapify_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    fn push<T: Ord>(heap: &mut Vec<T>, item: T);

    fn push_by<T, F>(heap: &mut Vec<T>, item: T, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// `None` on an empty heap.
    fn pop<T: Ord>(heap: &mut Vec<T>) -> Option<T>;

    fn pop_by<T, F>(heap: &mut Vec<T>, compare: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering;

    fn pushpop<T: Ord>(heap: &mut Vec<T>, item: T) -> T;

    fn pushpop_by<T, F>(heap: &mut Vec<T>, item: T, compare: F) -> T
    where
        F: FnMut(&T, &T) -> Ordering;

    /// `None` on an empty heap.
    fn replace<T: Ord>(heap: &mut Vec<T>, item: T) -> Option<T>;

    fn replace_by<T, F>(heap: &mut Vec<T>, item: T, compare: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
