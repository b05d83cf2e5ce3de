//! Small algorithms built on the functional API.

use std::cmp::Reverse;

use crate::backend::active_backend;
use crate::engine;

/// The `k` largest items, greatest first.
///
/// Keeps a heap of at most `k` items, ordered by `Reverse` so its root is the smallest kept item.
/// A new item evicts the root only if it is strictly greater.
///
/// ```
/// assert_eq!(maxheap::top_k([7, 2, 9, 4, 1, 8], 3), [9, 8, 7]);
/// ```
pub fn top_k<T, I>(items: I, k: usize) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    if k == 0 {
        return Vec::new();
    }

    let backend = active_backend();
    let items = items.into_iter();
    // `k` may exceed the input by far, only reserve what the iterator promises.
    let mut kept: Vec<Reverse<T>> = Vec::with_capacity(k.min(items.size_hint().0));

    for item in items {
        if kept.len() < k {
            backend.push(&mut kept, Reverse(item));
        } else if kept[0].0 < item {
            let _evicted = backend.replace(&mut kept, Reverse(item));
        }
    }

    // Pops come out smallest first.
    let mut out = Vec::with_capacity(kept.len());
    while let Ok(Reverse(item)) = backend.pop(&mut kept) {
        out.push(item);
    }
    out.reverse();

    out
}

/// The `k`-th largest item, counting from 1. `None` if `k` is 0 or larger than `items.len()`.
pub fn kth_largest<T: Ord>(items: Vec<T>, k: usize) -> Option<T> {
    if k == 0 || k > items.len() {
        return None;
    }

    let backend = active_backend();
    let mut heap = items;
    backend.heapify(&mut heap);

    for _ in 1..k {
        backend.pop(&mut heap).ok()?;
    }

    backend.pop(&mut heap).ok()
}

/// The maximum of every window of `k` consecutive items.
///
/// Stale maxima are evicted lazily, only once they surface at the root. Returns an empty vector
/// if `k` is 0 or larger than `items.len()`.
///
/// ```
/// let maxima = maxheap::max_sliding_window(&[1, 3, -1, -3, 5, 3, 6, 7], 3);
/// assert_eq!(maxima, [3, 3, 5, 5, 6, 7]);
/// ```
pub fn max_sliding_window<T: Ord + Clone>(items: &[T], k: usize) -> Vec<T> {
    if k == 0 || k > items.len() {
        return Vec::new();
    }

    let backend = active_backend();
    let mut window: Vec<(&T, usize)> = Vec::with_capacity(k);
    let mut out = Vec::with_capacity(items.len() - k + 1);

    for (idx, item) in items.iter().enumerate() {
        backend.push(&mut window, (item, idx));

        if idx + 1 < k {
            continue;
        }

        while let Ok(&(_, top_idx)) = engine::peek(&window) {
            if top_idx + k > idx {
                break;
            }
            let _stale = backend.pop(&mut window);
        }

        if let Ok(&(top, _)) = engine::peek(&window) {
            out.push(top.clone());
        }
    }

    out
}
