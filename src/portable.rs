//! Portable heap kernels in safe Rust.
//!
//! Elements move by swapping, so the slice is a permutation of its input at every point, even if
//! `is_less` panics halfway through a sift. The sequence of `is_less` calls, and their argument
//! order, is the same as in the native kernel. Both backends depend on that to stay
//! indistinguishable.

/// Moves the element at `pos` towards the root while it is strictly greater than its parent.
pub(crate) fn sift_up<T, F>(v: &mut [T], mut pos: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while pos > 0 {
        let parent = (pos - 1) / 2;

        // Stop if the invariant holds between `pos` and its parent.
        if !is_less(&v[parent], &v[pos]) {
            break;
        }

        v.swap(parent, pos);
        pos = parent;
    }
}

/// Moves the element at `pos` towards the leaves of `v[..len]` while a child is strictly greater.
pub(crate) fn sift_down<T, F>(v: &mut [T], mut pos: usize, len: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let v = &mut v[..len];

    loop {
        // Children of `pos`. Only zero-sized slices get long enough for this to overflow.
        let mut child = match pos.checked_mul(2).and_then(|c| c.checked_add(1)) {
            Some(child) if child < len => child,
            _ => break,
        };

        // Choose the greater child, the left one on a tie.
        if child + 1 < len && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        // Stop if the invariant holds at `pos`.
        if !is_less(&v[pos], &v[child]) {
            break;
        }

        // Swap `pos` with the greater child and keep sifting from there.
        v.swap(pos, child);
        pos = child;
    }
}

/// Builds the heap in linear time, sifting down from the last parent to the root.
pub(crate) fn heapify<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    for i in (0..len / 2).rev() {
        sift_down(v, i, len, is_less);
    }
}
