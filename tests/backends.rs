//! Both backends have to be observably identical: same layouts, same return values, same
//! comparison calls in the same order.

use std::cmp::Ordering;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use heap_test_tools::patterns;

use maxheap::{Backend, BackendPreference};

const BACKENDS: [Backend; 2] = [Backend::Optimized, Backend::Portable];

const SIZES: [usize; 12] = [0, 1, 2, 3, 4, 7, 8, 15, 33, 100, 500, 2_048];

/// Runs a fixed script of operations and returns the final layout, all returned values and the
/// trace of compared pairs.
fn run_script(backend: Backend, input: &[i32]) -> (Vec<i32>, Vec<Option<i32>>, Vec<(i32, i32)>) {
    let mut trace = Vec::new();
    let mut returned = Vec::new();

    let mut compare = |a: &i32, b: &i32| {
        trace.push((*a, *b));
        a.cmp(b)
    };

    let mut heap = input.to_vec();
    backend.heapify_by(&mut heap, &mut compare);

    for val in [i32::MAX, 0, -7, input.first().copied().unwrap_or(1)] {
        backend.push_by(&mut heap, val, &mut compare);
    }

    for _ in 0..3 {
        returned.push(backend.pop_by(&mut heap, &mut compare).ok());
    }

    for val in [i32::MIN, 42, heap.first().copied().unwrap_or(0)] {
        returned.push(Some(backend.pushpop_by(&mut heap, val, &mut compare)));
        returned.push(backend.replace_by(&mut heap, val / 2, &mut compare).ok());
    }

    if heap.len() > 2 {
        let last = heap.len() - 1;
        heap[last] = i32::MAX;
        backend.sift_up_by(&mut heap, last, &mut compare);

        heap[0] = i32::MIN;
        let len = heap.len();
        backend.sift_down_by(&mut heap, 0, len, &mut compare);
    }

    (heap, returned, trace)
}

#[test]
fn identical_results_and_traces() {
    for size in SIZES {
        let pattern_fns: [fn(usize) -> Vec<i32>; 4] = [
            patterns::random,
            |size| patterns::random_uniform(size, 0..4),
            patterns::ascending,
            patterns::valid_heap,
        ];

        for pattern_fn in pattern_fns {
            let input = pattern_fn(size);

            let optimized = run_script(Backend::Optimized, &input);
            let portable = run_script(Backend::Portable, &input);

            assert_eq!(optimized.0, portable.0, "layout, size {size}");
            assert_eq!(optimized.1, portable.1, "returns, size {size}");
            assert_eq!(optimized.2, portable.2, "comparison trace, size {size}");
        }
    }
}

#[test]
fn sift_down_on_prefix_is_identical() {
    for size in SIZES {
        let input = patterns::random(size);

        let layouts: Vec<Vec<i32>> = BACKENDS
            .iter()
            .map(|backend| {
                let mut v = input.clone();
                let len = v.len() / 2;
                for pos in (0..len / 2).rev() {
                    backend.sift_down(&mut v, pos, len);
                }
                // Out of range positions are ignored.
                backend.sift_down(&mut v, len, len);
                v
            })
            .collect();

        assert_eq!(layouts[0], layouts[1]);
        assert_eq!(layouts[0][size / 2..], input[size / 2..]);
    }
}

#[test]
fn identical_state_after_comparator_panic() {
    let input = patterns::random(300);

    for panic_at in [0usize, 1, 5, 17, 120, 250] {
        let states: Vec<Vec<Vec<i32>>> = BACKENDS
            .iter()
            .map(|backend| {
                let mut heap: Vec<Vec<i32>> = input.iter().map(|val| vec![*val]).collect();
                let mut comp_count = 0usize;

                let res = panic::catch_unwind(AssertUnwindSafe(|| {
                    backend.heapify_by(&mut heap, |a, b| {
                        if comp_count == panic_at {
                            panic!("comparison {comp_count}");
                        }
                        comp_count += 1;
                        a.cmp(b)
                    });
                }));
                assert!(res.is_err());

                heap
            })
            .collect();

        assert_eq!(states[0], states[1], "panic at comparison {panic_at}");

        let mut after = states[0].concat();
        let mut expected = input.clone();
        after.sort_unstable();
        expected.sort_unstable();
        assert_eq!(after, expected);
    }
}

#[test]
fn zero_sized_elements() {
    for backend in BACKENDS {
        let mut heap = vec![(); 5];
        backend.heapify(&mut heap);
        backend.push(&mut heap, ());
        assert_eq!(backend.pop(&mut heap), Ok(()));
        backend.pushpop(&mut heap, ());
        assert_eq!(backend.replace(&mut heap, ()), Ok(()));
        assert_eq!(heap.len(), 5);
    }
}

#[test]
fn zero_sized_sift_down_far_position() {
    for backend in BACKENDS {
        let mut heap = vec![(); usize::MAX];
        backend.sift_down(&mut heap, usize::MAX / 2 + 1, usize::MAX);
        backend.sift_down(&mut heap, usize::MAX - 1, usize::MAX);
        assert_eq!(heap.len(), usize::MAX);
    }
}

#[test]
fn availability() {
    assert!(Backend::Portable.is_available());

    // Asking twice never flips the answer.
    let optimized = Backend::Optimized.is_available();
    assert_eq!(Backend::Optimized.is_available(), optimized);

    let active = maxheap::active_backend();
    assert!(active.is_available());
    assert_eq!(maxheap::is_optimized_active(), active == Backend::Optimized);

    if BackendPreference::from_env() == BackendPreference::Portable {
        assert_eq!(active, Backend::Portable);
    }
}

#[test]
fn active_backend_stable_across_threads() {
    let first = maxheap::active_backend();

    let handles: Vec<_> = (0..8).map(|_| thread::spawn(maxheap::active_backend)).collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), first);
    }
}

#[test]
fn custom_comparator_min_heap() {
    for backend in BACKENDS {
        let reverse = |a: &i32, b: &i32| -> Ordering { b.cmp(a) };

        let mut heap = vec![5, 9, 1, 7, 3];
        backend.heapify_by(&mut heap, reverse);
        assert!(maxheap::is_heap_by(&heap, reverse));

        let mut drained = Vec::new();
        while let Ok(val) = backend.pop_by(&mut heap, reverse) {
            drained.push(val);
        }
        assert_eq!(drained, [1, 3, 5, 7, 9]);
    }
}
