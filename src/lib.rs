//! Max-first binary heap.
//!
//! A heap is an ordinary `Vec<T>` (or slice) owned by the caller. The free functions rearrange it
//! in place so that every element is greater than or equal to its children, the greatest element
//! sitting at index 0. [`MaxHeap`] owns one such `Vec` and forwards to the same operations.
//!
//! Two backends implement the kernels, see [`Backend`]. The one servicing the free functions is
//! chosen once per process and can be inspected with [`active_backend`].

mod backend;
pub mod config;
pub mod engine;
mod error;
mod ffi_util;
mod functional;
mod optimized;
mod portable;
pub mod recipes;
mod wrapper;

pub use backend::{active_backend, is_optimized_active, Backend};
pub use config::BackendPreference;
pub use engine::{is_heap, is_heap_by, peek};
pub use error::HeapError;
pub use functional::{
    heapify, heapify_by, pop, pop_by, push, push_by, pushpop, pushpop_by, replace, replace_by,
    sift_down, sift_down_by, sift_up, sift_up_by,
};
pub use recipes::{kth_largest, max_sliding_window, top_k};
pub use wrapper::MaxHeap;
