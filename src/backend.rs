//! Backend selection.
//!
//! Two interchangeable implementations of the heap kernels exist: the native kernel behind
//! [`Backend::Optimized`] and safe Rust behind [`Backend::Portable`]. The process-wide choice is
//! made once, on first use, and never changes afterwards.

use std::fmt;

use once_cell::sync::OnceCell;

use crate::config::BackendPreference;
use crate::{optimized, portable};

/// One implementation of the heap kernels.
///
/// Both backends produce the same sequences, return the same values and call the comparison
/// function with the same arguments in the same order. They only differ in how fast they move
/// elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Native kernel compiled from C by the build script.
    Optimized,
    /// Safe Rust, always available.
    Portable,
}

impl Backend {
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Optimized => "optimized",
            Backend::Portable => "portable",
        }
    }

    /// Whether this backend can service calls with its own kernels in this process.
    ///
    /// For [`Backend::Optimized`] this initializes the native kernel on first call. Operations
    /// invoked on an unavailable backend are serviced by the portable kernels.
    pub fn is_available(self) -> bool {
        match self {
            Backend::Optimized => kernel_ready(),
            Backend::Portable => true,
        }
    }

    /// The backend whose kernels actually run for calls made on `self`.
    fn effective(self) -> Backend {
        if self.is_available() {
            self
        } else {
            Backend::Portable
        }
    }

    #[inline]
    pub(crate) fn sift_up_impl<T, F>(self, v: &mut [T], pos: usize, is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        assert!(
            pos < v.len(),
            "sift_up position {pos} out of range for heap of length {}",
            v.len()
        );

        match self.effective() {
            Backend::Optimized => optimized::sift_up(v, pos, is_less),
            Backend::Portable => portable::sift_up(v, pos, is_less),
        }
    }

    #[inline]
    pub(crate) fn sift_down_impl<T, F>(self, v: &mut [T], pos: usize, len: usize, is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        assert!(
            len <= v.len(),
            "sift_down length {len} out of range for heap of length {}",
            v.len()
        );

        if pos >= len {
            return;
        }

        match self.effective() {
            Backend::Optimized => optimized::sift_down(v, pos, len, is_less),
            Backend::Portable => portable::sift_down(v, pos, len, is_less),
        }
    }

    #[inline]
    pub(crate) fn heapify_impl<T, F>(self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if v.len() < 2 {
            return;
        }

        match self.effective() {
            Backend::Optimized => optimized::heapify(v, is_less),
            Backend::Portable => portable::heapify(v, is_less),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn kernel_ready() -> bool {
    static KERNEL_READY: OnceCell<bool> = OnceCell::new();

    *KERNEL_READY.get_or_init(optimized::init)
}

/// Maps a preference onto a backend. A preference that can't be honored silently degrades to the
/// portable backend.
pub(crate) fn resolve(preference: BackendPreference, optimized_available: bool) -> Backend {
    match preference {
        BackendPreference::Auto | BackendPreference::Optimized if optimized_available => {
            Backend::Optimized
        }
        _ => Backend::Portable,
    }
}

/// The backend servicing the free functions and [`MaxHeap`](crate::MaxHeap).
///
/// Resolved on first call from [`BackendPreference::from_env`] and kernel availability, fixed for
/// the rest of the process.
pub fn active_backend() -> Backend {
    static ACTIVE: OnceCell<Backend> = OnceCell::new();

    *ACTIVE.get_or_init(|| {
        let preference = BackendPreference::from_env();
        let optimized_available =
            preference != BackendPreference::Portable && Backend::Optimized.is_available();

        resolve(preference, optimized_available)
    })
}

/// Diagnostic flag, `true` if the native kernel services the free functions.
pub fn is_optimized_active() -> bool {
    active_backend() == Backend::Optimized
}
