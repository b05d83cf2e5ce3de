//! Optimized heap kernels, backed by the native code in `maxheap_kernel.c`.
//!
//! The kernel is only linked when the build script managed to compile it (`cfg(maxheap_kernel)`).
//! Without it, and for zero-sized types, these entry points forward to the portable kernels,
//! which produce the same results.

#[cfg(maxheap_kernel)]
mod native {
    use std::ffi::c_void;
    use std::mem::{self, MaybeUninit};

    use crate::ffi_util::{rust_fn_is_less, LessCtx, LessFn};

    pub(super) const KERNEL_ABI_VERSION: u32 = 1;

    extern "C" {
        fn maxheap_kernel_abi_version() -> u32;

        #[must_use]
        fn maxheap_kernel_sift_up(
            data: *mut u8,
            elem_size: usize,
            pos: usize,
            scratch: *mut u8,
            is_less: LessFn,
            ctx: *mut c_void,
        ) -> u32;

        #[must_use]
        fn maxheap_kernel_sift_down(
            data: *mut u8,
            elem_size: usize,
            pos: usize,
            len: usize,
            scratch: *mut u8,
            is_less: LessFn,
            ctx: *mut c_void,
        ) -> u32;

        #[must_use]
        fn maxheap_kernel_heapify(
            data: *mut u8,
            elem_size: usize,
            len: usize,
            scratch: *mut u8,
            is_less: LessFn,
            ctx: *mut c_void,
        ) -> u32;
    }

    pub(super) fn abi_version() -> u32 {
        // SAFETY: Takes no arguments and has no side effects.
        unsafe { maxheap_kernel_abi_version() }
    }

    /// Runs one kernel call with a scratch slot for a `T` and a trampoline for `is_less`.
    ///
    /// A panic from `is_less` is resumed after the kernel has put the held element back.
    fn with_kernel<T, F>(
        is_less: &mut F,
        call: impl FnOnce(usize, *mut u8, LessFn, *mut c_void) -> u32,
    ) where
        F: FnMut(&T, &T) -> bool,
    {
        let mut scratch = MaybeUninit::<T>::uninit();
        let mut ctx = LessCtx::new(is_less);

        let status = call(
            mem::size_of::<T>(),
            scratch.as_mut_ptr().cast::<u8>(),
            rust_fn_is_less::<T, F>,
            ctx.as_raw(),
        );

        ctx.resume_panic();
        debug_assert_eq!(status, 0);
    }

    pub(super) fn sift_up<T, F>(v: &mut [T], pos: usize, is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        debug_assert!(pos < v.len());
        let data = v.as_mut_ptr().cast::<u8>();

        with_kernel::<T, F>(is_less, |elem_size, scratch, less_fn, ctx| {
            // SAFETY: `pos` is in bounds, `scratch` is valid for one `T` and the kernel only moves
            // whole elements, leaving `v` a permutation of itself.
            unsafe { maxheap_kernel_sift_up(data, elem_size, pos, scratch, less_fn, ctx) }
        });
    }

    pub(super) fn sift_down<T, F>(v: &mut [T], pos: usize, len: usize, is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        debug_assert!(len <= v.len());
        let data = v.as_mut_ptr().cast::<u8>();

        with_kernel::<T, F>(is_less, |elem_size, scratch, less_fn, ctx| {
            // SAFETY: `len` is in bounds, see `sift_up`.
            unsafe { maxheap_kernel_sift_down(data, elem_size, pos, len, scratch, less_fn, ctx) }
        });
    }

    pub(super) fn heapify<T, F>(v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let len = v.len();
        let data = v.as_mut_ptr().cast::<u8>();

        with_kernel::<T, F>(is_less, |elem_size, scratch, less_fn, ctx| {
            // SAFETY: See `sift_up`.
            unsafe { maxheap_kernel_heapify(data, elem_size, len, scratch, less_fn, ctx) }
        });
    }
}

/// Checks that the native kernel is linked, speaks the expected ABI and orders a known input
/// correctly.
#[cfg(maxheap_kernel)]
pub(crate) fn init() -> bool {
    if native::abi_version() != native::KERNEL_ABI_VERSION {
        return false;
    }

    let mut probe = [3, 1, 6, 5, 2, 4, 7];
    native::heapify(&mut probe, &mut |a: &i32, b: &i32| a < b);
    if probe != [7, 5, 6, 1, 2, 4, 3] {
        return false;
    }

    native::sift_down(&mut probe, 0, 7, &mut |a: &i32, b: &i32| b < a);
    probe == [5, 1, 6, 7, 2, 4, 3]
}

#[cfg(not(maxheap_kernel))]
pub(crate) fn init() -> bool {
    false
}

#[cfg(maxheap_kernel)]
use crate::portable;

#[cfg(maxheap_kernel)]
#[inline]
const fn is_zst<T>() -> bool {
    std::mem::size_of::<T>() == 0
}

#[cfg(maxheap_kernel)]
pub(crate) fn sift_up<T, F>(v: &mut [T], pos: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if is_zst::<T>() {
        portable::sift_up(v, pos, is_less);
    } else {
        native::sift_up(v, pos, is_less);
    }
}

#[cfg(maxheap_kernel)]
pub(crate) fn sift_down<T, F>(v: &mut [T], pos: usize, len: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if is_zst::<T>() {
        portable::sift_down(v, pos, len, is_less);
    } else {
        native::sift_down(v, pos, len, is_less);
    }
}

#[cfg(maxheap_kernel)]
pub(crate) fn heapify<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if is_zst::<T>() {
        portable::heapify(v, is_less);
    } else {
        native::heapify(v, is_less);
    }
}

#[cfg(not(maxheap_kernel))]
pub(crate) use crate::portable::{heapify, sift_down, sift_up};
