#![allow(dead_code)] // Only used when the native kernel is built.

use std::any::Any;
use std::ffi::c_void;
use std::panic::{self, AssertUnwindSafe};

/// Mirrors `LessResult` in `maxheap_kernel.c`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LessResult {
    pub(crate) is_less: bool,
    pub(crate) is_panic: bool,
}

pub(crate) type LessFn =
    unsafe extern "C" fn(a: *const c_void, b: *const c_void, ctx: *mut c_void) -> LessResult;

/// State shared with the kernel for the duration of one call.
///
/// A panic raised by `is_less` can't unwind through C, so it is parked here and re-raised once
/// the kernel has returned.
pub(crate) struct LessCtx<'a, F> {
    is_less: &'a mut F,
    panic_payload: Option<Box<dyn Any + Send + 'static>>,
}

impl<'a, F> LessCtx<'a, F> {
    pub(crate) fn new(is_less: &'a mut F) -> Self {
        Self {
            is_less,
            panic_payload: None,
        }
    }

    pub(crate) fn as_raw(&mut self) -> *mut c_void {
        (self as *mut Self).cast::<c_void>()
    }

    /// Re-raises a panic caught during the kernel call, if there was one.
    pub(crate) fn resume_panic(self) {
        if let Some(payload) = self.panic_payload {
            panic::resume_unwind(payload);
        }
    }
}

/// Comparison trampoline handed to the kernel.
///
/// # Safety
///
/// `a` and `b` must point to initialized values of `T`, `ctx` must come from
/// [`LessCtx::as_raw`] for a `LessCtx<'_, F>` that outlives the call.
pub(crate) unsafe extern "C" fn rust_fn_is_less<T, F: FnMut(&T, &T) -> bool>(
    a: *const c_void,
    b: *const c_void,
    ctx: *mut c_void,
) -> LessResult {
    let ctx = &mut *ctx.cast::<LessCtx<'_, F>>();

    // The kernel stops at the first reported panic, a later call only reports it again.
    if ctx.panic_payload.is_some() {
        return LessResult {
            is_less: false,
            is_panic: true,
        };
    }

    let a = &*a.cast::<T>();
    let b = &*b.cast::<T>();

    let is_less = &mut *ctx.is_less;
    match panic::catch_unwind(AssertUnwindSafe(|| is_less(a, b))) {
        Ok(val) => LessResult {
            is_less: val,
            is_panic: false,
        },
        Err(payload) => {
            ctx.panic_payload = Some(payload);
            LessResult {
                is_less: false,
                is_panic: true,
            }
        }
    }
}
