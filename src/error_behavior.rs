use core::alloc::Layout;
#[cfg(feature = "panic-on-alloc")]
use core::convert::Infallible;

use crate::AllocError;

/// How a growing operation reports failure.
///
/// `Infallible` panics, `AllocError` is returned to the caller.
pub(crate) trait ErrorBehavior: Sized {
    fn allocation(layout: Layout) -> Self;
    fn capacity_overflow() -> Self;
    fn view_no_space(amount: usize) -> Self;
    fn view_not_resizable() -> Self;
}

#[cfg(feature = "panic-on-alloc")]
impl ErrorBehavior for Infallible {
    #[inline(always)]
    fn allocation(layout: Layout) -> Self {
        alloc::alloc::handle_alloc_error(layout)
    }

    #[inline(always)]
    fn capacity_overflow() -> Self {
        crate::private::capacity_overflow()
    }

    #[inline(always)]
    fn view_no_space(amount: usize) -> Self {
        view_no_space(amount)
    }

    #[inline(always)]
    fn view_not_resizable() -> Self {
        view_not_resizable()
    }
}

impl ErrorBehavior for AllocError {
    #[inline(always)]
    fn allocation(_: Layout) -> Self {
        Self
    }

    #[inline(always)]
    fn capacity_overflow() -> Self {
        Self
    }

    #[inline(always)]
    fn view_no_space(_: usize) -> Self {
        Self
    }

    #[inline(always)]
    fn view_not_resizable() -> Self {
        Self
    }
}

#[cold]
#[inline(never)]
#[cfg(feature = "panic-on-alloc")]
fn view_no_space(amount: usize) -> ! {
    panic!("view does not have enough space for {amount} more bytes");
}

#[cold]
#[inline(never)]
#[cfg(feature = "panic-on-alloc")]
fn view_not_resizable() -> ! {
    panic!("a view can not be resized");
}
