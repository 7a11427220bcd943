// NB: We avoid using closures to map `Result` and `Option`s in various places because they result in less readable assembly output.
// When using closures, functions like `capacity_overflow` can get the name of some closure that invokes it instead.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::correctness,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]
#![allow(
    clippy::inline_always,
    clippy::module_name_repetitions,
    clippy::comparison_chain,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::items_after_statements
)]
#![doc(test(attr(warn(dead_code))))]
//! A growable byte buffer with Python-style string operations.
//!
//! [`Buffer`] is an explicitly sized byte array (length plus capacity) that supports the string
//! operations you know from Python: [`find`](Buffer::find), [`rfind`](Buffer::rfind),
//! [`count`](Buffer::count), negative indexing with [`get`](Buffer::get) and [`set`](Buffer::set),
//! extended [`slice`](Buffer::slice)s, [`strip`](Buffer::strip), [`expand_tabs`](Buffer::expand_tabs),
//! [`partition`](Buffer::partition), [`split`](Buffer::split), [`join`](Buffer::join) and an in-place,
//! overlap-safe [`replace`](Buffer::replace).
//!
//! ```
//! use textbuf::{Buffer, Bounds};
//!
//! let mut path = Buffer::from_bytes(b"path/to/file");
//!
//! assert_eq!(path.find("/", ..), Some(4));
//! assert_eq!(path.rfind("/", ..), Some(7));
//! assert_eq!(path.count("/", Bounds::new(5, 0)), 1);
//!
//! assert_eq!(path.replace("/", "\\", 1), 1);
//! assert_eq!(path, "path\\to/file");
//! ```
//!
//! # Owned buffers and views
//! A buffer either *owns* its storage, which it allocates through an [`Allocator`], or it is a
//! *view* over caller owned memory created with [`Buffer::view`]. Views are never reallocated.
//! Their length can shrink and grow back within the borrowed slice, but an operation that needs
//! more room than that fails just like an allocation failure would.
//!
//! ```
//! use textbuf::Buffer;
//!
//! let mut storage = *b"  hello  ";
//! let mut view = Buffer::view(&mut storage);
//! view.strip(None);
//! assert_eq!(view, "hello");
//! assert!(view.try_extend(b", world").is_err());
//! ```
//!
//! # Fallible and panicking methods
//! Every method that may need to grow a buffer comes in two flavors. The plain method panics when
//! the allocation fails (only available with the `panic-on-alloc` feature), the `try_`-prefixed
//! one returns an [`AllocError`] instead and leaves the buffer as it was.
//!
//! # Ranges
//! Search operations take anything that converts into [`Bounds`]. Negative bounds count from the
//! end and an end bound of `0` means "to the end", like the `start`/`end` arguments of Python's
//! `str.find`.
//!
//! # Feature Flags
//! * **`std`** *(enabled by default)* : Adds `std::io::Write` for `Buffer` and `std::error::Error` for `AllocError`.
//! * **`panic-on-alloc`** *(enabled by default)* : Adds the methods and trait implementations that panic on allocation failure.
//! * **`serde`** : Adds `Serialize` for buffers, `Deserialize` for owned buffers and `DeserializeSeed` for `&mut Buffer`.
//! * **`log`** : Emits `debug` events through the `log` facade for buffers whose [settings](settings) enable `VERBOSE`.

#[doc(hidden)]
extern crate alloc;

mod bounds;
/// Contains [`Buffer`] and associated types.
mod buffer;
mod error_behavior;
mod features;
mod find;
mod mutate;
pub mod settings;
mod split;

pub use allocator_api2;
pub use allocator_api2::alloc::{AllocError, Allocator, Global};
pub use bounds::{Bounds, normalize_index};
pub use buffer::Buffer;
#[cfg(feature = "panic-on-alloc")]
use core::convert::Infallible;
use error_behavior::ErrorBehavior;
pub use mutate::WHITESPACE;

#[cfg(test)]
mod tests;

/// This is not part of the public api!
///
/// Any changes to this module are semver-exempt!
#[doc(hidden)]
pub mod private {
    pub use core;

    #[cold]
    #[inline(never)]
    #[cfg(feature = "panic-on-alloc")]
    pub const fn capacity_overflow() -> ! {
        panic!("capacity overflow");
    }
}

// this is just `Result::into_ok` but with a name to match our use case
#[inline(always)]
#[cfg(feature = "panic-on-alloc")]
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

macro_rules! error_behavior_generic_methods_if {
    (
        if $fail_if:literal

        $(
            $(#[$attr:meta])*
            $(do panics $(#[doc = $panics:literal])*)?
            $(do examples $(#[doc = $examples:literal])*)?
            impl

            $(#[$attr_infallible:meta])*
            $(do examples $(#[doc = $infallible_examples:literal])*)?
            for fn $infallible:ident

            $(#[$attr_fallible:meta])*
            $(do examples $(#[doc = $fallible_examples:literal])*)?
            for fn $fallible:ident

            use fn $generic:ident
            $(<{$($generic_params:tt)*}>)?
            (&$($self:ident)+ $(, $arg_pat:ident: $arg_ty:ty)* $(,)?)
            $(-> $return_ty:ty)?
            $(where { $($where:tt)* } in)?
            {
                $($body:tt)*
            }
        )*
    ) => {
        $(
            $(#[$attr])*
            $(#[$attr_infallible])*

            /// # Panics
            #[doc = concat!("Panics if ", $fail_if, ".")]
            $(#[doc = "\n"] $(#[doc = $panics])*)?

            #[doc = $crate::map!({ $($($examples)*)? $($($infallible_examples)*)? } become { "# Examples" } else { "" })]
            $(#[doc = "\n"] $(#[doc = $examples])*)?
            $(#[doc = "\n"] $(#[doc = $infallible_examples])*)?

            #[inline(always)]
            #[cfg(feature = "panic-on-alloc")]
            pub fn $infallible
            $(<$($generic_params)*>)?
            (&$($self)+ $(, $arg_pat: $arg_ty)*) $(-> $return_ty)?
            $(where $($where)*)?
            {
                $crate::infallible($crate::last!($($self)+).$generic($($arg_pat),*))
            }
        )*

        $(
            $(#[$attr])*
            $(#[$attr_fallible])*

            #[doc = $crate::map!({ $($($panics)*)? } become { "# Panics" } else { "" })]
            $(#[doc = "\n"] $(#[doc = $panics])*)?

            /// # Errors
            #[doc = concat!("Errors if ", $fail_if, ".")]

            #[doc = $crate::map!({ $($($examples)*)? $($($fallible_examples)*)? } become { "# Examples" } else { "" })]
            $(#[doc = "\n"] $(#[doc = $examples])*)?
            $(#[doc = "\n"] $(#[doc = $fallible_examples])*)?

            #[inline(always)]
            pub fn $fallible
            $(<$($generic_params)*>)?
            (&$($self)+ $(, $arg_pat: $arg_ty)*)
            -> $crate::wrap_result!($($return_ty)?, $crate::AllocError)
            $(where $($where)*)?
            {
                $crate::last!($($self)+).$generic($($arg_pat),*)
            }
        )*

        $(
            $(#[$attr])*
            #[inline]
            pub(crate) fn $generic
            <B: $crate::ErrorBehavior $(, $($generic_params)*)?>
            (&$($self)+ $(, $arg_pat: $arg_ty)*)
            -> $crate::wrap_result!($($return_ty)?, B)
            $(where $($where)*)?
            {
                $($body)*
            }
        )*
    };
}

pub(crate) use error_behavior_generic_methods_if;

macro_rules! error_behavior_generic_methods_allocation_failure {
    ($($tt:tt)*) => {
        $crate::error_behavior_generic_methods_if!(if "the allocation fails or a view runs out of space" $($tt)*);
    };
}

pub(crate) use error_behavior_generic_methods_allocation_failure;

macro_rules! map {
    ({ } become { $($then:tt)* }) => { };
    ({ } become { $($then:tt)* } else { $($else:tt)* }) => { $($else)* };
    ({ $($from:tt)+ } become { $($then:tt)* }) => { $($then)* };
    ({ $($from:tt)+ } become { $($then:tt)* } else { $($else:tt)* }) => { $($then)* };
}

pub(crate) use map;

macro_rules! last {
    ($self:ident) => {
        $self
    };
    ($mut:ident $self:ident) => {
        $self
    };
}

pub(crate) use last;

macro_rules! wrap_result {
    ($ok:ty, $err:ty) => { Result<$ok, $err> };
    (, $err:ty) => { Result<(), $err> };
}

pub(crate) use wrap_result;

/// Emits a `debug` event for buffers whose settings enable `VERBOSE`.
#[cfg(feature = "log")]
macro_rules! verbose {
    ($settings:ty, $($arg:tt)*) => {
        if <$settings as $crate::settings::Settings>::VERBOSE {
            log::debug!(target: "textbuf", $($arg)*);
        }
    };
}

#[cfg(not(feature = "log"))]
macro_rules! verbose {
    ($settings:ty, $($arg:tt)*) => {
        ()
    };
}

pub(crate) use verbose;
