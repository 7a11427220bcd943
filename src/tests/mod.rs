#![cfg(all(feature = "std", feature = "panic-on-alloc"))]

use crate::{Buffer, ErrorBehavior};

mod replace;
#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "log")]
mod verbose;

/// Generates a test for each error behavior, once panicking and once fallible.
macro_rules! either_way {
    ($($ident:ident)*) => {
        mod panicking {
            $(
                #[test]
                fn $ident() {
                    eprintln!("error behavior is `Infallible`");
                    super::$ident::<core::convert::Infallible>();
                }
            )*
        }

        mod fallible {
            $(
                #[test]
                fn $ident() {
                    eprintln!("error behavior is `AllocError`");
                    super::$ident::<crate::AllocError>();
                }
            )*
        }
    };
}

pub(crate) use either_way;

#[track_caller]
fn ok<T, B: ErrorBehavior>(result: Result<T, B>) -> T {
    match result {
        Ok(value) => value,
        Err(_) => panic!("operation failed"),
    }
}

#[allow(dead_code)]
fn assert_covariant() {
    fn buffer<'a>(x: Buffer<'static>) -> Buffer<'a> {
        x
    }
}

#[allow(dead_code)]
fn assert_send_sync() {
    fn is_send_sync<T: Send + Sync>() {}
    is_send_sync::<Buffer<'static>>();
}
