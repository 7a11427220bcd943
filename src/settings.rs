//! Contains types to configure a buffer.
//!
//! You can configure these settings of a [`Buffer`](crate::Buffer):
//! - **`GROWTH_FACTOR`** : the factor the capacity is multiplied by when [`append`](crate::Buffer::append) finds the buffer full
//! - **`MIN_NON_ZERO_CAP`** : the smallest capacity a growing [`append`](crate::Buffer::append) allocates
//! - **`VERBOSE`** : emits `debug` events for growth, resizing and destruction when the `log` feature is enabled
//!
//! # Example
//!
//! You can configure the buffer settings using [`BufferSettings`]:
//! ```
//! use textbuf::{ Buffer, Global, settings::BufferSettings };
//!
//! type MyBufferSettings = BufferSettings<
//!     /* GROWTH_FACTOR */ 4,
//!     /* MIN_NON_ZERO_CAP */ 64,
//!     /* VERBOSE */ false,
//! >;
//!
//! type MyBuffer = Buffer<'static, Global, MyBufferSettings>;
//!
//! let mut buffer = MyBuffer::new_in(Global);
//! buffer.append(b'x');
//! assert_eq!(buffer.capacity(), 64);
//! ```
//!
//! Invalid values are rejected when the setting is first used:
//! a `GROWTH_FACTOR` below `2` or a `MIN_NON_ZERO_CAP` of `0` fail to compile.

trait Sealed {}

/// The trait powering buffer configuration.
///
/// The setting values are provided as associated constants.
#[expect(private_bounds)]
pub trait Settings: Sealed {
    /// The factor the capacity grows by when appending to a full buffer.
    const GROWTH_FACTOR: usize;

    /// The capacity a growing append allocates at least.
    const MIN_NON_ZERO_CAP: usize;

    /// Whether diagnostic events are emitted.
    const VERBOSE: bool;

    /// Changes the growth factor.
    type WithGrowthFactor<const VALUE: usize>: Settings;

    /// Changes the minimum non-zero capacity.
    type WithMinNonZeroCap<const VALUE: usize>: Settings;

    /// Changes whether diagnostic events are emitted.
    type WithVerbose<const VALUE: bool>: Settings;
}

/// Implementor of [`Settings`].
///
/// See the [module documentation](crate::settings) for how to use this type.
pub struct BufferSettings<const GROWTH_FACTOR: usize = 2, const MIN_NON_ZERO_CAP: usize = 8, const VERBOSE: bool = false>;

impl<const GROWTH_FACTOR: usize, const MIN_NON_ZERO_CAP: usize, const VERBOSE: bool> Sealed
    for BufferSettings<GROWTH_FACTOR, MIN_NON_ZERO_CAP, VERBOSE>
{
}

impl<const GROWTH_FACTOR: usize, const MIN_NON_ZERO_CAP: usize, const VERBOSE: bool> Settings
    for BufferSettings<GROWTH_FACTOR, MIN_NON_ZERO_CAP, VERBOSE>
{
    const GROWTH_FACTOR: usize = {
        assert!(GROWTH_FACTOR >= 2, "`GROWTH_FACTOR` must be at least 2");
        GROWTH_FACTOR
    };

    const MIN_NON_ZERO_CAP: usize = {
        assert!(MIN_NON_ZERO_CAP != 0, "`MIN_NON_ZERO_CAP` must not be zero");
        MIN_NON_ZERO_CAP
    };

    const VERBOSE: bool = VERBOSE;

    type WithGrowthFactor<const VALUE: usize> = BufferSettings<VALUE, MIN_NON_ZERO_CAP, VERBOSE>;
    type WithMinNonZeroCap<const VALUE: usize> = BufferSettings<GROWTH_FACTOR, VALUE, VERBOSE>;
    type WithVerbose<const VALUE: bool> = BufferSettings<GROWTH_FACTOR, MIN_NON_ZERO_CAP, VALUE>;
}
