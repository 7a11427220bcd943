use core::ops::{Range, RangeFrom, RangeFull, RangeTo};

/// A Python-style `start`/`end` pair for search operations.
///
/// An absent bound stands for the start or the end of the buffer.
/// Negative bounds count from the end: `-1` is the last byte.
/// Bounds past the end are clamped to the length.
///
/// [`Bounds::new`] takes the raw arguments of Python's `str.find(sub, start, end)`
/// where an `end` of `0` means "to the end". Ranges of `isize` convert into `Bounds` as written,
/// and `..` searches the whole buffer:
///
/// ```
/// use textbuf::{Buffer, Bounds};
///
/// let text = Buffer::from_bytes(b"abcabcabc");
///
/// assert_eq!(text.find("bc", ..), Some(1));
/// assert_eq!(text.find("bc", Bounds::new(2, 0)), Some(4));
/// assert_eq!(text.find("bc", Bounds::new(-3, 0)), Some(7));
/// assert_eq!(text.find("bc", Bounds::new(0, 4)), Some(1));
/// assert_eq!(text.find("bc", Bounds::new(2, 4)), None);
/// assert_eq!(text.find("bc", -5_isize..-1), Some(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    /// The first position to consider.
    pub start: Option<isize>,
    /// One past the last position to consider.
    pub end: Option<isize>,
}

impl Bounds {
    /// Bounds covering the whole buffer.
    pub const FULL: Self = Self { start: None, end: None };

    /// Creates bounds from Python-style arguments.
    ///
    /// An `end` of `0` means "to the end of the buffer".
    #[must_use]
    pub const fn new(start: isize, end: isize) -> Self {
        Self {
            start: Some(start),
            end: if end == 0 { None } else { Some(end) },
        }
    }

    /// Resolves the bounds against a length, returning `start..end` with `start <= end <= len`
    /// or `None` if the range is empty.
    #[must_use]
    pub fn resolve(self, len: usize) -> Option<Range<usize>> {
        let start = match self.start {
            Some(start) => wrap(start, len),
            None => 0,
        };

        let end = match self.end {
            Some(end) => wrap(end, len),
            None => len,
        };

        if start < end { Some(start..end) } else { None }
    }
}

/// Maps a possibly negative index to an offset in `0..len`.
///
/// Negative indices count from the end. Returns `None` if `len` is zero
/// or the index is out of range.
///
/// ```
/// use textbuf::normalize_index;
///
/// assert_eq!(normalize_index(-1, 3), Some(2));
/// assert_eq!(normalize_index(1, 3), Some(1));
/// assert_eq!(normalize_index(3, 3), None);
/// assert_eq!(normalize_index(-4, 3), Some(2));
/// assert_eq!(normalize_index(0, 0), None);
/// ```
#[must_use]
pub fn normalize_index(index: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let index = if index < 0 { wrap_negative(index, len) } else { index as usize };

    if index < len { Some(index) } else { None }
}

/// Wraps a negative bound modulo `len` and clamps everything to `0..=len`.
#[inline]
pub(crate) fn wrap(bound: isize, len: usize) -> usize {
    if bound < 0 {
        if len == 0 { 0 } else { wrap_negative(bound, len) }
    } else {
        (bound as usize).min(len)
    }
}

#[inline]
fn wrap_negative(index: isize, len: usize) -> usize {
    debug_assert!(index < 0 && len != 0);
    // `len` may not fit into an `isize`, `unsigned_abs` is exact for every negative value
    let magnitude = index.unsigned_abs() % len;
    if magnitude == 0 { 0 } else { len - magnitude }
}

impl From<RangeFull> for Bounds {
    #[inline]
    fn from(_: RangeFull) -> Self {
        Self::FULL
    }
}

impl From<Range<isize>> for Bounds {
    #[inline]
    fn from(range: Range<isize>) -> Self {
        Self {
            start: Some(range.start),
            end: Some(range.end),
        }
    }
}

impl From<RangeFrom<isize>> for Bounds {
    #[inline]
    fn from(range: RangeFrom<isize>) -> Self {
        Self {
            start: Some(range.start),
            end: None,
        }
    }
}

impl From<RangeTo<isize>> for Bounds {
    #[inline]
    fn from(range: RangeTo<isize>) -> Self {
        Self {
            start: None,
            end: Some(range.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_bounds_wrap() {
        assert_eq!(Bounds::new(-3, 0).resolve(9), Some(6..9));
        assert_eq!(Bounds::new(-12, -1).resolve(9), Some(6..8));
        assert_eq!(Bounds::new(0, -9).resolve(9), None);
    }

    #[test]
    fn zero_end_means_to_the_end() {
        assert_eq!(Bounds::new(0, 0), Bounds { start: Some(0), end: None });
        assert_eq!(Bounds::new(2, 0).resolve(5), Some(2..5));
    }

    #[test]
    fn clamps_past_the_end() {
        assert_eq!(Bounds::new(1, 100).resolve(5), Some(1..5));
        assert_eq!(Bounds::new(7, 100).resolve(5), None);
    }

    #[test]
    fn ranges_keep_an_explicit_zero_end() {
        assert_eq!(Bounds::from(0_isize..0).resolve(5), None);
        assert_eq!(Bounds::from(..0_isize).resolve(5), None);
        assert_eq!(Bounds::from(1_isize..).resolve(5), Some(1..5));
        assert_eq!(Bounds::from(..).resolve(5), Some(0..5));
    }

    #[test]
    fn empty_length() {
        assert_eq!(Bounds::FULL.resolve(0), None);
        assert_eq!(Bounds::new(-1, 0).resolve(0), None);
        assert_eq!(normalize_index(-1, 0), None);
    }

    #[test]
    fn extreme_indices() {
        assert_eq!(normalize_index(isize::MIN, 2), Some(0));
        assert_eq!(normalize_index(isize::MAX, 2), None);
        assert_eq!(wrap(isize::MIN, usize::MAX), usize::MAX - isize::MIN.unsigned_abs());
    }
}
