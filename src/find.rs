//! Substring search over byte slices.
//!
//! An empty needle never matches, neither does a needle longer than the searched range.

use core::ops::Range;

use crate::{Allocator, Bounds, Buffer, settings::Settings};

/// Read-only substring search.
impl<A: Allocator, S: Settings> Buffer<'_, A, S> {
    /// Returns the lowest offset within `bounds` where `needle` occurs, or `None`.
    ///
    /// An empty `needle` never matches.
    ///
    /// # Examples
    /// ```
    /// # use textbuf::{Buffer, Bounds};
    /// let text = Buffer::from_bytes(b"abcabcabc");
    /// assert_eq!(text.find("bc", ..), Some(1));
    /// assert_eq!(text.find("bc", Bounds::new(2, 0)), Some(4));
    /// assert_eq!(text.find("", ..), None);
    /// assert_eq!(text.find("x", ..), None);
    /// ```
    #[must_use]
    pub fn find(&self, needle: impl AsRef<[u8]>, bounds: impl Into<Bounds>) -> Option<usize> {
        let range = bounds.into().resolve(self.len())?;
        find(self, needle.as_ref(), range)
    }

    /// Returns the highest offset within `bounds` where `needle` occurs, or `None`.
    ///
    /// # Examples
    /// ```
    /// # use textbuf::{Buffer, Bounds};
    /// let text = Buffer::from_bytes(b"abcabcabc");
    /// assert_eq!(text.rfind("bc", ..), Some(7));
    /// assert_eq!(text.rfind("bc", Bounds::new(0, -2)), Some(4));
    /// ```
    #[must_use]
    pub fn rfind(&self, needle: impl AsRef<[u8]>, bounds: impl Into<Bounds>) -> Option<usize> {
        let range = bounds.into().resolve(self.len())?;
        rfind(self, needle.as_ref(), range)
    }

    /// Counts the non-overlapping occurrences of `needle` within `bounds`.
    ///
    /// # Examples
    /// ```
    /// # use textbuf::Buffer;
    /// let text = Buffer::from_bytes(b"aaaaa");
    /// assert_eq!(text.count("aa", ..), 2);
    /// ```
    #[must_use]
    pub fn count(&self, needle: impl AsRef<[u8]>, bounds: impl Into<Bounds>) -> usize {
        match bounds.into().resolve(self.len()) {
            Some(range) => count(self, needle.as_ref(), range),
            None => 0,
        }
    }

    /// Returns `true` if `needle` occurs anywhere in the buffer.
    #[must_use]
    pub fn contains(&self, needle: impl AsRef<[u8]>) -> bool {
        find(self, needle.as_ref(), 0..self.len()).is_some()
    }
}

/// Lowest offset in `range` where `needle` starts and fits entirely in `range`.
pub(crate) fn find(haystack: &[u8], needle: &[u8], range: Range<usize>) -> Option<usize> {
    let Range { start, end } = range;
    let (&first, rest) = needle.split_first()?;

    if end - start < needle.len() {
        return None;
    }

    let last_start = end - needle.len();
    let mut pos = start;

    while pos <= last_start {
        // skip to the next position that starts with the needle's first byte
        match haystack[pos..=last_start].iter().position(|&b| b == first) {
            Some(offset) => pos += offset,
            None => return None,
        }

        if haystack[pos + 1..pos + needle.len()] == *rest {
            return Some(pos);
        }

        pos += 1;
    }

    None
}

/// Highest offset in `range` where `needle` starts and fits entirely in `range`.
pub(crate) fn rfind(haystack: &[u8], needle: &[u8], range: Range<usize>) -> Option<usize> {
    let Range { start, end } = range;
    let (&first, rest) = needle.split_first()?;

    if end - start < needle.len() {
        return None;
    }

    // one past the highest candidate
    let mut limit = end - needle.len() + 1;

    while limit > start {
        let pos = match haystack[start..limit].iter().rposition(|&b| b == first) {
            Some(offset) => start + offset,
            None => return None,
        };

        if haystack[pos + 1..pos + needle.len()] == *rest {
            return Some(pos);
        }

        limit = pos;
    }

    None
}

/// Number of non-overlapping occurrences in `range`, scanning left to right.
pub(crate) fn count(haystack: &[u8], needle: &[u8], range: Range<usize>) -> usize {
    let mut count = 0;
    let mut start = range.start;

    while let Some(pos) = find(haystack, needle, start..range.end) {
        count += 1;
        start = pos + needle.len();
    }

    count
}

/// Whether a proper prefix of `needle` is also a suffix of it.
///
/// Only such needles can have overlapping occurrences.
pub(crate) fn is_self_overlapping(needle: &[u8]) -> bool {
    (1..needle.len()).any(|k| needle[..k] == needle[needle.len() - k..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_find(haystack: &[u8], needle: &[u8], range: Range<usize>) -> Option<usize> {
        if needle.is_empty() || range.end - range.start < needle.len() {
            return None;
        }

        (range.start..=range.end - needle.len()).find(|&i| haystack[i..].starts_with(needle))
    }

    fn naive_rfind(haystack: &[u8], needle: &[u8], range: Range<usize>) -> Option<usize> {
        if needle.is_empty() || range.end - range.start < needle.len() {
            return None;
        }

        (range.start..=range.end - needle.len()).rev().find(|&i| haystack[i..].starts_with(needle))
    }

    #[test]
    fn find_and_rfind_agree_with_brute_force() {
        let haystacks: &[&[u8]] = &[b"", b"a", b"abcabcabc", b"aaaaaa", b"abababa", b"xyzzyx", b"mississippi"];
        let needles: &[&[u8]] = &[b"", b"a", b"bc", b"aa", b"aba", b"ss", b"issi", b"zz", b"mississippi!", b"x"];

        for &haystack in haystacks {
            for &needle in needles {
                for start in 0..=haystack.len() {
                    for end in start..=haystack.len() {
                        assert_eq!(
                            find(haystack, needle, start..end),
                            naive_find(haystack, needle, start..end),
                            "find {needle:?} in {haystack:?}[{start}..{end}]"
                        );
                        assert_eq!(
                            rfind(haystack, needle, start..end),
                            naive_rfind(haystack, needle, start..end),
                            "rfind {needle:?} in {haystack:?}[{start}..{end}]"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn find_rfind_example() {
        assert_eq!(find(b"abcabcabc", b"bc", 0..9), Some(1));
        assert_eq!(rfind(b"abcabcabc", b"bc", 0..9), Some(7));
    }

    #[test]
    fn count_is_non_overlapping() {
        assert_eq!(count(b"aaaaa", b"aa", 0..5), 2);
        assert_eq!(count(b"abababa", b"aba", 0..7), 2);
        assert_eq!(count(b"path/to/file", b"/", 0..12), 2);
        assert_eq!(count(b"path/to/file", b"", 0..12), 0);
    }

    #[test]
    fn self_overlapping() {
        assert!(is_self_overlapping(b"aa"));
        assert!(is_self_overlapping(b"abca"));
        assert!(is_self_overlapping(b"abab"));
        assert!(!is_self_overlapping(b"ab"));
        assert!(!is_self_overlapping(b"a"));
        assert!(!is_self_overlapping(b""));
    }
}
