//! Straightforward implementations on `Vec<u8>` that the buffer is checked against.

use std::ops::Range;

pub(crate) const WHITESPACE: &[u8] = b" \t\x0c\n\r\x0b";

pub(crate) fn wrap(bound: isize, len: usize) -> usize {
    if bound >= 0 {
        return (bound as usize).min(len);
    }

    if len == 0 {
        return 0;
    }

    match bound.unsigned_abs() % len {
        0 => 0,
        magnitude => len - magnitude,
    }
}

pub(crate) fn resolve(start: isize, end: isize, len: usize) -> Range<usize> {
    let start = wrap(start, len);
    let end = if end == 0 { len } else { wrap(end, len) };
    start..end.max(start)
}

pub(crate) fn index(index: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let index = if index < 0 { wrap(index, len) } else { index as usize };
    (index < len).then_some(index)
}

pub(crate) fn occurrences(haystack: &[u8], needle: &[u8], range: Range<usize>) -> Vec<usize> {
    let mut found = Vec::new();

    if needle.is_empty() {
        return found;
    }

    let mut i = range.start;

    while i + needle.len() <= range.end {
        if haystack[i..].starts_with(needle) {
            found.push(i);
            i += needle.len();
        } else {
            i += 1;
        }
    }

    found
}

pub(crate) fn find(haystack: &[u8], needle: &[u8], range: Range<usize>) -> Option<usize> {
    occurrences(haystack, needle, range).first().copied()
}

pub(crate) fn rfind(haystack: &[u8], needle: &[u8], range: Range<usize>) -> Option<usize> {
    if needle.is_empty() || range.len() < needle.len() {
        return None;
    }

    (range.start..=range.end - needle.len())
        .rev()
        .find(|&i| haystack[i..].starts_with(needle))
}

pub(crate) fn replace(haystack: &[u8], old: &[u8], new: &[u8], limit: usize) -> (Vec<u8>, usize) {
    let mut found = occurrences(haystack, old, 0..haystack.len());

    if limit != 0 {
        found.truncate(limit);
    }

    let mut out = Vec::new();
    let mut read = 0;

    for &pos in &found {
        out.extend_from_slice(&haystack[read..pos]);
        out.extend_from_slice(new);
        read = pos + old.len();
    }

    out.extend_from_slice(&haystack[read..]);
    (out, found.len())
}

pub(crate) fn expand_tabs(bytes: &[u8], tab_width: usize) -> Vec<u8> {
    let mut out = Vec::new();

    for &byte in bytes {
        if byte == b'\t' {
            out.extend(std::iter::repeat_n(b' ', tab_width));
        } else {
            out.push(byte);
        }
    }

    out
}

pub(crate) fn strip(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| !WHITESPACE.contains(b)).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|b| !WHITESPACE.contains(b)).map_or(start, |i| i + 1);
    &bytes[start..end.max(start)]
}

pub(crate) fn slice(bytes: &[u8], start: isize, end: isize, step: isize) -> Vec<u8> {
    let len = bytes.len();
    let step = if step == 0 { 1 } else { step };

    if step > 0 {
        let range = resolve(start, end, len);
        return bytes[range].iter().step_by(step as usize).copied().collect();
    }

    if len == 0 {
        return Vec::new();
    }

    let start = wrap(start, len).min(len - 1);
    let end = wrap(end, len);

    let lowest = if end == len {
        0
    } else if end < start {
        end + 1
    } else {
        return Vec::new();
    };

    bytes[lowest..=start].iter().rev().step_by(step.unsigned_abs()).copied().collect()
}

pub(crate) fn split(bytes: &[u8], separator: &[u8]) -> Vec<Vec<u8>> {
    let mut parts = Vec::new();
    let mut start = 0;

    for pos in occurrences(bytes, separator, 0..bytes.len()) {
        parts.push(bytes[start..pos].to_vec());
        start = pos + separator.len();
    }

    parts.push(bytes[start..].to_vec());
    parts
}
