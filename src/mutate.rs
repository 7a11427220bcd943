use core::{alloc::Layout, ffi::CStr};

use allocator_api2::vec::Vec;

use crate::{
    Allocator, Buffer, ErrorBehavior, bounds::wrap, error_behavior_generic_methods_allocation_failure, find,
    settings::Settings,
};

/// The bytes [`strip`](Buffer::strip) and its siblings remove by default:
/// space, tab, form feed, newline, carriage return and vertical tab.
pub const WHITESPACE: &[u8] = b" \t\x0c\n\r\x0b";

impl<A: Allocator, S: Settings> Buffer<'_, A, S> {
    error_behavior_generic_methods_allocation_failure! {
        /// Replaces occurrences of `old` with `new` and returns how many were replaced.
        ///
        /// A `limit` of `0` replaces every occurrence, otherwise only the first `limit`
        /// occurrences from the left are replaced. Occurrences don't overlap, they are
        /// counted left to right like [`count`](Self::count) does.
        ///
        /// The buffer grows at most once. Growing with a needle that overlaps itself, like `"aa"`,
        /// also allocates a list of the occurrences. On failure the buffer is left unmodified.
        impl
        do examples
        /// ```
        /// # use textbuf::Buffer;
        /// let mut path = Buffer::from_bytes(b"path/to/file");
        /// assert_eq!(path.replace("/", "\\", 0), 2);
        /// assert_eq!(path, "path\\to\\file");
        ///
        /// let mut path = Buffer::from_bytes(b"path/to/file");
        /// assert_eq!(path.replace("/", " / ", 1), 1);
        /// assert_eq!(path, "path / to/file");
        ///
        /// let mut path = Buffer::from_bytes(b"path/to/file");
        /// assert_eq!(path.replace("to/", "", 0), 1);
        /// assert_eq!(path, "path/file");
        /// ```
        for fn replace
        for fn try_replace
        use fn generic_replace(&mut self, old: impl AsRef<[u8]>, new: impl AsRef<[u8]>, limit: usize) -> usize
        where { A: Clone } in {
            let old = old.as_ref();
            let new = new.as_ref();
            let len = self.len();

            let occurrences = find::count(self, old, 0..len);

            if occurrences == 0 {
                return Ok(0);
            }

            let replaced = if limit == 0 { occurrences } else { limit.min(occurrences) };

            if new.len() > old.len() {
                let new_len = match (new.len() - old.len()).checked_mul(replaced) {
                    Some(growth) => match len.checked_add(growth) {
                        Some(new_len) => new_len,
                        None => return Err(B::capacity_overflow()),
                    },
                    None => return Err(B::capacity_overflow()),
                };

                // a backward search can't tell which overlapping occurrence a forward scan picks
                let starts = if find::is_self_overlapping(old) {
                    Some(self.generic_occurrence_starts::<B>(old, replaced)?)
                } else {
                    None
                };

                self.generic_reserve_total::<B>(new_len)?;
                self.replace_backward(old, new, replaced, occurrences, new_len, starts.as_deref());
            } else {
                self.replace_forward(old, new, replaced);
            }

            Ok(replaced)
        }

        /// Replaces each tab with `tab_width` spaces and returns the number of tabs.
        ///
        /// A `tab_width` of `0` removes the tabs.
        impl
        do examples
        /// ```
        /// # use textbuf::Buffer;
        /// let mut text = Buffer::from_bytes(b"\tkey:\tvalue");
        /// assert_eq!(text.expand_tabs(2), 2);
        /// assert_eq!(text, "  key:  value");
        /// ```
        for fn expand_tabs
        for fn try_expand_tabs
        use fn generic_expand_tabs(&mut self, tab_width: usize) -> usize {
            let len = self.len();
            let tabs = self.iter().filter(|&&byte| byte == b'\t').count();

            if tabs == 0 {
                return Ok(0);
            }

            if tab_width == 0 {
                let mut write = 0;

                for read in 0..len {
                    let byte = self[read];

                    if byte != b'\t' {
                        self[write] = byte;
                        write += 1;
                    }
                }

                self.truncate(write);
                return Ok(tabs);
            }

            let new_len = match (tab_width - 1).checked_mul(tabs) {
                Some(growth) => match len.checked_add(growth) {
                    Some(new_len) => new_len,
                    None => return Err(B::capacity_overflow()),
                },
                None => return Err(B::capacity_overflow()),
            };

            self.generic_reserve_total::<B>(new_len)?;
            self.set_len_zeroed(new_len);

            // the write cursor never falls behind the read cursor
            let bytes = self.as_mut_bytes();
            let mut write = new_len;

            for read in (0..len).rev() {
                let byte = bytes[read];

                if byte == b'\t' {
                    write -= tab_width;
                    bytes[write..write + tab_width].fill(b' ');
                } else {
                    write -= 1;
                    bytes[write] = byte;
                }
            }

            debug_assert_eq!(write, 0);
            Ok(tabs)
        }

        /// Returns a Python-style extended slice `self[start:end:step]` as a new owned buffer.
        ///
        /// - A `step` of `0` is treated as `1`.
        /// - Negative `start` and `end` count from the end, values past the end are clamped to the length.
        /// - For a positive `step` an `end` of `0` means "to the end".
        /// - For a negative `step` an `end` equal to the length means "through the first byte",
        ///   and `start` is clamped to the last byte.
        /// - A range that runs against the direction of `step` yields an empty buffer.
        ///
        /// The new buffer allocates exactly as much as the slice needs.
        impl
        do examples
        /// ```
        /// # use textbuf::Buffer;
        /// let text = Buffer::from_bytes(b"abcdef");
        /// assert_eq!(text.slice(1, 4, 1), "bcd");
        /// assert_eq!(text.slice(0, 0, 2), "ace");
        /// assert_eq!(text.slice(-2, 0, 0), "ef");
        /// assert_eq!(text.slice(-1, 6, -1), "fedcba");
        /// assert_eq!(text.slice(4, 1, -2), "ec");
        /// assert_eq!(text.slice(4, 1, 1), "");
        /// ```
        for fn slice
        for fn try_slice
        use fn generic_slice(&self, start: isize, end: isize, step: isize) -> Buffer<'static, A, S>
        where { A: Clone } in {
            let len = self.len();
            let mut slice = self.new_sibling();
            let step = if step == 0 { 1 } else { step };

            let (first, count) = if step > 0 {
                let start = wrap(start, len);
                let end = if end == 0 { len } else { wrap(end, len) };

                if end <= start {
                    return Ok(slice);
                }

                (start, (end - start).div_ceil(step.unsigned_abs()))
            } else {
                if len == 0 {
                    return Ok(slice);
                }

                let start = wrap(start, len).min(len - 1);
                let end = wrap(end, len);

                // an end at the length stands for the position before the first byte
                let span = if end == len {
                    start + 1
                } else if end < start {
                    start - end
                } else {
                    return Ok(slice);
                };

                (start, span.div_ceil(step.unsigned_abs()))
            };

            slice.generic_reserve_total::<B>(count)?;

            let mut index = first;

            for _ in 0..count {
                slice.generic_append::<B>(self.as_bytes()[index])?;
                index = index.wrapping_add_signed(step);
            }

            Ok(slice)
        }

        /// Returns the content as a C string.
        ///
        /// A zero byte is written after the content, it does not become part of the content.
        /// If the content contains a zero byte the string ends there.
        impl
        do examples
        /// ```
        /// # use textbuf::Buffer;
        /// let mut text = Buffer::from_bytes(b"hello");
        /// assert_eq!(text.to_c_str(), c"hello");
        /// assert_eq!(text.len(), 5);
        /// ```
        for fn to_c_str
        for fn try_to_c_str
        use fn generic_to_c_str(&mut self) -> &CStr {
            let bytes = self.generic_terminate::<B>()?;

            Ok(match CStr::from_bytes_until_nul(bytes) {
                Ok(c_str) => c_str,
                Err(_) => <&CStr>::default(),
            })
        }
    }

    /// Removes leading bytes contained in `chars`, or in [`WHITESPACE`] if `chars` is `None`.
    ///
    /// # Examples
    /// ```
    /// # use textbuf::Buffer;
    /// let mut text = Buffer::from_bytes(b"xxhixx");
    /// text.lstrip(Some(b"x".as_slice()));
    /// assert_eq!(text, "hixx");
    /// ```
    pub fn lstrip(&mut self, chars: Option<&[u8]>) {
        let chars = chars.unwrap_or(WHITESPACE);
        let len = self.len();

        let skip = match self.iter().position(|byte| !chars.contains(byte)) {
            Some(skip) => skip,
            None => len,
        };

        if skip != 0 {
            self.copy_within(skip.., 0);
            self.truncate(len - skip);
        }
    }

    /// Removes trailing bytes contained in `chars`, or in [`WHITESPACE`] if `chars` is `None`.
    pub fn rstrip(&mut self, chars: Option<&[u8]>) {
        let chars = chars.unwrap_or(WHITESPACE);

        let keep = match self.iter().rposition(|byte| !chars.contains(byte)) {
            Some(last) => last + 1,
            None => 0,
        };

        self.truncate(keep);
    }

    /// Removes leading and trailing bytes contained in `chars`, or in [`WHITESPACE`] if `chars` is `None`.
    ///
    /// # Examples
    /// ```
    /// # use textbuf::Buffer;
    /// let mut text = Buffer::from_bytes(b" \t\x0c\n\r\x0bHello, World \t\x0c\n\r\x0b");
    /// text.strip(None);
    /// assert_eq!(text, "Hello, World");
    /// ```
    pub fn strip(&mut self, chars: Option<&[u8]>) {
        // right first, so the left strip moves less
        self.rstrip(chars);
        self.lstrip(chars);
    }

    /// Collects the starts of the first `n` occurrences of `needle`, left to right.
    fn generic_occurrence_starts<B: ErrorBehavior>(&self, needle: &[u8], n: usize) -> Result<Vec<usize, A>, B>
    where
        A: Clone,
    {
        let mut starts = Vec::new_in(self.allocator().clone());

        if starts.try_reserve_exact(n).is_err() {
            return match Layout::array::<usize>(n) {
                Ok(layout) => Err(B::allocation(layout)),
                Err(_) => Err(B::capacity_overflow()),
            };
        }

        let len = self.len();
        let mut search_start = 0;

        while starts.len() < n {
            let Some(pos) = find::find(self, needle, search_start..len) else {
                break;
            };

            starts.push(pos);
            search_start = pos + needle.len();
        }

        Ok(starts)
    }

    /// Moves bytes to their final place when replacing makes the content longer.
    ///
    /// The content must have been reserved to `new_len` bytes. `starts` holds the occurrences to
    /// replace if `old` overlaps itself, otherwise they are searched from the right.
    fn replace_backward(
        &mut self,
        old: &[u8],
        new: &[u8],
        replaced: usize,
        occurrences: usize,
        new_len: usize,
        starts: Option<&[usize]>,
    ) {
        let len = self.len();

        self.set_len_zeroed(new_len);
        let bytes = self.as_mut_bytes();

        let mut read_end = len;
        let mut write = new_len;

        match starts {
            Some(starts) => {
                for &pos in starts.iter().rev() {
                    write = rewrite_occurrence(bytes, pos, old.len(), new, read_end, write);
                    read_end = pos;
                }
            }
            None => {
                // skip the occurrences that stay, they move along with the tail
                let mut search_end = len;

                for _ in replaced..occurrences {
                    if let Some(pos) = find::rfind(bytes, old, 0..search_end) {
                        search_end = pos;
                    }
                }

                for _ in 0..replaced {
                    let Some(pos) = find::rfind(bytes, old, 0..search_end) else {
                        break;
                    };

                    write = rewrite_occurrence(bytes, pos, old.len(), new, read_end, write);
                    read_end = pos;
                    search_end = pos;
                }
            }
        }

        debug_assert_eq!(write, read_end);
    }

    /// Replaces left to right when replacing doesn't make the content longer.
    fn replace_forward(&mut self, old: &[u8], new: &[u8], replaced: usize) {
        let len = self.len();
        let bytes = self.as_mut_bytes();

        let mut read = 0;
        let mut write = 0;

        for _ in 0..replaced {
            let Some(pos) = find::find(bytes, old, read..len) else {
                break;
            };

            bytes.copy_within(read..pos, write);
            write += pos - read;

            bytes[write..write + new.len()].copy_from_slice(new);
            write += new.len();

            read = pos + old.len();
        }

        bytes.copy_within(read..len, write);
        write += len - read;

        self.truncate(write);
    }
}

/// Moves `bytes[pos + old_len..read_end]` to end at `write` and puts `new` in front of it.
///
/// Returns the new write position.
fn rewrite_occurrence(bytes: &mut [u8], pos: usize, old_len: usize, new: &[u8], read_end: usize, write: usize) -> usize {
    let tail = pos + old_len..read_end;
    let write = write - tail.len();
    bytes.copy_within(tail, write);

    let write = write - new.len();
    bytes[write..write + new.len()].copy_from_slice(new);
    write
}
