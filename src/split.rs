use core::{alloc::Layout, num::NonZeroUsize};

use allocator_api2::vec::Vec;

use crate::{
    Allocator, Buffer, ErrorBehavior, WHITESPACE, error_behavior_generic_methods_allocation_failure, find,
    settings::Settings,
};

impl<A: Allocator, S: Settings> Buffer<'_, A, S> {
    error_behavior_generic_methods_allocation_failure! {
        /// Splits the buffer at the first occurrence of `separator`.
        ///
        /// The buffer is truncated to the bytes before the separator and the bytes after it
        /// are returned. If there is no separator the buffer is left as it is and an empty buffer
        /// is returned.
        impl
        do examples
        /// ```
        /// # use textbuf::Buffer;
        /// let mut text = Buffer::from_bytes(b"a=b=c");
        /// let rest = text.partition("=");
        /// assert_eq!(text, "a");
        /// assert_eq!(rest, "b=c");
        ///
        /// let rest = text.partition("=");
        /// assert_eq!(text, "a");
        /// assert!(rest.is_empty());
        /// ```
        for fn partition
        for fn try_partition
        use fn generic_partition(&mut self, separator: impl AsRef<[u8]>) -> Buffer<'static, A, S>
        where { A: Clone } in {
            let separator = separator.as_ref();

            match find::find(self, separator, 0..self.len()) {
                Some(pos) => self.generic_split_off::<B>(pos, separator.len()),
                None => Ok(self.new_sibling()),
            }
        }

        /// Splits the buffer at the last occurrence of `separator`.
        ///
        /// Works like [`partition`](Self::partition) otherwise.
        impl
        do examples
        /// ```
        /// # use textbuf::Buffer;
        /// let mut text = Buffer::from_bytes(b"a=b=c");
        /// let rest = text.rpartition("=");
        /// assert_eq!(text, "a=b");
        /// assert_eq!(rest, "c");
        /// ```
        for fn rpartition
        for fn try_rpartition
        use fn generic_rpartition(&mut self, separator: impl AsRef<[u8]>) -> Buffer<'static, A, S>
        where { A: Clone } in {
            let separator = separator.as_ref();

            match find::rfind(self, separator, 0..self.len()) {
                Some(pos) => self.generic_split_off::<B>(pos, separator.len()),
                None => Ok(self.new_sibling()),
            }
        }

        /// Splits the buffer into at most `max_parts` segments separated by `separator`.
        ///
        /// The last segment takes the rest of the buffer, separators included.
        /// An empty `separator` never matches so the result is the whole buffer.
        impl
        do examples
        /// ```
        /// # use textbuf::Buffer;
        /// use core::num::NonZeroUsize;
        ///
        /// let text = Buffer::from_bytes(b"a,b,c,d");
        /// let parts = text.split(",", NonZeroUsize::new(3).unwrap());
        /// assert_eq!(parts, ["a", "b", "c,d"]);
        /// ```
        for fn split
        for fn try_split
        use fn generic_split(&self, separator: impl AsRef<[u8]>, max_parts: NonZeroUsize) -> Vec<Buffer<'static, A, S>, A>
        where { A: Clone } in {
            let separator = separator.as_ref();
            let len = self.len();
            let mut parts = Vec::new_in(self.allocator().clone());
            let mut start = 0;

            while parts.len() + 1 < max_parts.get() {
                let Some(pos) = find::find(self, separator, start..len) else {
                    break;
                };

                push_part::<B, A, S>(&mut parts, self.generic_sub_buffer::<B>(start, pos)?)?;
                start = pos + separator.len();
            }

            push_part::<B, A, S>(&mut parts, self.generic_sub_buffer::<B>(start, len)?)?;
            Ok(parts)
        }

        /// Splits the buffer at every occurrence of `separator`.
        impl
        do examples
        /// ```
        /// # use textbuf::Buffer;
        /// let text = Buffer::from_bytes(b"path/to/file");
        /// let parts = text.split_all("/");
        /// assert_eq!(parts, ["path", "to", "file"]);
        ///
        /// let mut joined = Buffer::new();
        /// joined.join("/", &parts);
        /// assert_eq!(joined, text);
        /// ```
        for fn split_all
        for fn try_split_all
        use fn generic_split_all(&self, separator: impl AsRef<[u8]>) -> Vec<Buffer<'static, A, S>, A>
        where { A: Clone } in {
            self.generic_split::<B>(separator, NonZeroUsize::MAX)
        }

        /// Splits the buffer at runs of [`WHITESPACE`], discarding empty segments.
        impl
        do examples
        /// ```
        /// # use textbuf::Buffer;
        /// let text = Buffer::from_bytes(b"  one \t two\n\nthree ");
        /// assert_eq!(text.split_whitespace(), ["one", "two", "three"]);
        /// ```
        for fn split_whitespace
        for fn try_split_whitespace
        use fn generic_split_whitespace(&self) -> Vec<Buffer<'static, A, S>, A>
        where { A: Clone } in {
            let mut parts = Vec::new_in(self.allocator().clone());

            for segment in self.as_bytes().split(|byte| WHITESPACE.contains(byte)) {
                if segment.is_empty() {
                    continue;
                }

                let part = Buffer::generic_from_bytes_in::<B>(segment, self.allocator().clone())?;
                push_part::<B, A, S>(&mut parts, part)?;
            }

            Ok(parts)
        }

        /// Replaces the content with `parts` separated by `separator`.
        ///
        /// The storage is sized once for the result. Joining no parts leaves the buffer empty.
        impl
        do examples
        /// ```
        /// # use textbuf::Buffer;
        /// let mut text = Buffer::from_bytes(b"old content");
        /// text.join(", ", &["a", "b", "c"]);
        /// assert_eq!(text, "a, b, c");
        ///
        /// text.join(", ", &[] as &[&str]);
        /// assert!(text.is_empty());
        /// ```
        for fn join
        for fn try_join
        use fn generic_join<{P: AsRef<[u8]>}>(&mut self, separator: impl AsRef<[u8]>, parts: &[P]) {
            let separator = separator.as_ref();

            let mut total = separator.len().checked_mul(parts.len().saturating_sub(1));

            for part in parts {
                total = match total {
                    Some(total) => total.checked_add(part.as_ref().len()),
                    None => None,
                };
            }

            let Some(total) = total else {
                return Err(B::capacity_overflow());
            };

            self.generic_reserve_total::<B>(total)?;
            self.clear();

            for (i, part) in parts.iter().enumerate() {
                if i != 0 {
                    self.push_within_capacity(separator);
                }

                self.push_within_capacity(part.as_ref());
            }

            Ok(())
        }
    }

    /// Moves the bytes after `separator_len` bytes at `pos` into a new buffer and truncates to `pos`.
    fn generic_split_off<B: ErrorBehavior>(&mut self, pos: usize, separator_len: usize) -> Result<Buffer<'static, A, S>, B>
    where
        A: Clone,
    {
        let suffix = self.generic_sub_buffer::<B>(pos + separator_len, self.len())?;
        self.truncate(pos);
        Ok(suffix)
    }

    fn generic_sub_buffer<B: ErrorBehavior>(&self, start: usize, end: usize) -> Result<Buffer<'static, A, S>, B>
    where
        A: Clone,
    {
        Buffer::generic_from_bytes_in::<B>(&self[start..end], self.allocator().clone())
    }
}

fn push_part<B: ErrorBehavior, A: Allocator, S: Settings>(
    parts: &mut Vec<Buffer<'static, A, S>, A>,
    part: Buffer<'static, A, S>,
) -> Result<(), B> {
    if parts.try_reserve(1).is_err() {
        return Err(B::allocation(Layout::new::<Buffer<'static, A, S>>()));
    }

    parts.push(part);
    Ok(())
}
