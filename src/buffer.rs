use core::{
    alloc::Layout,
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt::{self, Debug},
    hash::Hash,
    marker::PhantomData,
    mem,
    ops::{Deref, DerefMut},
    ptr::{self, NonNull},
    slice,
};

#[cfg(feature = "panic-on-alloc")]
use crate::infallible;
use crate::{
    AllocError, Allocator, ErrorBehavior, Global, error_behavior_generic_methods_allocation_failure, normalize_index,
    settings::{BufferSettings, Settings},
    verbose,
};

/// Whether a buffer allocated its bytes or borrows them from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ownership {
    Owned,
    Borrowed,
}

/// A growable byte buffer with Python-style string operations.
///
/// A buffer tracks its length and capacity explicitly. The bytes in `0..len` are the content,
/// `len <= capacity` holds after every operation.
///
/// A buffer either owns its bytes, allocated with `A`, or is a *view* over caller memory
/// (see [`view`](Self::view)). The extent of a view is the length of the borrowed slice.
/// A view is never reallocated or freed. Its content may shrink and grow back up to its extent;
/// an operation that needs more room fails like an allocation failure would.
///
/// `S` configures the growth policy, see [`settings`](crate::settings).
///
/// # Examples
/// ```
/// use textbuf::Buffer;
///
/// let mut buffer = Buffer::with_capacity(4);
/// buffer.extend(b"abc");
/// buffer.append(b'd');
/// buffer.append(b'e');
///
/// assert_eq!(buffer, "abcde");
/// assert_eq!(buffer.get(-1), b'e');
/// assert_eq!(buffer.capacity(), 8);
/// ```
pub struct Buffer<'v, A: Allocator = Global, S: Settings = BufferSettings> {
    ptr: NonNull<u8>,
    len: usize,
    cap: usize,
    ownership: Ownership,
    allocator: A,
    marker: PhantomData<(&'v mut [u8], S)>,
}

// SAFETY: A buffer owns its allocation or holds an exclusive borrow, like `Vec<u8, A>` and `&mut [u8]` do.
unsafe impl<A: Allocator + Send, S: Settings> Send for Buffer<'_, A, S> {}

// SAFETY: See above. Shared access only reads.
unsafe impl<A: Allocator + Sync, S: Settings> Sync for Buffer<'_, A, S> {}

impl Buffer<'static> {
    /// Constructs a new empty buffer without allocating.
    ///
    /// # Examples
    /// ```
    /// use textbuf::Buffer;
    ///
    /// let buffer = Buffer::new();
    /// assert_eq!(buffer.len(), 0);
    /// assert_eq!(buffer.capacity(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    /// Constructs a new empty buffer with exactly the specified capacity.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    #[must_use]
    #[inline(always)]
    #[cfg(feature = "panic-on-alloc")]
    pub fn with_capacity(capacity: usize) -> Self {
        infallible(Self::generic_with_capacity_in(capacity, Global))
    }

    /// Constructs a new empty buffer with exactly the specified capacity.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    #[inline(always)]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Self::generic_with_capacity_in(capacity, Global)
    }

    /// Constructs a buffer holding a copy of `bytes`, with a capacity of exactly `bytes.len()`.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// use textbuf::Buffer;
    ///
    /// let buffer = Buffer::from_bytes(b"hello");
    /// assert_eq!(buffer, "hello");
    /// assert_eq!(buffer.capacity(), 5);
    /// ```
    #[must_use]
    #[inline(always)]
    #[cfg(feature = "panic-on-alloc")]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        infallible(Self::generic_from_bytes_in(bytes, Global))
    }

    /// Constructs a buffer holding a copy of `bytes`, with a capacity of exactly `bytes.len()`.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    #[inline(always)]
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, AllocError> {
        Self::generic_from_bytes_in(bytes, Global)
    }
}

impl<'v> Buffer<'v> {
    /// Constructs a view over caller memory. The whole slice is the initial content.
    ///
    /// See [`view_in`](Self::view_in).
    #[must_use]
    #[inline]
    pub fn view(bytes: &'v mut [u8]) -> Self {
        Self::view_in(bytes, Global)
    }
}

impl<'v, A: Allocator, S: Settings> Buffer<'v, A, S> {
    /// Constructs a new empty buffer without allocating.
    #[must_use]
    #[inline]
    pub fn new_in(allocator: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            ownership: Ownership::Owned,
            allocator,
            marker: PhantomData,
        }
    }

    /// Constructs a new empty buffer with exactly the specified capacity.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    #[must_use]
    #[inline(always)]
    #[cfg(feature = "panic-on-alloc")]
    pub fn with_capacity_in(capacity: usize, allocator: A) -> Self {
        infallible(Self::generic_with_capacity_in(capacity, allocator))
    }

    /// Constructs a new empty buffer with exactly the specified capacity.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    #[inline(always)]
    pub fn try_with_capacity_in(capacity: usize, allocator: A) -> Result<Self, AllocError> {
        Self::generic_with_capacity_in(capacity, allocator)
    }

    pub(crate) fn generic_with_capacity_in<B: ErrorBehavior>(capacity: usize, allocator: A) -> Result<Self, B> {
        let mut buffer = Self::new_in(allocator);
        buffer.generic_reallocate::<B>(capacity)?;
        Ok(buffer)
    }

    /// Constructs a buffer holding a copy of `bytes`, with a capacity of exactly `bytes.len()`.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    #[must_use]
    #[inline(always)]
    #[cfg(feature = "panic-on-alloc")]
    pub fn from_bytes_in(bytes: &[u8], allocator: A) -> Self {
        infallible(Self::generic_from_bytes_in(bytes, allocator))
    }

    /// Constructs a buffer holding a copy of `bytes`, with a capacity of exactly `bytes.len()`.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    #[inline(always)]
    pub fn try_from_bytes_in(bytes: &[u8], allocator: A) -> Result<Self, AllocError> {
        Self::generic_from_bytes_in(bytes, allocator)
    }

    pub(crate) fn generic_from_bytes_in<B: ErrorBehavior>(bytes: &[u8], allocator: A) -> Result<Self, B> {
        let mut buffer = Self::generic_with_capacity_in::<B>(bytes.len(), allocator)?;
        buffer.push_within_capacity(bytes);
        Ok(buffer)
    }

    /// Constructs a view over caller memory, using `allocator` for the buffers that operations
    /// like [`partition`](Self::partition) or [`slice`](Self::slice) produce from it.
    ///
    /// The whole slice is the initial content and its length is the extent of the view.
    ///
    /// # Examples
    /// ```
    /// use textbuf::Buffer;
    ///
    /// let mut storage = *b"key=value";
    /// let mut view = Buffer::view(&mut storage);
    ///
    /// let value = view.partition("=");
    /// assert_eq!(view, "key");
    /// assert_eq!(value, "value");
    /// assert!(!value.is_view());
    ///
    /// // the view can grow back into the borrowed bytes
    /// view.extend(b"s");
    /// assert_eq!(view, "keys");
    /// drop(view);
    ///
    /// assert_eq!(&storage, b"keysvalue");
    /// ```
    #[must_use]
    #[inline]
    pub fn view_in(bytes: &'v mut [u8], allocator: A) -> Self {
        Self {
            len: bytes.len(),
            cap: bytes.len(),
            ptr: NonNull::from(bytes).cast(),
            ownership: Ownership::Borrowed,
            allocator,
            marker: PhantomData,
        }
    }

    /// Returns the number of bytes in the buffer.
    #[must_use]
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer contains no bytes.
    #[must_use]
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the total number of bytes the buffer can hold without reallocating.
    ///
    /// For a view this is its extent.
    #[must_use]
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns `true` if this buffer borrows caller memory.
    #[must_use]
    #[inline(always)]
    pub fn is_view(&self) -> bool {
        self.ownership == Ownership::Borrowed
    }

    /// Returns a reference to the allocator.
    #[must_use]
    #[inline(always)]
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Extracts a slice containing the entire buffer.
    #[must_use]
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: `ptr` is valid for `cap` bytes and the first `len` of them are initialized.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Extracts a mutable slice containing the entire buffer.
    #[must_use]
    #[inline(always)]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        // SAFETY: see `as_bytes`, and we hold the only reference to those bytes
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Shortens the buffer to `len` bytes. Does nothing if `len` is not smaller than the current length.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }

    /// Removes all bytes, keeping the capacity.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Returns the byte at `index`, counting from the end for negative indices.
    ///
    /// Returns `0` if the index is out of range.
    ///
    /// # Examples
    /// ```
    /// use textbuf::Buffer;
    ///
    /// let buffer = Buffer::from_bytes(b"abc");
    /// assert_eq!(buffer.get(0), b'a');
    /// assert_eq!(buffer.get(-1), b'c');
    /// assert_eq!(buffer.get(-4), b'c');
    /// assert_eq!(buffer.get(3), 0);
    /// ```
    #[must_use]
    pub fn get(&self, index: isize) -> u8 {
        match normalize_index(index, self.len) {
            Some(index) => self.as_bytes()[index],
            None => 0,
        }
    }

    /// Overwrites the byte at `index`, counting from the end for negative indices,
    /// and returns the byte that was there.
    ///
    /// Returns `0` and writes nothing if the index is out of range.
    ///
    /// # Examples
    /// ```
    /// use textbuf::Buffer;
    ///
    /// let mut buffer = Buffer::from_bytes(b"abc");
    /// assert_eq!(buffer.set(-1, b'x'), b'c');
    /// assert_eq!(buffer.set(5, b'y'), 0);
    /// assert_eq!(buffer, "abx");
    /// ```
    pub fn set(&mut self, index: isize, byte: u8) -> u8 {
        match normalize_index(index, self.len) {
            Some(index) => mem::replace(&mut self.as_mut_bytes()[index], byte),
            None => 0,
        }
    }

    /// Frees owned storage and resets the buffer to the empty state.
    ///
    /// A view only lets go of the borrowed bytes, they are left as they are.
    ///
    /// # Examples
    /// ```
    /// use textbuf::Buffer;
    ///
    /// let mut buffer = Buffer::from_bytes(b"abc");
    /// buffer.destroy();
    /// assert_eq!(buffer.len(), 0);
    /// assert_eq!(buffer.capacity(), 0);
    /// assert!(!buffer.is_view());
    /// ```
    pub fn destroy(&mut self) {
        verbose!(S, "destroy buffer of capacity {} (view: {})", self.cap, self.is_view());

        if self.ownership == Ownership::Owned && self.cap != 0 {
            // SAFETY: we own an allocation of `cap` bytes with an alignment of 1
            unsafe {
                self.allocator
                    .deallocate(self.ptr, Layout::from_size_align_unchecked(self.cap, 1));
            }
        }

        self.ptr = NonNull::dangling();
        self.len = 0;
        self.cap = 0;
        self.ownership = Ownership::Owned;
    }

    error_behavior_generic_methods_allocation_failure! {
        /// Sets the content of the buffer.
        ///
        /// With `Some(source)` the bytes of `source` are copied in. Owned storage is reused if it
        /// can hold them, otherwise the buffer reallocates to `max(source.len(), capacity)` bytes.
        ///
        /// With `None` and a non-zero `capacity` the buffer is emptied and its storage
        /// resized to exactly `capacity` bytes. With `None` and a `capacity` of zero this is
        /// [`destroy`](Self::destroy).
        ///
        /// A view is replaced by owned storage whenever the call allocates.
        ///
        /// On failure the buffer is left empty, as if destroyed.
        impl
        do examples
        /// ```
        /// # use textbuf::Buffer;
        /// let mut buffer = Buffer::new();
        ///
        /// buffer.init(Some(b"hello".as_slice()), 16);
        /// assert_eq!(buffer, "hello");
        /// assert_eq!(buffer.capacity(), 16);
        ///
        /// buffer.init(Some(b"bye".as_slice()), 0);
        /// assert_eq!(buffer, "bye");
        /// assert_eq!(buffer.capacity(), 16);
        ///
        /// buffer.init(None, 4);
        /// assert!(buffer.is_empty());
        /// assert_eq!(buffer.capacity(), 4);
        /// ```
        for fn init
        do examples
        /// ```
        /// # use textbuf::Buffer;
        /// let mut buffer = Buffer::from_bytes(b"hello");
        /// assert!(buffer.try_init(None, usize::MAX).is_err());
        /// assert_eq!(buffer.len(), 0);
        /// assert_eq!(buffer.capacity(), 0);
        /// ```
        for fn try_init
        use fn generic_init(&mut self, source: Option<&[u8]>, capacity: usize) {
            let result = match source {
                Some(source) => self.generic_init_from::<B>(source, capacity),
                None if capacity == 0 => {
                    self.destroy();
                    return Ok(());
                }
                None => self.generic_init_empty::<B>(capacity),
            };

            if result.is_err() {
                self.destroy();
            }

            result
        }

        /// Reallocates the storage to exactly `new_capacity` bytes, keeping the content.
        ///
        /// If `new_capacity` is smaller than the length, the content is truncated.
        /// On failure the buffer is left unmodified.
        do panics
        /// Panics if the buffer is a view.
        impl
        do examples
        /// ```
        /// # use textbuf::Buffer;
        /// let mut buffer = Buffer::from_bytes(b"hello");
        /// buffer.resize(32);
        /// assert_eq!(buffer.capacity(), 32);
        /// buffer.resize(2);
        /// assert_eq!(buffer, "he");
        /// assert_eq!(buffer.capacity(), 2);
        /// ```
        for fn resize
        do examples
        /// ```
        /// # use textbuf::Buffer;
        /// let mut storage = *b"hello";
        /// let mut view = Buffer::view(&mut storage);
        /// assert!(view.try_resize(32).is_err());
        /// assert_eq!(view, "hello");
        /// ```
        for fn try_resize
        use fn generic_resize(&mut self, new_capacity: usize) {
            self.generic_reallocate::<B>(new_capacity)
        }

        /// Reserves capacity for at least `additional` more bytes.
        impl
        for fn reserve
        for fn try_reserve
        use fn generic_reserve(&mut self, additional: usize) {
            match self.len.checked_add(additional) {
                Some(total) => self.generic_reserve_total::<B>(total),
                None => Err(B::capacity_overflow()),
            }
        }

        /// Appends a byte, growing the capacity by the `GROWTH_FACTOR` setting when the buffer is full.
        impl
        do examples
        /// ```
        /// # use textbuf::Buffer;
        /// let mut buffer = Buffer::new();
        /// buffer.append(b'a');
        /// assert_eq!(buffer.capacity(), 8);
        /// buffer.extend(b"bcdefgh");
        /// buffer.append(b'i');
        /// assert_eq!(buffer, "abcdefghi");
        /// assert_eq!(buffer.capacity(), 16);
        /// ```
        for fn append
        for fn try_append
        use fn generic_append(&mut self, byte: u8) {
            if self.len == self.cap {
                self.generic_grow_amortized::<B>()?;
            }

            // SAFETY: `len < cap`
            unsafe { self.ptr.as_ptr().add(self.len).write(byte) };
            self.len += 1;
            Ok(())
        }

        /// Appends the bytes of `other` and returns how many bytes were appended.
        ///
        /// If the buffer is too small it grows to exactly fit the result.
        impl
        do examples
        /// ```
        /// # use textbuf::Buffer;
        /// let mut buffer = Buffer::from_bytes(b"hello");
        /// assert_eq!(buffer.extend(b", world"), 7);
        /// assert_eq!(buffer, "hello, world");
        /// assert_eq!(buffer.capacity(), 12);
        /// ```
        for fn extend
        for fn try_extend
        use fn generic_extend(&mut self, other: &[u8]) -> usize {
            match self.len.checked_add(other.len()) {
                Some(total) => self.generic_reserve_total::<B>(total)?,
                None => return Err(B::capacity_overflow()),
            }

            self.push_within_capacity(other);
            Ok(other.len())
        }

        /// Returns an owned copy of this buffer with a capacity of exactly its length.
        impl
        for fn to_owned_buffer
        for fn try_to_owned_buffer
        use fn generic_to_owned_buffer(&self) -> Buffer<'static, A, S>
        where { A: Clone } in {
            Buffer::generic_from_bytes_in::<B>(self.as_bytes(), self.allocator.clone())
        }
    }

    fn generic_init_from<B: ErrorBehavior>(&mut self, source: &[u8], capacity: usize) -> Result<(), B> {
        if self.ownership == Ownership::Owned && self.cap >= source.len() {
            self.len = 0;
            self.push_within_capacity(source);
            return Ok(());
        }

        self.replace_storage::<B>(source.len().max(capacity))?;
        self.push_within_capacity(source);
        Ok(())
    }

    fn generic_init_empty<B: ErrorBehavior>(&mut self, capacity: usize) -> Result<(), B> {
        if self.ownership == Ownership::Owned {
            self.len = 0;
            self.generic_reallocate::<B>(capacity)
        } else {
            self.replace_storage::<B>(capacity)
        }
    }

    /// Drops the current storage in favor of a fresh empty allocation of `capacity` bytes.
    fn replace_storage<B: ErrorBehavior>(&mut self, capacity: usize) -> Result<(), B> {
        let layout = match Layout::array::<u8>(capacity) {
            Ok(layout) => layout,
            Err(_) => return Err(B::capacity_overflow()),
        };

        let ptr = if capacity == 0 {
            NonNull::dangling()
        } else {
            match self.allocator.allocate(layout) {
                Ok(ptr) => ptr.cast::<u8>(),
                Err(_) => return Err(B::allocation(layout)),
            }
        };

        self.destroy();
        self.ptr = ptr;
        self.cap = capacity;

        verbose!(S, "allocated fresh storage of {} bytes", capacity);
        Ok(())
    }

    /// Reallocates owned storage to exactly `new_cap` bytes.
    pub(crate) fn generic_reallocate<B: ErrorBehavior>(&mut self, new_cap: usize) -> Result<(), B> {
        if self.ownership == Ownership::Borrowed {
            return Err(B::view_not_resizable());
        }

        let old_cap = self.cap;

        if new_cap == old_cap {
            return Ok(());
        }

        if new_cap == 0 {
            self.destroy();
            return Ok(());
        }

        let new_layout = match Layout::array::<u8>(new_cap) {
            Ok(layout) => layout,
            Err(_) => return Err(B::capacity_overflow()),
        };

        // SAFETY: a non-zero `old_cap` means we own an allocation of `old_cap` bytes with an alignment of 1.
        // `new_layout` has the same alignment and is larger for `grow` and smaller for `shrink`.
        let result = unsafe {
            if old_cap == 0 {
                self.allocator.allocate(new_layout)
            } else {
                let old_layout = Layout::from_size_align_unchecked(old_cap, 1);

                if new_cap > old_cap {
                    self.allocator.grow(self.ptr, old_layout, new_layout)
                } else {
                    self.allocator.shrink(self.ptr, old_layout, new_layout)
                }
            }
        };

        match result {
            Ok(ptr) => {
                self.ptr = ptr.cast::<u8>();
                self.cap = new_cap;
                self.len = self.len.min(new_cap);
                verbose!(S, "reallocated buffer from {} to {} bytes", old_cap, new_cap);
                Ok(())
            }
            Err(_) => Err(B::allocation(new_layout)),
        }
    }

    /// Makes sure the capacity is at least `total`, growing to exactly `total` if it isn't.
    pub(crate) fn generic_reserve_total<B: ErrorBehavior>(&mut self, total: usize) -> Result<(), B> {
        if total <= self.cap {
            return Ok(());
        }

        if self.ownership == Ownership::Borrowed {
            return Err(B::view_no_space(total - self.len));
        }

        self.generic_reallocate::<B>(total)
    }

    #[cold]
    #[inline(never)]
    fn generic_grow_amortized<B: ErrorBehavior>(&mut self) -> Result<(), B> {
        if self.ownership == Ownership::Borrowed {
            return Err(B::view_no_space(1));
        }

        let required = match self.len.checked_add(1) {
            Some(required) => required,
            None => return Err(B::capacity_overflow()),
        };

        let grown = match self.cap.checked_mul(S::GROWTH_FACTOR) {
            Some(grown) => grown,
            None => required,
        };

        self.generic_reallocate::<B>(grown.max(required).max(S::MIN_NON_ZERO_CAP))
    }

    /// Copies `bytes` to the end of the content.
    ///
    /// The caller must have made sure `len + bytes.len() <= cap`.
    #[inline]
    pub(crate) fn push_within_capacity(&mut self, bytes: &[u8]) {
        assert!(bytes.len() <= self.cap - self.len);

        // SAFETY: the assertion above makes sure the destination fits,
        // `bytes` can't alias our storage since we hold `&mut self`
        unsafe {
            ptr::copy_nonoverlapping(bytes.as_ptr(), self.ptr.as_ptr().add(self.len), bytes.len());
        }

        self.len += bytes.len();
    }

    /// Sets the length, zeroing the bytes that become part of the content.
    ///
    /// # Panics
    /// Panics if `new_len` exceeds the capacity.
    pub(crate) fn set_len_zeroed(&mut self, new_len: usize) {
        assert!(new_len <= self.cap);

        if new_len > self.len {
            // SAFETY: `len..new_len` is within the allocation
            unsafe { self.ptr.as_ptr().add(self.len).write_bytes(0, new_len - self.len) };
        }

        self.len = new_len;
    }

    /// Writes a zero byte right after the content without making it part of the content.
    pub(crate) fn generic_terminate<B: ErrorBehavior>(&mut self) -> Result<&[u8], B> {
        match self.len.checked_add(1) {
            Some(total) => self.generic_reserve_total::<B>(total)?,
            None => return Err(B::capacity_overflow()),
        }

        // SAFETY: `len < cap` after the reservation above, the byte is initialized before we read it
        unsafe {
            self.ptr.as_ptr().add(self.len).write(0);
            Ok(slice::from_raw_parts(self.ptr.as_ptr(), self.len + 1))
        }
    }

    /// Constructs an empty owned buffer that allocates with a clone of this buffer's allocator.
    #[inline]
    pub(crate) fn new_sibling(&self) -> Buffer<'static, A, S>
    where
        A: Clone,
    {
        Buffer::new_in(self.allocator.clone())
    }
}

impl<A: Allocator, S: Settings> Drop for Buffer<'_, A, S> {
    fn drop(&mut self) {
        if self.ownership == Ownership::Owned && self.cap != 0 {
            // SAFETY: we own an allocation of `cap` bytes with an alignment of 1
            unsafe {
                self.allocator
                    .deallocate(self.ptr, Layout::from_size_align_unchecked(self.cap, 1));
            }
        }
    }
}

impl<A: Allocator + Default, S: Settings> Default for Buffer<'_, A, S> {
    #[inline]
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

#[cfg(feature = "panic-on-alloc")]
impl<A: Allocator + Clone, S: Settings> Clone for Buffer<'_, A, S> {
    /// Clones into an owned buffer, even when `self` is a view.
    fn clone(&self) -> Self {
        self.to_owned_buffer()
    }
}

impl<A: Allocator, S: Settings> Debug for Buffer<'_, A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{}\"", self.as_bytes().escape_ascii())
    }
}

impl<A: Allocator, S: Settings> Deref for Buffer<'_, A, S> {
    type Target = [u8];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl<A: Allocator, S: Settings> DerefMut for Buffer<'_, A, S> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_bytes()
    }
}

impl<A: Allocator, S: Settings> AsRef<[u8]> for Buffer<'_, A, S> {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl<A: Allocator, S: Settings> AsMut<[u8]> for Buffer<'_, A, S> {
    #[inline(always)]
    fn as_mut(&mut self) -> &mut [u8] {
        self
    }
}

impl<A: Allocator, S: Settings> Borrow<[u8]> for Buffer<'_, A, S> {
    #[inline(always)]
    fn borrow(&self) -> &[u8] {
        self
    }
}

impl<A: Allocator, S: Settings> BorrowMut<[u8]> for Buffer<'_, A, S> {
    #[inline(always)]
    fn borrow_mut(&mut self) -> &mut [u8] {
        self
    }
}

impl<A: Allocator, S: Settings> Eq for Buffer<'_, A, S> {}

impl<A: Allocator, S: Settings> PartialOrd for Buffer<'_, A, S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Allocator, S: Settings> Ord for Buffer<'_, A, S> {
    /// Compares the content byte by byte, a proper prefix orders first.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl<A: Allocator, S: Settings> Hash for Buffer<'_, A, S> {
    #[inline(always)]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl<A: Allocator, S: Settings> fmt::Write for Buffer<'_, A, S> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.try_extend(s.as_bytes()) {
            Ok(_) => Ok(()),
            Err(_) => Err(fmt::Error),
        }
    }
}

/// Returns [`ErrorKind::OutOfMemory`](std::io::ErrorKind::OutOfMemory) when extending fails.
#[cfg(feature = "std")]
impl<A: Allocator, S: Settings> std::io::Write for Buffer<'_, A, S> {
    #[inline(always)]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.try_extend(buf).is_err() {
            return Err(std::io::ErrorKind::OutOfMemory.into());
        }

        Ok(buf.len())
    }

    #[inline(always)]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.write(buf).map(drop)
    }
}

#[cfg(feature = "panic-on-alloc")]
impl<A: Allocator, S: Settings> Extend<u8> for Buffer<'_, A, S> {
    #[inline]
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        let iter = iter.into_iter();

        self.reserve(iter.size_hint().0);

        for byte in iter {
            self.append(byte);
        }
    }
}

#[cfg(feature = "panic-on-alloc")]
impl<'t, A: Allocator, S: Settings> Extend<&'t u8> for Buffer<'_, A, S> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'t u8>>(&mut self, iter: I) {
        Extend::<u8>::extend(self, iter.into_iter().copied());
    }
}

macro_rules! impl_bytes_eq {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<$($vars)*> PartialEq<$rhs> for $lhs {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                AsRef::<[u8]>::as_ref(self) == AsRef::<[u8]>::as_ref(other)
            }
        }
    };
}

impl_bytes_eq! { [A1: Allocator, S1: Settings, A2: Allocator, S2: Settings] Buffer<'_, A1, S1>, Buffer<'_, A2, S2> }
impl_bytes_eq! { [A: Allocator, S: Settings] Buffer<'_, A, S>, [u8] }
impl_bytes_eq! { [A: Allocator, S: Settings] Buffer<'_, A, S>, &[u8] }
impl_bytes_eq! { [A: Allocator, S: Settings, const N: usize] Buffer<'_, A, S>, [u8; N] }
impl_bytes_eq! { [A: Allocator, S: Settings, const N: usize] Buffer<'_, A, S>, &[u8; N] }
impl_bytes_eq! { [A: Allocator, S: Settings] Buffer<'_, A, S>, str }
impl_bytes_eq! { [A: Allocator, S: Settings] Buffer<'_, A, S>, &str }
impl_bytes_eq! { [A: Allocator, S: Settings] [u8], Buffer<'_, A, S> }
impl_bytes_eq! { [A: Allocator, S: Settings] &[u8], Buffer<'_, A, S> }
impl_bytes_eq! { [A: Allocator, S: Settings] str, Buffer<'_, A, S> }
impl_bytes_eq! { [A: Allocator, S: Settings] &str, Buffer<'_, A, S> }
