use core::{fmt, mem, ptr, slice};

use crate::{
    ArrayError,
    cursor::{Cursor, CursorMut, Forward, Reverse},
    raw::RawBuffer,
};

/// Nominal capacity of an array created without an explicit (non-zero) capacity.
pub const DEFAULT_CAPACITY: usize = 8;

/// A contiguous, growable sequence of `T`.
///
/// The first `len` slots of the buffer are live; the remaining
/// `capacity - len` slots are allocated but uninitialized. Storage is
/// reserved lazily: a fresh array only records its nominal capacity and
/// allocates on the first insertion. When an insertion finds the buffer full
/// the capacity doubles.
///
/// # Example
///
/// ```
/// use growable_core::GrowableArray;
///
/// let mut array = GrowableArray::new();
/// array.push("10");
/// array.push("20");
/// array.insert(0, "50").unwrap();
///
/// assert_eq!(array.as_slice(), &["50", "10", "20"]);
/// assert_eq!(array.capacity(), 8);
/// ```
pub struct GrowableArray<T> {
    buf: RawBuffer<T>,
    len: usize,
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(GrowableArray<u64>, [usize; 3]);

impl<T> GrowableArray<T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] reserved. Does not allocate.
    pub const fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty array reserving `capacity` slots, or
    /// [`DEFAULT_CAPACITY`] when `capacity` is zero. Does not allocate.
    pub const fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        Self {
            buf: RawBuffer::new(capacity),
            len: 0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Appends `value` and returns its index.
    ///
    /// ```
    /// use growable_core::GrowableArray;
    ///
    /// let mut array = GrowableArray::new();
    /// assert_eq!(array.push('a'), 0);
    /// assert_eq!(array.push('b'), 1);
    /// ```
    pub fn push(&mut self, value: T) -> usize {
        self.reserve_one();
        let index = self.len;
        // SAFETY: reserve_one guarantees an allocated, uninitialized slot at `len`.
        unsafe { ptr::write(self.buf.as_mut_ptr().add(index), value) };
        self.len += 1;
        index
    }

    /// Inserts `value` at `index`, shifting every element after it one slot
    /// toward the end. `index == len()` appends.
    ///
    /// Fails with [`ArrayError::IndexOutOfRange`] when `index > len()`; the array
    /// is left untouched in that case.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, ArrayError> {
        if index > self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.reserve_one();
        // SAFETY: there is room for `len + 1` elements. The tail `[index, len)` is
        // moved bitwise one slot up, leaving `index` logically uninitialized.
        unsafe {
            let slot = self.buf.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            ptr::write(slot, value);
        }
        self.len += 1;
        Ok(index)
    }

    /// Removes and returns the element at `index`, shifting every element after
    /// it one slot toward the start.
    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::EmptyContainer);
        }
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        // SAFETY: `index` is live. After the read its slot is logically
        // uninitialized and is overwritten by the shifted tail.
        let value = unsafe {
            let slot = self.buf.as_mut_ptr().add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            value
        };
        self.len -= 1;
        Ok(value)
    }

    /// Drops every live element. The allocation and capacity are kept.
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // Zero the length first so a panicking destructor cannot cause a double drop.
        self.len = 0;
        // SAFETY: the slice covered exactly the live elements, none of which are
        // reachable through `self` anymore.
        unsafe { ptr::drop_in_place(live) };
    }

    /// Returns the element at `index` without checking bounds.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len()`](Self::len). Anything else reads
    /// uninitialized or unallocated memory.
    #[inline(always)]
    pub unsafe fn at(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index out of bounds");
        unsafe { &*self.buf.as_ptr().add(index) }
    }

    /// Mutable counterpart of [`at`](Self::at).
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len()`](Self::len).
    #[inline(always)]
    pub unsafe fn at_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index out of bounds");
        unsafe { &mut *self.buf.as_mut_ptr().add(index) }
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is live. An unallocated buffer yields a dangling,
        // aligned pointer, which is valid for `len == 0`.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Moves the contents out, leaving `self` empty with zero capacity and no
    /// allocation. The returned array owns the original buffer.
    ///
    /// ```
    /// use growable_core::GrowableArray;
    ///
    /// let mut source: GrowableArray<i32> = [1, 2, 3].into_iter().collect();
    /// let moved = source.take();
    ///
    /// assert_eq!(moved.as_slice(), &[1, 2, 3]);
    /// assert_eq!(source.len(), 0);
    /// assert_eq!(source.capacity(), 0);
    /// ```
    pub fn take(&mut self) -> Self {
        tracing::debug!(len = self.len, capacity = self.capacity(), "transferring buffer");
        mem::replace(
            self,
            Self {
                buf: RawBuffer::new(0),
                len: 0,
            },
        )
    }

    /// A read-only cursor from the first element toward the last.
    pub fn cursor(&self) -> Cursor<'_, T, Forward> {
        Cursor::new(self)
    }

    /// A read-only cursor from the last element toward the first.
    pub fn reverse_cursor(&self) -> Cursor<'_, T, Reverse> {
        Cursor::new(self)
    }

    /// A cursor from the first element that can overwrite elements in place.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T, Forward> {
        CursorMut::new(self)
    }

    /// A cursor from the last element that can overwrite elements in place.
    pub fn reverse_cursor_mut(&mut self) -> CursorMut<'_, T, Reverse> {
        CursorMut::new(self)
    }

    /// Makes sure the slot at `len` is allocated.
    #[inline]
    fn reserve_one(&mut self) {
        if self.len == self.buf.capacity() {
            self.buf.grow(self.len);
        } else {
            self.buf.materialize();
        }
    }
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` is live and dropped exactly once here; the buffer
        // itself is freed by `RawBuffer::drop` afterwards.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    /// Deep copy with the same length and capacity as `self`.
    fn clone(&self) -> Self {
        // Built directly so a zero capacity (after `take`) is kept as is.
        let mut copy = Self {
            buf: RawBuffer::new(self.capacity()),
            len: 0,
        };
        if self.len == 0 {
            return copy;
        }
        copy.buf.materialize();
        for value in self.as_slice() {
            // SAFETY: the copy has the same capacity as `self`, so every index
            // below `self.len` is allocated. `len` is bumped per element so a
            // panicking `clone` drops only what was written.
            unsafe { ptr::write(copy.buf.as_mut_ptr().add(copy.len), value.clone()) };
            copy.len += 1;
        }
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
