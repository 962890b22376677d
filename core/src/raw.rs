//! Uninitialized heap storage backing a [`GrowableArray`](crate::GrowableArray).
//!
//! `RawBuffer` only knows about slots, never about which of them are live. The
//! owning array is responsible for constructing and dropping elements; the
//! buffer allocates, grows and frees the memory underneath them.

use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use core::{
    marker::PhantomData,
    ptr::{self, NonNull},
};

use crate::DEFAULT_CAPACITY;

const GROWTH_FACTOR: usize = 2;

pub(crate) struct RawBuffer<T> {
    // None until the first insertion materializes the nominal capacity.
    ptr: Option<NonNull<T>>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// A buffer that reserves `cap` slots but does not allocate them yet.
    pub(crate) const fn new(cap: usize) -> Self {
        Self {
            ptr: None,
            cap,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub(crate) fn is_allocated(&self) -> bool {
        self.ptr.is_some()
    }

    /// Base pointer of the slots. Dangling (but aligned) while unallocated, which
    /// is still valid for zero-length slices.
    #[inline(always)]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.unwrap_or(NonNull::dangling()).as_ptr()
    }

    #[inline(always)]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.unwrap_or(NonNull::dangling()).as_ptr()
    }

    /// Allocates the nominal capacity if nothing has been allocated yet.
    #[inline]
    pub(crate) fn materialize(&mut self) {
        if !self.is_allocated() {
            tracing::trace!(capacity = self.cap, "materializing buffer");
            self.ptr = Some(Self::allocate(self.cap));
        }
    }

    /// Doubles the capacity and moves the first `len` slots into the new
    /// allocation. A zero capacity grows to [`DEFAULT_CAPACITY`].
    #[cold]
    pub(crate) fn grow(&mut self, len: usize) {
        debug_assert!(len <= self.cap);
        let new_cap = if self.cap == 0 {
            DEFAULT_CAPACITY
        } else {
            self.cap.checked_mul(GROWTH_FACTOR).expect("capacity overflow")
        };
        tracing::trace!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            "growing buffer"
        );

        let new_ptr = Self::allocate(new_cap);
        if let Some(old_ptr) = self.ptr {
            // SAFETY: both allocations hold at least `len` slots and are distinct.
            // The old slots are moved bitwise; they are freed without being dropped.
            unsafe {
                ptr::copy_nonoverlapping(old_ptr.as_ptr(), new_ptr.as_ptr(), len);
                Self::deallocate(old_ptr, self.cap);
            }
        }
        self.ptr = Some(new_ptr);
        self.cap = new_cap;
    }

    fn allocate(cap: usize) -> NonNull<T> {
        let layout = Self::layout(cap);
        if layout.size() == 0 {
            // Zero-sized element types and zero capacities never touch the allocator.
            return NonNull::dangling();
        }
        // SAFETY: layout has a non-zero size.
        let ptr = unsafe { alloc(layout) }.cast::<T>();
        NonNull::new(ptr).unwrap_or_else(|| handle_alloc_error(layout))
    }

    /// # Safety
    ///
    /// `ptr` must come from `allocate(cap)` and must not be used afterwards.
    unsafe fn deallocate(ptr: NonNull<T>, cap: usize) {
        let layout = Self::layout(cap);
        if layout.size() != 0 {
            unsafe { dealloc(ptr.as_ptr().cast(), layout) }
        }
    }

    fn layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).expect("capacity overflow")
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            // SAFETY: ptr was allocated with the current capacity. The owner has
            // already dropped every live element.
            unsafe { Self::deallocate(ptr, self.cap) }
        }
    }
}

// The buffer owns its `T`s the same way `Vec<T>` does.
unsafe impl<T: Send> Send for RawBuffer<T> {}
unsafe impl<T: Sync> Sync for RawBuffer<T> {}
