//! Directional cursors over a [`GrowableArray`].
//!
//! A cursor borrows the array it walks, so the array cannot be resized or
//! dropped while the cursor is alive. Direction is a type parameter
//! ([`Forward`] or [`Reverse`]); mutability is a separate type ([`Cursor`] vs
//! [`CursorMut`]), so writing through a read-only cursor does not compile.
//!
//! ```
//! use growable_core::GrowableArray;
//!
//! let mut array: GrowableArray<i32> = (1..=3).collect();
//!
//! let mut cursor = array.reverse_cursor_mut();
//! while cursor.has_next() {
//!     let doubled = cursor.current().unwrap() * 2;
//!     cursor.set(doubled).unwrap();
//!     cursor.advance().unwrap();
//! }
//! assert!(cursor.advance().is_err());
//!
//! assert_eq!(array.cursor().collect::<Vec<_>>(), [&2, &4, &6]);
//! ```

use core::{iter::FusedIterator, marker::PhantomData, mem};

use crate::{ArrayError, GrowableArray};

mod private {
    pub trait Sealed {}
}

/// Traversal direction of a cursor. Sealed: only [`Forward`] and [`Reverse`] exist.
pub trait Direction: private::Sealed {
    /// Maps the number of steps taken to an index into `[0, len)`.
    #[doc(hidden)]
    fn index(step: usize, len: usize) -> usize;
}

/// Visits indices `0, 1, .., len - 1`.
pub enum Forward {}

/// Visits indices `len - 1, .., 1, 0`.
pub enum Reverse {}

impl private::Sealed for Forward {}
impl private::Sealed for Reverse {}

impl Direction for Forward {
    #[inline(always)]
    fn index(step: usize, _len: usize) -> usize {
        step
    }
}

impl Direction for Reverse {
    #[inline(always)]
    fn index(step: usize, len: usize) -> usize {
        len - 1 - step
    }
}

/// Array index reached after `step` steps, or `None` once past the bound.
#[inline]
fn locate<D: Direction>(step: usize, len: usize) -> Option<usize> {
    (step < len).then(|| D::index(step, len))
}

/// Takes one step, refusing to move past the bound.
#[inline]
fn step_once(step: &mut usize, len: usize) -> Result<(), ArrayError> {
    if *step >= len {
        return Err(ArrayError::IteratorExhausted);
    }
    *step += 1;
    Ok(())
}

/// Read-only cursor. Also usable as an [`Iterator`] over `&T`.
pub struct Cursor<'a, T, D: Direction = Forward> {
    array: &'a GrowableArray<T>,
    step: usize,
    _direction: PhantomData<D>,
}

/// Cursor that can replace the element under it.
pub struct CursorMut<'a, T, D: Direction = Forward> {
    array: &'a mut GrowableArray<T>,
    step: usize,
    _direction: PhantomData<D>,
}

static_assertions::assert_eq_size!(Cursor<'static, u64>, [usize; 2]);
static_assertions::assert_eq_size!(CursorMut<'static, u64, Reverse>, [usize; 2]);

impl<'a, T, D: Direction> Cursor<'a, T, D> {
    pub(crate) fn new(array: &'a GrowableArray<T>) -> Self {
        Self {
            array,
            step: 0,
            _direction: PhantomData,
        }
    }

    /// True while the cursor points at a live element.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.step < self.array.len()
    }

    /// Array index under the cursor, if any.
    pub fn position(&self) -> Option<usize> {
        locate::<D>(self.step, self.array.len())
    }

    /// Element under the cursor, or `None` once the traversal is finished.
    pub fn current(&self) -> Option<&'a T> {
        let array: &'a GrowableArray<T> = self.array;
        array.as_slice().get(self.position()?)
    }

    /// Moves one element along the cursor's direction.
    pub fn advance(&mut self) -> Result<(), ArrayError> {
        step_once(&mut self.step, self.array.len())
    }
}

impl<'a, T, D: Direction> Iterator for Cursor<'a, T, D> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current()?;
        self.step += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len() - self.step;
        (remaining, Some(remaining))
    }
}

impl<T, D: Direction> ExactSizeIterator for Cursor<'_, T, D> {}
impl<T, D: Direction> FusedIterator for Cursor<'_, T, D> {}

impl<'a, T, D: Direction> CursorMut<'a, T, D> {
    pub(crate) fn new(array: &'a mut GrowableArray<T>) -> Self {
        Self {
            array,
            step: 0,
            _direction: PhantomData,
        }
    }

    /// True while the cursor points at a live element.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.step < self.array.len()
    }

    /// Array index under the cursor, if any.
    pub fn position(&self) -> Option<usize> {
        locate::<D>(self.step, self.array.len())
    }

    /// Element under the cursor, or `None` once the traversal is finished.
    pub fn current(&self) -> Option<&T> {
        self.array.as_slice().get(self.position()?)
    }

    /// In-place access to the element under the cursor.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        let index = self.position()?;
        self.array.as_mut_slice().get_mut(index)
    }

    /// Replaces the element under the cursor and returns the old one.
    pub fn set(&mut self, value: T) -> Result<T, ArrayError> {
        let slot = self.current_mut().ok_or(ArrayError::IteratorExhausted)?;
        Ok(mem::replace(slot, value))
    }

    /// Moves one element along the cursor's direction.
    pub fn advance(&mut self) -> Result<(), ArrayError> {
        step_once(&mut self.step, self.array.len())
    }
}
