//! Growable - a hand-managed growable array with directional cursors
//!
//! # Overview
//!
//! [`GrowableArray`] is a contiguous sequence that owns its buffer directly:
//! the first `len()` slots hold live elements and the rest, up to
//! `capacity()`, are allocated but uninitialized. It supports positional
//! insertion and removal, unchecked indexed access, and traversal through
//! cursors that are typed by direction ([`Forward`], [`Reverse`]) and by
//! mutability ([`Cursor`], [`CursorMut`]).
//!
//! # Quick Start
//!
//! ```
//! use growable::{ArrayError, GrowableArray};
//!
//! let mut array = GrowableArray::new();
//! array.push("10".to_string());
//! array.push("20".to_string());
//! array.insert(0, "50".to_string())?;
//!
//! let line: Vec<&str> = array.cursor().map(String::as_str).collect();
//! assert_eq!(line, ["50", "10", "20"]);
//!
//! assert_eq!(array.remove(7), Err(ArrayError::IndexOutOfRange { index: 7, len: 3 }));
//! # Ok::<(), ArrayError>(())
//! ```
//!
//! # Capacity
//!
//! Arrays start with a nominal capacity of [`DEFAULT_CAPACITY`] (or the
//! requested one) and allocate it on the first insertion. A full array
//! doubles its capacity before inserting:
//!
//! ```
//! use growable::GrowableArray;
//!
//! let mut array = GrowableArray::new();
//! assert_eq!(array.capacity(), 8);
//! for i in 0..9 {
//!     array.push(i);
//! }
//! assert_eq!(array.capacity(), 16);
//! ```
//!
//! # Copy and Transfer
//!
//! `clone()` produces an independent deep copy with the same capacity.
//! [`GrowableArray::take`] transfers the buffer and leaves the source empty
//! with zero capacity; it remains usable.
//!
//! ```
//! use growable::GrowableArray;
//!
//! let mut source: GrowableArray<i32> = (1..=3).collect();
//! let copy = source.clone();
//! let moved = source.take();
//!
//! assert_eq!(copy, moved);
//! assert!(source.is_empty());
//! assert_eq!(source.capacity(), 0);
//! ```

// Re-export public API from growable_core
pub use growable_core::{
    ArrayError, Cursor, CursorMut, DEFAULT_CAPACITY, Direction, Forward, GrowableArray, Reverse,
};
