#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Growable Core - a contiguous, growable array with directional cursors.
//!
//! [`GrowableArray`] manages its own buffer: the first `len` slots are live
//! elements, the rest up to `capacity` are allocated but uninitialized.
//! Capacity is reserved lazily and doubles whenever an insertion finds the
//! buffer full.
//!
//! ```
//! use growable_core::{ArrayError, GrowableArray};
//!
//! let mut array = GrowableArray::new();
//! for value in ["10", "20", "30", "40"] {
//!     array.push(value);
//! }
//! array.insert(0, "50")?;
//!
//! let mut cursor = array.cursor();
//! let mut seen = Vec::new();
//! while cursor.has_next() {
//!     seen.push(*cursor.current().unwrap());
//!     cursor.advance()?;
//! }
//! assert_eq!(seen, ["50", "10", "20", "30", "40"]);
//! # Ok::<(), ArrayError>(())
//! ```
//!
//! Checked operations ([`GrowableArray::insert`], [`GrowableArray::remove`],
//! [`Cursor::advance`]) report contract violations as [`ArrayError`].
//! [`GrowableArray::at`] is the unchecked fast path and is `unsafe`.

// This works on std and no_std and is harmless.
extern crate alloc;

mod array;
mod cursor;
mod error;
mod raw;

pub use array::{DEFAULT_CAPACITY, GrowableArray};
pub use cursor::{Cursor, CursorMut, Direction, Forward, Reverse};
pub use error::ArrayError;
