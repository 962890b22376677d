//! The facade crate exposes the whole public API of `growable_core`.

use growable::{ArrayError, Cursor, CursorMut, DEFAULT_CAPACITY, Forward, GrowableArray, Reverse};
use pretty_assertions::assert_eq;

#[test]
fn reexports_are_usable() {
    let mut array: GrowableArray<&str> = GrowableArray::with_capacity(DEFAULT_CAPACITY);
    array.extend(["a", "b"]);

    let forward: Cursor<'_, &str, Forward> = array.cursor();
    assert_eq!(forward.copied().collect::<Vec<_>>(), ["a", "b"]);

    let reverse: Cursor<'_, &str, Reverse> = array.reverse_cursor();
    assert_eq!(reverse.copied().collect::<Vec<_>>(), ["b", "a"]);

    let mut writer: CursorMut<'_, &str, Forward> = array.cursor_mut();
    assert_eq!(writer.set("z"), Ok("a"));
    assert_eq!(array.as_slice(), ["z", "b"]);
}

#[test]
fn errors_display() {
    let mut array = GrowableArray::<u8>::new();
    let error = array.remove(0).unwrap_err();
    assert_eq!(error, ArrayError::EmptyContainer);
    assert_eq!(error.to_string(), "array is empty");
}
