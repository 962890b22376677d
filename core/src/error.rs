use thiserror::Error;

/// Errors returned by checked [`GrowableArray`](crate::GrowableArray) and cursor operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// Removal was attempted on an array with no live elements.
    #[error("array is empty")]
    EmptyContainer,

    /// A cursor was advanced (or written through) past its traversal bound.
    #[error("iterator out of range")]
    IteratorExhausted,

    /// A checked insertion or removal named an index outside the live range.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
