use thiserror::Error;

/// Errors returned by the checked editing operations of
/// [`TextBuffer`](crate::TextBuffer).
///
/// The unchecked counterparts (`insert_char`, `erase`, ...) panic with the
/// same message instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    /// An insertion point past the end of the buffer.
    #[error("insert index {index} out of bounds for length {len}")]
    InsertOutOfBounds {
        /// Requested insertion point.
        index: usize,
        /// Length of the buffer at the time of the call.
        len: usize,
    },
    /// A removal range that does not lie inside the buffer.
    #[error("erase range {index}..{index}+{count} out of bounds for length {len}")]
    EraseOutOfBounds {
        /// First index to remove.
        index: usize,
        /// Number of elements to remove.
        count: usize,
        /// Length of the buffer at the time of the call.
        len: usize,
    },
}
