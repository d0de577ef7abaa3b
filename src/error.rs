//! Boundary errors for buffer operations.

use thiserror::Error;

/// A caller-supplied offset or count outside the currently valid range.
///
/// These are expected, recoverable conditions: every operation that returns
/// one of these guarantees the buffer (content, length, point, line index) is
/// left exactly as it was before the call. Internal inconsistencies, such as
/// an invalid line number reaching [`crate::TextBuffer::line_length`], are
/// programming errors and panic instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Target offset lies outside `0..=len`.
    #[error("offset {offset} out of range (buffer length {len})")]
    OffsetOutOfRange { offset: usize, len: usize },

    /// A relative point move would land before the start of the buffer.
    #[error("moving the point by {delta} from offset {point} lands before the buffer start")]
    PointUnderflow { point: usize, delta: isize },

    /// Delete called with a count of zero.
    #[error("delete count must be positive")]
    ZeroDelete,

    /// Delete range `[offset - count, offset)` would extend before offset 0.
    #[error("cannot delete {count} chars ending at offset {offset}")]
    DeleteRangeUnderflow { offset: usize, count: usize },
}
