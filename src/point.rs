//! The editing point: a caret offset with its cached line.

/// The single caret position at which point-relative edits apply.
///
/// The offset counts characters from the buffer start; the point sits
/// immediately before the character at that index, so it ranges over
/// `0..=len`. The line is a cached copy of `line_at(offset)` kept current by
/// every mutating buffer operation, giving O(1) caret-position reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    offset: usize,
    line: usize,
}

impl Point {
    /// Character offset of the caret.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Line containing the caret.
    pub const fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn set(&mut self, offset: usize, line: usize) {
        self.offset = offset;
        self.line = line;
    }
}
