//! The text buffer: character storage, line index, and point.

use tracing::{debug, trace};

use crate::error::BufferError;
use crate::line_index::LineIndex;
use crate::point::Point;
use crate::LINE_ENDING;

/// Backing-store capacity of the first allocation; doubled whenever a splice
/// would overflow the current allocation.
const INITIAL_CAPACITY: usize = 64;

/// Position reported by a successful mutation: the offset immediately past
/// the edit and the line containing that offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
    pub offset: usize,
    pub line: usize,
}

/// A growable character sequence with a derived line-start index and a single
/// editing point.
///
/// Content is addressed by character offset, not byte offset; line endings
/// are ordinary content characters. Offsets and counts outside the valid
/// range are reported as [`BufferError`] with the buffer left untouched,
/// never as a partial edit. The buffer assumes exclusive access from one
/// caller; it provides no internal locking.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    chars: Vec<char>,
    lines: LineIndex,
    point: Point,
    /// UTF-8 encoded size of the content, maintained across edits.
    bytes: usize,
}

impl TextBuffer {
    /// An empty buffer: length 0, one empty line, point at offset 0.
    pub fn new() -> Self {
        Self {
            chars: Vec::new(),
            lines: LineIndex::new(),
            point: Point::default(),
            bytes: 0,
        }
    }

    // ------------------------------------------------------------------
    // Point
    // ------------------------------------------------------------------

    /// Current caret position.
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Move the caret to `offset`. Fails without touching any state when
    /// `offset` lies past the end of the buffer.
    pub fn set_point(&mut self, offset: usize) -> Result<(), BufferError> {
        if offset > self.chars.len() {
            return Err(BufferError::OffsetOutOfRange {
                offset,
                len: self.chars.len(),
            });
        }
        self.point.set(offset, self.lines.line_at(offset));
        Ok(())
    }

    /// Move the caret by a signed distance. Same contract as [`set_point`]:
    /// the move either lands in `0..=len` or nothing changes.
    ///
    /// [`set_point`]: TextBuffer::set_point
    pub fn move_point(&mut self, delta: isize) -> Result<(), BufferError> {
        let target = self.point.offset() as isize + delta;
        if target < 0 {
            return Err(BufferError::PointUnderflow {
                point: self.point.offset(),
                delta,
            });
        }
        self.set_point(target as usize)
    }

    /// Line containing `offset`, by binary search over the line-start index.
    ///
    /// Defined for `offset <= len()`; anything past that is a caller bug and
    /// panics rather than returning a wrong line.
    pub fn line_at(&self, offset: usize) -> usize {
        assert!(
            offset <= self.chars.len(),
            "offset {offset} out of range (buffer length {})",
            self.chars.len()
        );
        self.lines.line_at(offset)
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Splice `text` into the buffer at `offset`, leaving the point's offset
    /// where it was (batch callers avoid point churn this way; the point's
    /// cached line is still refreshed).
    ///
    /// Returns the position just past the inserted run. Fails without
    /// mutation when `offset > len()`.
    pub fn insert(&mut self, offset: usize, text: &str) -> Result<Edit, BufferError> {
        if offset > self.chars.len() {
            return Err(BufferError::OffsetOutOfRange {
                offset,
                len: self.chars.len(),
            });
        }
        let run: Vec<char> = text.chars().collect();
        if !run.is_empty() {
            self.grow_to_fit(run.len());
            self.chars.splice(offset..offset, run.iter().copied());
            self.lines.record_insert(offset, &run);
            self.bytes += text.len();
            self.sync_point();
            trace!(target: "buffer", offset, chars = run.len(), "insert");
        }
        let end = offset + run.len();
        Ok(Edit {
            offset: end,
            line: self.lines.line_at(end),
        })
    }

    /// Insert `text` at the caret and move the caret past it.
    pub fn insert_at_point(&mut self, text: &str) -> Result<Edit, BufferError> {
        let edit = self.insert(self.point.offset(), text)?;
        self.point.set(edit.offset, edit.line);
        Ok(edit)
    }

    /// Insert a single [`LINE_ENDING`] at the caret, opening a new line.
    pub fn insert_line_break_at_point(&mut self) -> Result<Edit, BufferError> {
        let mut encoded = [0u8; 4];
        self.insert_at_point(LINE_ENDING.encode_utf8(&mut encoded))
    }

    /// Remove the `count` characters immediately before `offset`, the
    /// half-open range `[offset - count, offset)`. The point's offset is left
    /// where it was, clamped to the new length.
    ///
    /// Returns the position the range occupied (`offset - count`). Fails
    /// without mutation when `offset > len()`, when `count` is zero, or when
    /// the range would reach before offset 0.
    pub fn delete(&mut self, offset: usize, count: usize) -> Result<Edit, BufferError> {
        if offset > self.chars.len() {
            return Err(BufferError::OffsetOutOfRange {
                offset,
                len: self.chars.len(),
            });
        }
        if count == 0 {
            return Err(BufferError::ZeroDelete);
        }
        if count > offset {
            return Err(BufferError::DeleteRangeUnderflow { offset, count });
        }
        let start = offset - count;
        let removed: usize = self.chars[start..offset].iter().map(|ch| ch.len_utf8()).sum();
        self.chars.drain(start..offset);
        self.lines.record_delete(start, offset);
        self.bytes -= removed;
        self.sync_point();
        trace!(target: "buffer", start, count, "delete");
        Ok(Edit {
            offset: start,
            line: self.lines.line_at(start),
        })
    }

    /// Remove the `count` characters before the caret (backspace is
    /// `delete_before_point(1)`) and move the caret to the start of the
    /// removed range.
    pub fn delete_before_point(&mut self, count: usize) -> Result<Edit, BufferError> {
        let edit = self.delete(self.point.offset(), count)?;
        self.point.set(edit.offset, edit.line);
        Ok(edit)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Allocated capacity of the backing store, in characters. Never shrinks.
    pub fn capacity(&self) -> usize {
        self.chars.capacity()
    }

    /// UTF-8 encoded size of the content in bytes. Differs from [`len`] when
    /// the content holds multi-byte characters.
    ///
    /// [`len`]: TextBuffer::len
    pub fn len_bytes(&self) -> usize {
        self.bytes
    }

    /// Number of lines; always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    /// Length of `line` in characters, including its trailing line ending if
    /// it has one. Panics when `line >= line_count()`: an invalid line
    /// number reaching this far is an internal inconsistency, not a
    /// recoverable condition.
    pub fn line_length(&self, line: usize) -> usize {
        assert!(
            line < self.lines.line_count(),
            "line {line} out of range ({} lines)",
            self.lines.line_count()
        );
        let start = self.lines.start_of(line);
        if line + 1 < self.lines.line_count() {
            self.lines.start_of(line + 1) - start
        } else {
            self.chars.len() - start
        }
    }

    /// Materialize the whole content as a `String`.
    pub fn content(&self) -> String {
        self.chars.iter().collect()
    }

    /// Lazy iterator over the content, for read-only consumers such as a
    /// renderer. Restartable: call again for a fresh pass.
    pub fn chars(&self) -> Chars<'_> {
        Chars {
            inner: self.chars.iter(),
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Keep the point inside `0..=len` and its cached line equal to
    /// `line_at(point)` after a splice moved content around it.
    fn sync_point(&mut self) {
        let offset = self.point.offset().min(self.chars.len());
        self.point.set(offset, self.lines.line_at(offset));
    }

    /// Ensure capacity for `additional` more characters, doubling from
    /// [`INITIAL_CAPACITY`] until the splice fits. Amortized O(1) growth over
    /// a run of insertions; deletions never give capacity back.
    fn grow_to_fit(&mut self, additional: usize) {
        let needed = self.chars.len() + additional;
        if needed <= self.chars.capacity() {
            return;
        }
        let mut target = self.chars.capacity().max(INITIAL_CAPACITY);
        while target < needed {
            target *= 2;
        }
        self.chars.reserve_exact(target - self.chars.len());
        debug!(target: "buffer", capacity = self.chars.capacity(), "grew backing store");
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`TextBuffer::chars`].
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    inner: std::slice::Iter<'a, char>,
}

impl Iterator for Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Chars<'_> {}

impl DoubleEndedIterator for Chars<'_> {
    fn next_back(&mut self) -> Option<char> {
        self.inner.next_back().copied()
    }
}
