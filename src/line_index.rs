//! Line-start index derived from buffer content.
//!
//! Holds the character offset of the first character of every line, in
//! strictly increasing order. Entry 0 is always 0, so the index is never
//! empty and line count equals entry count. The buffer keeps the index in
//! lockstep with its content by reporting every splice through
//! [`LineIndex::record_insert`] and [`LineIndex::record_delete`].

use crate::LINE_ENDING;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn new() -> Self {
        Self { starts: vec![0] }
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Offset of the first character of `line`. Panics if `line` is not a
    /// valid line number; an invalid line reaching this far is an internal
    /// inconsistency, not a recoverable condition.
    pub fn start_of(&self, line: usize) -> usize {
        self.starts[line]
    }

    /// Line containing `offset`. Binary search over the sorted starts; the
    /// caller guarantees `offset <= content length`.
    pub fn line_at(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset) - 1
    }

    /// Record a run of `inserted` characters spliced in at `offset`.
    ///
    /// Starts past the splice shift right by the run length. Each line ending
    /// in the run opens a new line starting one past it, in final (post-
    /// insert) coordinates, so the new entries land between the unshifted and
    /// shifted halves already in sorted order.
    pub fn record_insert(&mut self, offset: usize, inserted: &[char]) {
        let split = self.starts.partition_point(|&start| start <= offset);
        for start in &mut self.starts[split..] {
            *start += inserted.len();
        }
        let opened = inserted
            .iter()
            .enumerate()
            .filter(|&(_, &ch)| ch == LINE_ENDING)
            .map(|(i, _)| offset + i + 1);
        self.starts.splice(split..split, opened);
        self.check();
    }

    /// Record the removal of the character range `[start, end)`.
    ///
    /// A line ending at position `p` introduced the entry `p + 1`, so the
    /// entries owned by deleted line endings are exactly those in
    /// `(start, end]`. They are dropped, and every surviving entry past the
    /// range shifts left by the range length.
    pub fn record_delete(&mut self, start: usize, end: usize) {
        let lo = self.starts.partition_point(|&s| s <= start);
        let hi = self.starts.partition_point(|&s| s <= end);
        self.starts.drain(lo..hi);
        for s in &mut self.starts[lo..] {
            *s -= end - start;
        }
        self.check();
    }

    #[cfg(test)]
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    fn check(&self) {
        debug_assert_eq!(self.starts.first(), Some(&0));
        debug_assert!(self.starts.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(starts: &[usize]) -> LineIndex {
        LineIndex {
            starts: starts.to_vec(),
        }
    }

    #[test]
    fn test_new_index_has_one_line() {
        let index = LineIndex::new();
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.starts(), &[0]);
    }

    #[test]
    fn test_line_at_boundaries() {
        // content shaped like "ab\ncd\ne"
        let index = index_of(&[0, 3, 6]);
        assert_eq!(index.line_at(0), 0);
        assert_eq!(index.line_at(2), 0); // the line ending itself
        assert_eq!(index.line_at(3), 1); // first char of line 1
        assert_eq!(index.line_at(5), 1);
        assert_eq!(index.line_at(6), 2);
        assert_eq!(index.line_at(7), 2); // one past the last char
    }

    #[test]
    fn test_insert_without_line_endings_shifts_later_starts() {
        let mut index = index_of(&[0, 3]);
        index.record_insert(1, &['x', 'y']);
        assert_eq!(index.starts(), &[0, 5]);
    }

    #[test]
    fn test_insert_at_line_start_does_not_shift_that_line() {
        // inserting at an existing line start puts the run on that line
        let mut index = index_of(&[0, 2]);
        index.record_insert(2, &['x']);
        assert_eq!(index.starts(), &[0, 2]);
    }

    #[test]
    fn test_insert_line_ending_opens_line_after_it() {
        let mut index = index_of(&[0]);
        index.record_insert(1, &[LINE_ENDING]);
        assert_eq!(index.starts(), &[0, 2]);
    }

    #[test]
    fn test_insert_run_with_multiple_line_endings() {
        // "x\ny\nz" spliced into an empty line
        let mut index = LineIndex::new();
        index.record_insert(0, &['x', LINE_ENDING, 'y', LINE_ENDING, 'z']);
        assert_eq!(index.starts(), &[0, 2, 4]);
    }

    #[test]
    fn test_insert_multi_line_run_mid_buffer() {
        // "a\nb" + "\nx" at offset 2 -> "a\n\nxb"
        let mut index = index_of(&[0, 2]);
        index.record_insert(2, &[LINE_ENDING, 'x']);
        assert_eq!(index.starts(), &[0, 2, 3]);
    }

    #[test]
    fn test_delete_plain_range_shifts_later_starts() {
        let mut index = index_of(&[0, 4]);
        index.record_delete(1, 3);
        assert_eq!(index.starts(), &[0, 2]);
    }

    #[test]
    fn test_delete_range_covering_line_ending_drops_its_entry() {
        // "abc\ndef": deleting [3, 5) removes the line ending at 3
        let mut index = index_of(&[0, 4]);
        index.record_delete(3, 5);
        assert_eq!(index.starts(), &[0]);
    }

    #[test]
    fn test_delete_range_covering_several_line_endings() {
        // "line1\nline2\nline3": deleting [5, 17)
        let mut index = index_of(&[0, 6, 12]);
        index.record_delete(5, 17);
        assert_eq!(index.starts(), &[0]);
    }

    #[test]
    fn test_delete_just_before_a_surviving_line_start() {
        // "ab\ncd": deleting [0, 2) keeps the line ending, shifts its entry
        let mut index = index_of(&[0, 3]);
        index.record_delete(0, 2);
        assert_eq!(index.starts(), &[0, 1]);
    }
}
