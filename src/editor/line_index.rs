//! Line/offset mapping for newline-delimited text
//!
//! Lines are derived, never stored: a `LineIndex` only records the character
//! offset at which each line starts. Lookups from an offset to its line use a
//! binary search over that table.

use crate::string_utils::char_len;

/// Start-offset table for the lines of a text, in character units.
///
/// A text with `n` newline characters has `n + 1` lines; the empty text has a
/// single empty line. Line `i` covers `line_start(i)..line_end(i)`, and the
/// newline that terminates it (if any) sits at offset `line_end(i)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    /// Build the index for `text`.
    pub fn new(text: &str) -> Self {
        let mut starts = vec![0];
        let mut len = 0;
        for ch in text.chars() {
            len += 1;
            if ch == '\n' {
                starts.push(len);
            }
        }
        debug_assert_eq!(len, char_len(text));
        Self { starts, len }
    }

    /// Length of the indexed text in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the indexed text is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of lines (always at least 1).
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Offset of the first character of `line`.
    ///
    /// # Panics
    /// Panics if `line >= self.line_count()`.
    pub fn line_start(&self, line: usize) -> usize {
        self.starts[line]
    }

    /// Offset just past the last character of `line`, excluding its newline.
    pub fn line_end(&self, line: usize) -> usize {
        match self.starts.get(line + 1) {
            Some(&next) => next - 1,
            None => self.len,
        }
    }

    /// Index of the line containing `offset`.
    ///
    /// An offset equal to a line's start belongs to that line, and an offset
    /// pointing at a newline belongs to the line the newline terminates.
    /// Offsets past the end map to the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        // `starts[0] == 0`, so the partition point is always at least 1.
        self.starts.partition_point(|&start| start <= offset) - 1
    }

    /// Convert an offset to a 0-indexed `(line, column)` pair.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self.line_of(offset);
        (line, offset - self.starts[line])
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_one_line() {
        let index = LineIndex::new("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.len(), 0);
        assert!(index.is_empty());
        assert_eq!(index.line_start(0), 0);
        assert_eq!(index.line_end(0), 0);
        assert_eq!(index.line_of(0), 0);
    }

    #[test]
    fn test_line_starts_and_ends() {
        let index = LineIndex::new("* first\n* second\n\n* last");
        assert_eq!(index.line_count(), 4);
        assert_eq!(index.line_start(0), 0);
        assert_eq!(index.line_end(0), 7);
        assert_eq!(index.line_start(1), 8);
        assert_eq!(index.line_end(1), 16);
        assert_eq!(index.line_start(2), 17);
        assert_eq!(index.line_end(2), 17); // empty line
        assert_eq!(index.line_start(3), 18);
        assert_eq!(index.line_end(3), 24);
        assert_eq!(index.len(), 24);
    }

    #[test]
    fn test_line_of_boundaries() {
        let index = LineIndex::new("ab\ncd\nef");
        assert_eq!(index.line_of(0), 0);
        assert_eq!(index.line_of(2), 0); // the '\n' ending line 0
        assert_eq!(index.line_of(3), 1); // caret at line start belongs to that line
        assert_eq!(index.line_of(5), 1);
        assert_eq!(index.line_of(6), 2);
        assert_eq!(index.line_of(8), 2); // end of text
    }

    #[test]
    fn test_line_of_past_end_maps_to_last_line() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.line_of(100), 1);
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let index = LineIndex::new("ab\n");
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_start(1), 3);
        assert_eq!(index.line_end(1), 3);
        assert_eq!(index.line_of(3), 1);
    }

    #[test]
    fn test_offsets_count_characters_not_bytes() {
        let index = LineIndex::new("på\n中文");
        assert_eq!(index.len(), 5);
        assert_eq!(index.line_start(1), 3);
        assert_eq!(index.line_col(4), (1, 1));
    }

    #[test]
    fn test_line_col() {
        let index = LineIndex::new("Hello\nWorld\n!");
        assert_eq!(index.line_col(0), (0, 0));
        assert_eq!(index.line_col(5), (0, 5));
        assert_eq!(index.line_col(6), (1, 0));
        assert_eq!(index.line_col(11), (1, 5));
        assert_eq!(index.line_col(12), (2, 0));
    }
}
