//! Tab/Shift+Tab indentation of the lines touched by a selection
//!
//! Indenting prepends one [`IndentUnit`] of spaces to every touched line;
//! unindenting strips up to one unit of leading spaces from each of them.
//! The selection is carried along so that it keeps covering the same
//! characters it covered before the edit.
//!
//! # Touched lines
//!
//! - A caret touches exactly the line that contains it. A caret sitting on a
//!   line start belongs to that line.
//! - A non-empty selection touches every line intersecting `start..end`. A
//!   selection that ends exactly on a line start does not touch that line.
//!
//! # Example
//! ```ignore
//! use crate::editor::{IndentEngine, Selection};
//!
//! let engine = IndentEngine::default();
//! let result = engine.indent("* first\n* second", Selection::caret(0))?;
//! assert_eq!(result.text, "    * first\n* second");
//! assert_eq!(result.selection, Selection::caret(4));
//! ```

use super::line_index::LineIndex;
use super::selection::{EditResult, Selection};
use crate::error::Result;
use crate::string_utils::leading_spaces;
use log::debug;
use std::ops::RangeInclusive;

/// Indent width used when nothing else is configured.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

// ─────────────────────────────────────────────────────────────────────────────
// Indent Unit
// ─────────────────────────────────────────────────────────────────────────────

/// The run of spaces added or removed per indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentUnit {
    width: usize,
}

impl IndentUnit {
    /// Create a unit of `width` spaces. A width of 0 is raised to 1.
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
        }
    }

    /// Number of spaces in one unit.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The unit as a string of spaces.
    pub fn as_string(&self) -> String {
        " ".repeat(self.width)
    }
}

impl Default for IndentUnit {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_WIDTH)
    }
}

/// Which way to move the touched lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentDirection {
    /// Add one unit (Tab)
    Indent,
    /// Remove up to one unit (Shift+Tab)
    Unindent,
}

impl IndentDirection {
    /// Get a display label for the direction.
    pub fn label(&self) -> &'static str {
        match self {
            IndentDirection::Indent => "indent",
            IndentDirection::Unindent => "unindent",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Line Span
// ─────────────────────────────────────────────────────────────────────────────

/// Indices of the lines touched by `selection`.
///
/// The selection must already be valid for the indexed text.
pub fn touched_lines(index: &LineIndex, selection: Selection) -> RangeInclusive<usize> {
    let first = index.line_of(selection.start);
    if selection.is_caret() {
        return first..=first;
    }
    // `end` is exclusive: the last touched character is at `end - 1`, which
    // lands on the previous line's newline when `end` is a line start.
    let last = index.line_of(selection.end - 1);
    first..=last
}

// ─────────────────────────────────────────────────────────────────────────────
// Indent Engine
// ─────────────────────────────────────────────────────────────────────────────

/// Pure indentation engine: `(text, selection) -> (text, selection)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndentEngine {
    unit: IndentUnit,
}

impl IndentEngine {
    /// Create an engine using the given indent unit.
    pub fn new(unit: IndentUnit) -> Self {
        Self { unit }
    }

    /// The configured indent unit.
    pub fn unit(&self) -> IndentUnit {
        self.unit
    }

    /// Indent or unindent depending on `direction`.
    pub fn apply(
        &self,
        text: &str,
        selection: Selection,
        direction: IndentDirection,
    ) -> Result<EditResult> {
        match direction {
            IndentDirection::Indent => self.indent(text, selection),
            IndentDirection::Unindent => self.unindent(text, selection),
        }
    }

    /// Prepend one indent unit to every touched line.
    ///
    /// An offset on or after a touched line moves right by one unit per
    /// touched line at or before its own line. The empty text is returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSelection` if the selection does not fit `text`.
    pub fn indent(&self, text: &str, selection: Selection) -> Result<EditResult> {
        let index = LineIndex::new(text);
        selection.validate(index.len())?;
        if index.is_empty() {
            return Ok(EditResult::unchanged(text, selection));
        }

        let span = touched_lines(&index, selection);
        let pad = self.unit.as_string();
        let touched = span.end() - span.start() + 1;

        let mut new_text = String::with_capacity(text.len() + pad.len() * touched);
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                new_text.push('\n');
            }
            if span.contains(&i) {
                new_text.push_str(&pad);
            }
            new_text.push_str(line);
        }

        let width = self.unit.width;
        let shift = |offset: usize| {
            let line = index.line_of(offset);
            if line < *span.start() {
                offset
            } else {
                offset + width * (line.min(*span.end()) - span.start() + 1)
            }
        };
        let new_selection = Selection::new(shift(selection.start), shift(selection.end));

        debug!(
            "Indented lines {}..={} by {} spaces",
            span.start(),
            span.end(),
            width
        );
        Ok(EditResult::new(new_text, new_selection))
    }

    /// Remove up to one indent unit of leading spaces from every touched line.
    ///
    /// Lines with fewer leading spaces than a unit lose all of them; lines
    /// without leading spaces are left alone. An offset inside removed
    /// whitespace moves to the start of its line.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSelection` if the selection does not fit `text`.
    pub fn unindent(&self, text: &str, selection: Selection) -> Result<EditResult> {
        let index = LineIndex::new(text);
        selection.validate(index.len())?;
        if index.is_empty() {
            return Ok(EditResult::unchanged(text, selection));
        }

        let span = touched_lines(&index, selection);
        let mut removed = vec![0usize; index.line_count()];

        let mut new_text = String::with_capacity(text.len());
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                new_text.push('\n');
            }
            if span.contains(&i) {
                // Spaces are single-byte, so the count is also a byte index.
                let strip = leading_spaces(line).min(self.unit.width);
                removed[i] = strip;
                new_text.push_str(&line[strip..]);
            } else {
                new_text.push_str(line);
            }
        }

        if removed.iter().all(|&n| n == 0) {
            return Ok(EditResult::unchanged(text, selection));
        }

        let shift = |offset: usize| {
            let (line, column) = index.line_col(offset);
            let before: usize = removed[..line].iter().sum();
            offset - before - column.min(removed[line])
        };
        let new_selection = Selection::new(shift(selection.start), shift(selection.end));

        debug!(
            "Unindented lines {}..={}, removed {} spaces",
            span.start(),
            span.end(),
            removed.iter().sum::<usize>()
        );
        Ok(EditResult::new(new_text, new_selection))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::string_utils::char_len;

    const INIT: &str = "* first\n* second\n* third\n* last";
    const TAB: &str = "    ";

    fn engine() -> IndentEngine {
        IndentEngine::default()
    }

    fn offset_of(text: &str, needle: &str) -> usize {
        let byte = text.find(needle).expect("needle present");
        text[..byte].chars().count()
    }

    fn line_count(text: &str) -> usize {
        text.split('\n').count()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Line span
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_touched_lines_caret() {
        let index = LineIndex::new(INIT);
        assert_eq!(touched_lines(&index, Selection::caret(0)), 0..=0);
        assert_eq!(touched_lines(&index, Selection::caret(7)), 0..=0);
        assert_eq!(touched_lines(&index, Selection::caret(8)), 1..=1);
    }

    #[test]
    fn test_touched_lines_range() {
        let index = LineIndex::new(INIT);
        let sel = Selection::new(offset_of(INIT, "cond"), offset_of(INIT, "hird"));
        assert_eq!(touched_lines(&index, sel), 1..=2);
    }

    #[test]
    fn test_touched_lines_end_on_line_start_excludes_next_line() {
        let index = LineIndex::new(INIT);
        // Whole second line including its newline
        let sel = Selection::new(8, 17);
        assert_eq!(touched_lines(&index, sel), 1..=1);
    }

    #[test]
    fn test_touched_lines_includes_empty_middle_line() {
        let index = LineIndex::new("a\n\nb");
        assert_eq!(touched_lines(&index, Selection::new(0, 4)), 0..=2);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Indent
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_indent_first_line_caret_at_start() {
        let result = engine().indent(INIT, Selection::caret(0)).unwrap();
        assert_eq!(result.text, format!("{TAB}* first\n* second\n* third\n* last"));
        assert_eq!(result.selection, Selection::caret(4));
        assert!(result.applied);
    }

    #[test]
    fn test_indent_caret_inside_line_touches_only_that_line() {
        let caret = offset_of(INIT, "second") - 1;
        let result = engine().indent(INIT, Selection::caret(caret)).unwrap();
        assert_eq!(result.text, format!("* first\n{TAB}* second\n* third\n* last"));
        assert_eq!(result.selection, Selection::caret(caret + 4));
    }

    #[test]
    fn test_indent_two_lines_shifts_endpoints_per_line() {
        let text = format!("* first\n{TAB}* second\n* third\n* last");
        let sel = Selection::new(offset_of(&text, "cond"), offset_of(&text, "hird"));
        let result = engine().indent(&text, sel).unwrap();

        let expected = format!("* first\n{TAB}{TAB}* second\n{TAB}* third\n* last");
        assert_eq!(result.text, expected);
        assert_eq!(result.selection.start, sel.start + 4);
        assert_eq!(result.selection.end, sel.end + 8);
        assert_eq!(result.selection.start, offset_of(&expected, "cond"));
        assert_eq!(result.selection.end, offset_of(&expected, "hird"));
    }

    #[test]
    fn test_indent_stacks_on_repeat() {
        let sel = Selection::new(offset_of(INIT, "cond"), offset_of(INIT, "hird"));
        let once = engine().indent(INIT, sel).unwrap();
        let twice = engine().indent(&once.text, once.selection).unwrap();
        assert_eq!(
            twice.text,
            format!("* first\n{TAB}{TAB}* second\n{TAB}{TAB}* third\n* last")
        );
        assert_eq!(twice.selection.start, offset_of(&twice.text, "cond"));
        assert_eq!(twice.selection.end, offset_of(&twice.text, "hird"));
    }

    #[test]
    fn test_indent_offsets_before_and_after_span() {
        // Whole second line, ending on the start of the third
        let sel = Selection::new(8, 17);
        let result = engine().indent(INIT, sel).unwrap();
        assert_eq!(result.text, format!("* first\n{TAB}* second\n* third\n* last"));
        // End sat on the start of the untouched third line: moves with it.
        assert_eq!(result.selection, Selection::new(12, 21));
    }

    #[test]
    fn test_indent_empty_line_in_selection() {
        let result = engine().indent("a\n\nb", Selection::new(0, 4)).unwrap();
        assert_eq!(result.text, "    a\n    \n    b");
        assert_eq!(result.selection, Selection::new(4, 16));
    }

    #[test]
    fn test_indent_custom_width() {
        let engine = IndentEngine::new(IndentUnit::new(2));
        let result = engine.indent("x\ny", Selection::new(0, 3)).unwrap();
        assert_eq!(result.text, "  x\n  y");
        assert_eq!(result.selection, Selection::new(2, 7));
    }

    #[test]
    fn test_indent_multibyte_text() {
        let text = "på\n中文";
        let result = engine().indent(text, Selection::caret(4)).unwrap();
        assert_eq!(result.text, "på\n    中文");
        assert_eq!(result.selection, Selection::caret(8));
    }

    #[test]
    fn test_indent_empty_text_is_noop() {
        let result = engine().indent("", Selection::caret(0)).unwrap();
        assert_eq!(result.text, "");
        assert_eq!(result.selection, Selection::caret(0));
        assert!(!result.applied);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Unindent
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_unindent_restores_first_line() {
        let text = format!("{TAB}* first\n* second\n* third\n* last");
        let result = engine().unindent(&text, Selection::caret(4)).unwrap();
        assert_eq!(result.text, INIT);
        assert_eq!(result.selection, Selection::caret(0));
    }

    #[test]
    fn test_unindent_mixed_depths_handled_per_line() {
        let text = format!("* first\n{TAB}* second\n* third\n* last");
        let sel = Selection::new(offset_of(&text, "cond"), offset_of(&text, "hird"));
        let result = engine().unindent(&text, sel).unwrap();
        assert_eq!(result.text, INIT);
        assert_eq!(result.selection.start, offset_of(INIT, "cond"));
        assert_eq!(result.selection.end, offset_of(INIT, "hird"));
    }

    #[test]
    fn test_unindent_removes_at_most_one_unit() {
        let text = "          deep"; // 10 spaces
        let result = engine().unindent(text, Selection::caret(12)).unwrap();
        assert_eq!(result.text, "      deep");
        assert_eq!(result.selection, Selection::caret(8));
    }

    #[test]
    fn test_unindent_partial_indent_cleared() {
        let text = "* first\n  * second\n* third\n* last";
        let caret = 10; // right after the two inserted spaces
        let result = engine().unindent(text, Selection::caret(caret)).unwrap();
        assert_eq!(result.text, INIT);
        assert_eq!(result.selection, Selection::caret(8));
    }

    #[test]
    fn test_unindent_caret_inside_removed_whitespace_clamps_to_line_start() {
        let text = "a\n    b";
        let result = engine().unindent(text, Selection::caret(4)).unwrap();
        assert_eq!(result.text, "a\nb");
        assert_eq!(result.selection, Selection::caret(2));
    }

    #[test]
    fn test_unindent_without_whitespace_is_noop() {
        let result = engine().unindent(INIT, Selection::caret(3)).unwrap();
        assert_eq!(result.text, INIT);
        assert_eq!(result.selection, Selection::caret(3));
        assert!(!result.applied);
    }

    #[test]
    fn test_unindent_tabs_are_not_whitespace_units() {
        let text = "\tcode";
        let result = engine().unindent(text, Selection::caret(1)).unwrap();
        assert_eq!(result.text, "\tcode");
        assert!(!result.applied);
    }

    #[test]
    fn test_unindent_empty_text_is_noop() {
        let result = engine().unindent("", Selection::caret(0)).unwrap();
        assert_eq!(result.text, "");
        assert_eq!(result.selection, Selection::caret(0));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Preconditions
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_invalid_selection_rejected() {
        let err = engine().indent("abc", Selection::new(2, 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidSelection { .. }));

        let err = engine().unindent("abc", Selection::new(0, 4)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSelection {
                start: 0,
                end: 4,
                len: 3
            }
        ));

        assert!(engine().indent("", Selection::caret(1)).is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Properties over a table of inputs
    // ─────────────────────────────────────────────────────────────────────────

    fn cases() -> Vec<(&'static str, Selection)> {
        vec![
            (INIT, Selection::caret(0)),
            (INIT, Selection::caret(7)),
            (INIT, Selection::caret(8)),
            (INIT, Selection::caret(31)),
            (INIT, Selection::new(0, 31)),
            (INIT, Selection::new(3, 17)),
            (INIT, Selection::new(8, 17)),
            (INIT, Selection::new(10, 20)),
            ("    a\n  b\nc", Selection::new(0, 11)),
            ("    a\n  b\nc", Selection::caret(7)),
            ("a\n\n\nb", Selection::new(1, 4)),
            ("trailing\n", Selection::caret(9)),
            ("x", Selection::caret(1)),
            ("på\n  中文\n🎉", Selection::new(1, 9)),
        ]
    }

    #[test]
    fn test_indent_length_delta_matches_touched_lines() {
        for (text, sel) in cases() {
            let touched = touched_lines(&LineIndex::new(text), sel).count();
            let result = engine().indent(text, sel).unwrap();
            assert_eq!(
                char_len(&result.text) - char_len(text),
                4 * touched,
                "length delta for {:?} {:?}",
                text,
                sel
            );
        }
    }

    #[test]
    fn test_line_count_is_invariant() {
        for (text, sel) in cases() {
            let indented = engine().indent(text, sel).unwrap();
            let unindented = engine().unindent(text, sel).unwrap();
            assert_eq!(line_count(&indented.text), line_count(text));
            assert_eq!(line_count(&unindented.text), line_count(text));
        }
    }

    #[test]
    fn test_selection_stays_within_new_text() {
        for (text, sel) in cases() {
            for direction in [IndentDirection::Indent, IndentDirection::Unindent] {
                let result = engine().apply(text, sel, direction).unwrap();
                assert!(
                    result.selection.validate(char_len(&result.text)).is_ok(),
                    "{} produced {:?} for {:?}",
                    direction.label(),
                    result.selection,
                    text
                );
            }
        }
    }

    #[test]
    fn test_indent_then_unindent_round_trips() {
        for (text, sel) in cases() {
            let indented = engine().indent(text, sel).unwrap();
            let back = engine().unindent(&indented.text, indented.selection).unwrap();
            assert_eq!(back.text, text, "text round trip for {:?}", sel);
            assert_eq!(back.selection, sel, "selection round trip for {:?}", text);
        }
    }

    #[test]
    fn test_unindent_removes_exactly_the_partial_spaces() {
        for spaces in 1..4 {
            let text = format!("{}item", " ".repeat(spaces));
            let result = engine().unindent(&text, Selection::caret(0)).unwrap();
            assert_eq!(result.text, "item");
            assert_eq!(char_len(&text) - char_len(&result.text), spaces);
        }
    }
}
