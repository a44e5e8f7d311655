//! Selection ranges over a text, in character offsets, and the result type
//! returned by every editing operation.

use crate::error::{Error, Result};

/// A selection `start..end` over a text, measured in characters.
///
/// `start == end` is a caret. Construction does not check the offsets; call
/// [`Selection::validate`] against the text before using them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection from explicit start and end offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a caret (empty selection) at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Create a selection from an anchor/head pair given in either order.
    pub fn from_unordered(a: usize, b: usize) -> Self {
        if a <= b {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }

    /// Whether this selection is a caret.
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected characters (0 for reversed selections).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether no characters are selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check `0 <= start <= end <= text_len`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSelection` for reversed or out-of-range offsets.
    pub fn validate(&self, text_len: usize) -> Result<()> {
        if self.start > self.end || self.end > text_len {
            return Err(Error::InvalidSelection {
                start: self.start,
                end: self.end,
                len: text_len,
            });
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Edit Result
// ─────────────────────────────────────────────────────────────────────────────

/// Result of applying an editing operation to a text and selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    /// The new text after the edit
    pub text: String,
    /// The new selection, valid for `text`
    pub selection: Selection,
    /// Whether the text was modified
    pub applied: bool,
}

impl EditResult {
    /// Create a result for a modified text.
    pub fn new(text: String, selection: Selection) -> Self {
        Self {
            text,
            selection,
            applied: true,
        }
    }

    /// Create a result that leaves the text and selection as they were.
    pub fn unchanged(text: &str, selection: Selection) -> Self {
        Self {
            text: text.to_owned(),
            selection,
            applied: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
