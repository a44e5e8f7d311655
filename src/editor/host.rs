//! Text-input capability interface
//!
//! The editing core never talks to a UI toolkit directly. Anything that can
//! report and replace its text, selection and focus can host the field: the
//! egui widget in [`super::widget`], or the in-memory [`TextField`] used by
//! headless callers and tests.

use super::selection::Selection;
use crate::string_utils::{char_len, char_to_byte};

/// Read/write access to a live text input.
pub trait TextHost {
    /// Current full text content.
    fn text(&self) -> &str;

    /// Replace the full text content.
    fn set_text(&mut self, text: String);

    /// Current selection, in character offsets.
    fn selection(&self) -> Selection;

    /// Set the selection, in character offsets.
    fn set_selection(&mut self, selection: Selection);

    /// Whether the input currently has keyboard focus.
    fn has_focus(&self) -> bool;

    /// Remove keyboard focus from the input.
    fn blur(&mut self);
}

// ─────────────────────────────────────────────────────────────────────────────
// In-Memory Field
// ─────────────────────────────────────────────────────────────────────────────

/// A text input held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    selection: Selection,
    focused: bool,
}

impl TextField {
    /// Create an unfocused field with the caret at the end of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = char_len(&text);
        Self {
            text,
            selection: Selection::caret(end),
            focused: false,
        }
    }

    /// Give the field keyboard focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Replace the selected characters with `input`, as typing would.
    pub fn insert(&mut self, input: &str) {
        let start = char_to_byte(&self.text, self.selection.start);
        let end = char_to_byte(&self.text, self.selection.end);
        self.text.replace_range(start..end, input);
        self.selection = Selection::caret(self.selection.start + char_len(input));
    }
}

impl TextHost for TextField {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn blur(&mut self) {
        self.focused = false;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
