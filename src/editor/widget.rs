//! Comment box widget for tabindent
//!
//! This module wraps egui's multiline `TextEdit` so that Tab, Shift+Tab,
//! Enter and Escape go through a [`FieldController`] before egui sees them.
//! Key events the controller handles are removed from the frame's input;
//! everything else reaches the `TextEdit` untouched.

use super::controller::FieldController;
use super::host::TextHost;
use super::router::{FieldEvent, Key, KeyPress, Modifiers};
use super::selection::Selection;
use crate::string_utils::char_len;
use eframe::egui::{self, FontId, TextEdit, Ui};
use eframe::egui::text::{CCursor, CCursorRange};
use eframe::egui::text_edit::TextEditState;
use log::debug;

/// Result of showing the comment box.
pub struct CommentBoxOutput {
    /// The `TextEdit` response.
    pub response: egui::Response,
    /// Whether the content was modified this frame, by typing or by the controller.
    pub changed: bool,
    /// Number of key events the controller consumed this frame.
    pub handled_keys: usize,
}

/// A multiline comment field with keyboard indentation.
///
/// # Example
///
/// ```ignore
/// CommentBox::new(&mut self.text, &mut self.controller)
///     .font_size(settings.font_size)
///     .hint_text("Leave a comment")
///     .show(ui);
/// ```
pub struct CommentBox<'a> {
    /// The text being edited.
    text: &'a mut String,
    /// Routing and editing state for the field.
    controller: &'a mut FieldController,
    /// Font size for the field.
    font_size: f32,
    /// Minimum visible rows.
    desired_rows: usize,
    /// Placeholder shown while the field is empty.
    hint_text: Option<String>,
    /// ID for the field (for state persistence).
    id: Option<egui::Id>,
}

impl<'a> CommentBox<'a> {
    /// Create a comment box editing `text`.
    pub fn new(text: &'a mut String, controller: &'a mut FieldController) -> Self {
        Self {
            text,
            controller,
            font_size: 14.0,
            desired_rows: 8,
            hint_text: None,
            id: None,
        }
    }

    /// Set the font size for the field.
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the minimum number of visible rows.
    #[must_use]
    pub fn desired_rows(mut self, rows: usize) -> Self {
        self.desired_rows = rows;
        self
    }

    /// Set the placeholder text.
    #[must_use]
    pub fn hint_text(mut self, hint: impl Into<String>) -> Self {
        self.hint_text = Some(hint.into());
        self
    }

    /// Set a custom ID for the field.
    #[must_use]
    pub fn id(mut self, id: egui::Id) -> Self {
        self.id = Some(id);
        self
    }

    pub fn show(self, ui: &mut Ui) -> CommentBoxOutput {
        let id = self.id.unwrap_or_else(|| ui.id().with("comment_box"));
        let original_content = self.text.clone();

        // Route key presses before the TextEdit consumes them
        let handled_keys = if ui.memory(|m| m.has_focus(id)) {
            route_keys(ui, id, self.text, self.controller)
        } else {
            0
        };

        let mut text_edit = TextEdit::multiline(self.text)
            .id(id)
            .font(FontId::monospace(self.font_size))
            .desired_rows(self.desired_rows)
            .desired_width(f32::INFINITY)
            .lock_focus(self.controller.intercepts_tab());
        if let Some(hint) = self.hint_text {
            text_edit = text_edit.hint_text(hint);
        }

        let response = ui.add(text_edit);

        if response.gained_focus() {
            self.controller.notify(FieldEvent::FocusGained);
        }
        if response.clicked() || response.drag_started() {
            self.controller.notify(FieldEvent::PointerDown);
        }
        if response.changed() {
            self.controller.notify(FieldEvent::ContentChanged);
        }
        if response.lost_focus() {
            self.controller.notify(FieldEvent::FocusLost);
        }

        let changed = *self.text != original_content;
        CommentBoxOutput {
            response,
            changed,
            handled_keys,
        }
    }
}

/// Feed this frame's Tab, Enter and Escape presses to `controller`.
///
/// Handled events are removed from the input queue. Returns how many were handled.
fn route_keys(
    ui: &mut Ui,
    id: egui::Id,
    text: &mut String,
    controller: &mut FieldController,
) -> usize {
    let ctx = ui.ctx().clone();
    let mut state = TextEditState::load(&ctx, id).unwrap_or_default();
    let selection = state
        .cursor
        .char_range()
        .map(|range| selection_from_range(&range))
        .unwrap_or_else(|| Selection::caret(char_len(text)));

    let mut field = EguiField {
        text,
        selection,
        focused: true,
    };

    let mut handled_keys = 0;
    ui.input_mut(|input| {
        input.events.retain(|event| {
            let egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } = event
            else {
                return true;
            };
            let Some(press) = key_press(*key, *modifiers) else {
                return true;
            };
            if !field.focused {
                return true;
            }
            let outcome = controller.handle_event(&mut field, FieldEvent::KeyDown(press));
            if outcome.is_handled() {
                handled_keys += 1;
            }
            !outcome.is_handled()
        });
    });

    if handled_keys > 0 {
        debug!(
            "Comment box handled {} key(s), state {}",
            handled_keys,
            controller.state().label()
        );
        state
            .cursor
            .set_char_range(Some(range_from_selection(field.selection)));
        state.store(&ctx, id);
    }
    if !field.focused {
        ctx.memory_mut(|m| m.surrender_focus(id));
    }
    handled_keys
}

// ─────────────────────────────────────────────────────────────────────────────
// egui Adapter
// ─────────────────────────────────────────────────────────────────────────────

/// The live egui text buffer seen through [`TextHost`].
struct EguiField<'a> {
    text: &'a mut String,
    selection: Selection,
    focused: bool,
}

impl TextHost for EguiField<'_> {
    fn text(&self) -> &str {
        self.text
    }

    fn set_text(&mut self, text: String) {
        *self.text = text;
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

/// Translate an egui key press into a routed key, if it is one the field cares about.
fn key_press(key: egui::Key, modifiers: egui::Modifiers) -> Option<KeyPress> {
    let key = match key {
        egui::Key::Tab => Key::Tab,
        egui::Key::Enter => Key::Enter,
        egui::Key::Escape => Key::Escape,
        _ => return None,
    };
    Some(KeyPress::new(
        key,
        Modifiers {
            shift: modifiers.shift,
            ctrl: modifiers.ctrl,
            alt: modifiers.alt,
            command: modifiers.mac_cmd,
        },
    ))
}

fn selection_from_range(range: &CCursorRange) -> Selection {
    Selection::from_unordered(range.primary.index, range.secondary.index)
}

fn range_from_selection(selection: Selection) -> CCursorRange {
    CCursorRange::two(CCursor::new(selection.start), CCursor::new(selection.end))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
