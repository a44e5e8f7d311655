//! List and quote continuation on Enter
//!
//! A plain Enter on a line that starts with a markdown prefix inserts a
//! newline followed by the prefix for the next item:
//!
//! - `- `, `* `, `+ ` bullets (with the same indentation)
//! - `- [ ] ` / `- [x] ` task items (always continued unchecked)
//! - `1. ` / `1) ` ordered items (number incremented)
//! - `> ` quotes, nested quotes included
//!
//! Enter on an item that has a prefix and nothing else ends the list: the
//! prefix is removed instead of repeated. Shift+Enter bypasses all of this via
//! [`insert_newline`].

use super::line_index::LineIndex;
use super::selection::{EditResult, Selection};
use crate::error::Result;
use crate::string_utils::{char_len, char_to_byte};
use log::debug;

/// Task boxes recognised after a bullet marker.
const TASK_BOXES: [&str; 3] = ["[ ] ", "[x] ", "[X] "];

/// Longest run of digits accepted as an ordered-list number.
const MAX_ORDERED_DIGITS: usize = 9;

// ─────────────────────────────────────────────────────────────────────────────
// Prefix Parsing
// ─────────────────────────────────────────────────────────────────────────────

/// The kind of markup prefix found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixKind {
    /// `-`, `*` or `+` bullet, optionally followed by a task box
    Bullet { task: bool },
    /// `<number>.` or `<number>)`; `digits` is the marker's digit count
    Ordered { number: u64, digits: usize },
    /// One or more `>` markers
    Quote,
}

/// A markup prefix split into its indentation and marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePrefix<'a> {
    /// Leading spaces/tabs before the marker
    pub indent: &'a str,
    /// The marker including its trailing spacing (e.g. `"- "`, `"12. "`)
    pub marker: &'a str,
    /// What the marker is
    pub kind: PrefixKind,
}

impl LinePrefix<'_> {
    /// Length of indentation plus marker, in bytes.
    pub fn byte_len(&self) -> usize {
        self.indent.len() + self.marker.len()
    }

    /// Length of indentation plus marker, in characters.
    pub fn char_len(&self) -> usize {
        char_len(self.indent) + char_len(self.marker)
    }

    /// The prefix to start the following line with.
    pub fn continuation(&self) -> String {
        match self.kind {
            PrefixKind::Bullet { task: true } => {
                let bullet = &self.marker[..self.marker.len() - TASK_BOXES[0].len()];
                format!("{}{}{}", self.indent, bullet, TASK_BOXES[0])
            }
            PrefixKind::Ordered { number, digits } => format!(
                "{}{}{}",
                self.indent,
                number.saturating_add(1),
                &self.marker[digits..]
            ),
            PrefixKind::Bullet { task: false } | PrefixKind::Quote => {
                format!("{}{}", self.indent, self.marker)
            }
        }
    }
}

/// Parse the markup prefix at the start of `line`, if any.
pub fn parse_prefix(line: &str) -> Option<LinePrefix<'_>> {
    let rest = line.trim_start_matches(|c: char| c == ' ' || c == '\t');
    let indent = &line[..line.len() - rest.len()];
    let bytes = rest.as_bytes();

    let spaces_from = |i: usize| bytes[i..].iter().take_while(|&&b| b == b' ').count();

    // Quote: "> ", ">> ", "> > "
    if bytes.first() == Some(&b'>') {
        let mut len = 0;
        while bytes.get(len) == Some(&b'>') {
            len += 1;
            if bytes.get(len) == Some(&b' ') {
                len += 1;
            }
        }
        return Some(LinePrefix {
            indent,
            marker: &rest[..len],
            kind: PrefixKind::Quote,
        });
    }

    // Bullet: "- ", "* ", "+ ", optionally "[ ] "
    if matches!(bytes.first(), Some(b'-' | b'*' | b'+')) && bytes.get(1) == Some(&b' ') {
        let len = 1 + spaces_from(1);
        let after = &rest[len..];
        if let Some(task) = TASK_BOXES.iter().find(|task| after.starts_with(**task)) {
            return Some(LinePrefix {
                indent,
                marker: &rest[..len + task.len()],
                kind: PrefixKind::Bullet { task: true },
            });
        }
        return Some(LinePrefix {
            indent,
            marker: &rest[..len],
            kind: PrefixKind::Bullet { task: false },
        });
    }

    // Ordered: digits followed by '.' or ')' and a space
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if (1..=MAX_ORDERED_DIGITS).contains(&digits)
        && matches!(bytes.get(digits), Some(b'.' | b')'))
        && bytes.get(digits + 1) == Some(&b' ')
    {
        let number = rest[..digits].parse::<u64>().ok()?;
        let len = digits + 1 + spaces_from(digits + 1);
        return Some(LinePrefix {
            indent,
            marker: &rest[..len],
            kind: PrefixKind::Ordered { number, digits },
        });
    }

    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Enter Handling
// ─────────────────────────────────────────────────────────────────────────────

/// Handle a plain Enter: newline plus continued prefix.
///
/// The selection is replaced by the inserted text. A caret inside the marker
/// itself, or a line without a prefix, gets a plain newline.
///
/// # Errors
///
/// Returns `Error::InvalidSelection` if the selection does not fit `text`.
pub fn continue_on_enter(text: &str, selection: Selection) -> Result<EditResult> {
    let index = LineIndex::new(text);
    selection.validate(index.len())?;

    let line_no = index.line_of(selection.start);
    let line_start = index.line_start(line_no);
    let line_start_byte = char_to_byte(text, line_start);
    let line_end_byte = char_to_byte(text, index.line_end(line_no));
    let line = &text[line_start_byte..line_end_byte];

    let Some(prefix) = parse_prefix(line) else {
        return Ok(replace_selection(text, selection, "\n"));
    };
    if selection.start - line_start < prefix.char_len() {
        return Ok(replace_selection(text, selection, "\n"));
    }

    if selection.is_caret() && line[prefix.byte_len()..].trim().is_empty() {
        debug!("Enter on empty {:?} item, removing prefix", prefix.kind);
        let mut new_text = String::with_capacity(text.len());
        new_text.push_str(&text[..line_start_byte]);
        new_text.push_str(&text[line_end_byte..]);
        return Ok(EditResult::new(new_text, Selection::caret(line_start)));
    }

    let insert = format!("\n{}", prefix.continuation());
    debug!("Continuing {:?} prefix {:?}", prefix.kind, insert);
    Ok(replace_selection(text, selection, &insert))
}

/// Handle Shift+Enter: a literal newline with no prefix continuation.
///
/// # Errors
///
/// Returns `Error::InvalidSelection` if the selection does not fit `text`.
pub fn insert_newline(text: &str, selection: Selection) -> Result<EditResult> {
    selection.validate(char_len(text))?;
    Ok(replace_selection(text, selection, "\n"))
}

/// Replace the selected characters with `insert`, leaving a caret after it.
fn replace_selection(text: &str, selection: Selection, insert: &str) -> EditResult {
    let start = char_to_byte(text, selection.start);
    let end = char_to_byte(text, selection.end);

    let mut new_text = String::with_capacity(text.len() - (end - start) + insert.len());
    new_text.push_str(&text[..start]);
    new_text.push_str(insert);
    new_text.push_str(&text[end..]);

    EditResult::new(new_text, Selection::caret(selection.start + char_len(insert)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
