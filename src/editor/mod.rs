//! Editor module for tabindent
//!
//! This module contains the editing core of the comment field: line/offset
//! mapping, the indentation engine, list continuation, key routing, and the
//! glue that applies their results to a text input.

mod continuation;
mod controller;
mod host;
mod indent;
mod line_index;
mod router;
mod selection;
mod widget;

pub use continuation::{continue_on_enter, insert_newline, parse_prefix, LinePrefix, PrefixKind};
pub use controller::{EventOutcome, FieldController};
pub use host::{TextField, TextHost};
pub use indent::{touched_lines, IndentDirection, IndentEngine, IndentUnit, DEFAULT_INDENT_WIDTH};
pub use line_index::LineIndex;
pub use router::{
    FieldEvent, FocusState, Key, KeyPress, KeyRouter, Modifiers, RouteDecision, RouterOptions,
};
pub use selection::{EditResult, Selection};
pub use widget::{CommentBox, CommentBoxOutput};
