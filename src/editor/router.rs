//! Key routing for the comment field
//!
//! Tab only acts as an indentation command once the user has actually started
//! editing the field. Until then it keeps its usual job of moving focus to
//! the next control, so keyboard users can tab through a page without
//! getting trapped in the text box.
//!
//! ```text
//!            focus gained              click / input / Enter
//!  Blurred ───────────────► Focused ─────────────────────────► Focused
//!     ▲                   NoInteraction                      Interacted
//!     │                        │                                 │
//!     └──── focus lost / Escape┴─────────────────────────────────┘
//! ```

use super::indent::IndentDirection;
use log::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Focus State
// ─────────────────────────────────────────────────────────────────────────────

/// Focus and interaction state of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// The field does not have focus
    #[default]
    Blurred,
    /// Focused, but no click or input since focus was gained
    FocusedNoInteraction,
    /// Focused and the user has clicked or typed
    FocusedInteracted,
}

impl FocusState {
    /// Whether the field has focus in this state.
    pub fn is_focused(&self) -> bool {
        !matches!(self, FocusState::Blurred)
    }

    /// Get a display label for the state.
    pub fn label(&self) -> &'static str {
        match self {
            FocusState::Blurred => "Not focused",
            FocusState::FocusedNoInteraction => "Focused (Tab moves focus)",
            FocusState::FocusedInteracted => "Editing (Tab indents)",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Input Events
// ─────────────────────────────────────────────────────────────────────────────

/// Keys the router cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Enter,
    Escape,
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Cmd on macOS, Windows/Super elsewhere
    pub command: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        command: false,
    };

    /// Only Shift held.
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Whether Ctrl, Alt or Command is held.
    pub fn has_command_modifier(&self) -> bool {
        self.ctrl || self.alt || self.command
    }
}

/// A key-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// Create a key press.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Tab with no modifiers.
    pub fn tab() -> Self {
        Self::new(Key::Tab, Modifiers::NONE)
    }

    /// Shift+Tab.
    pub fn shift_tab() -> Self {
        Self::new(Key::Tab, Modifiers::SHIFT)
    }

    /// Enter with no modifiers.
    pub fn enter() -> Self {
        Self::new(Key::Enter, Modifiers::NONE)
    }

    /// Shift+Enter.
    pub fn shift_enter() -> Self {
        Self::new(Key::Enter, Modifiers::SHIFT)
    }

    /// Escape with no modifiers.
    pub fn escape() -> Self {
        Self::new(Key::Escape, Modifiers::NONE)
    }
}

/// Events the host reports for the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// The field gained focus
    FocusGained,
    /// The field lost focus
    FocusLost,
    /// A pointer button went down inside the field
    PointerDown,
    /// The content changed through user input
    ContentChanged,
    /// A key was pressed while the field is the keyboard target
    KeyDown(KeyPress),
}

// ─────────────────────────────────────────────────────────────────────────────
// Route Decision
// ─────────────────────────────────────────────────────────────────────────────

/// What should happen with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Not intercepted; the host's default behavior applies
    PassThrough,
    /// Run the indentation engine
    Indent(IndentDirection),
    /// Insert a newline continuing the current line's list/quote prefix
    ContinueMarkup,
    /// Insert a literal newline
    InsertNewline,
    /// Remove focus from the field
    Blur,
}

impl RouteDecision {
    /// Whether the event is consumed by the field.
    pub fn is_intercepted(&self) -> bool {
        !matches!(self, RouteDecision::PassThrough)
    }
}

/// Router behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterOptions {
    /// Continue list/quote prefixes on plain Enter
    pub continue_markup_on_enter: bool,
    /// Escape removes focus from the field
    pub blur_on_escape: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            continue_markup_on_enter: true,
            blur_on_escape: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Key Router
// ─────────────────────────────────────────────────────────────────────────────

/// State machine deciding which key presses the field intercepts.
#[derive(Debug, Clone, Default)]
pub struct KeyRouter {
    state: FocusState,
    options: RouterOptions,
}

impl KeyRouter {
    /// Create a router in the `Blurred` state.
    pub fn new(options: RouterOptions) -> Self {
        Self {
            state: FocusState::Blurred,
            options,
        }
    }

    /// Current focus state.
    pub fn state(&self) -> FocusState {
        self.state
    }

    /// Current options.
    pub fn options(&self) -> RouterOptions {
        self.options
    }

    /// Replace the options, keeping the focus state.
    pub fn set_options(&mut self, options: RouterOptions) {
        self.options = options;
    }

    /// Whether Tab/Shift+Tab are currently routed to indentation.
    pub fn intercepts_tab(&self) -> bool {
        self.state == FocusState::FocusedInteracted
    }

    /// Apply an event's state transition and decide how to route it.
    pub fn handle(&mut self, event: FieldEvent) -> RouteDecision {
        match event {
            FieldEvent::FocusGained => {
                if self.state == FocusState::Blurred {
                    self.transition(FocusState::FocusedNoInteraction);
                }
                RouteDecision::PassThrough
            }
            FieldEvent::FocusLost => {
                self.transition(FocusState::Blurred);
                RouteDecision::PassThrough
            }
            FieldEvent::PointerDown | FieldEvent::ContentChanged => {
                self.mark_interacted();
                RouteDecision::PassThrough
            }
            FieldEvent::KeyDown(press) => self.route_key(press),
        }
    }

    fn route_key(&mut self, press: KeyPress) -> RouteDecision {
        if !self.state.is_focused() || press.modifiers.has_command_modifier() {
            return RouteDecision::PassThrough;
        }

        let decision = match press.key {
            Key::Tab if self.intercepts_tab() => {
                if press.modifiers.shift {
                    RouteDecision::Indent(IndentDirection::Unindent)
                } else {
                    RouteDecision::Indent(IndentDirection::Indent)
                }
            }
            Key::Tab => RouteDecision::PassThrough,
            Key::Enter => {
                // A newline is content input in either state.
                self.mark_interacted();
                if !press.modifiers.shift && self.options.continue_markup_on_enter {
                    RouteDecision::ContinueMarkup
                } else {
                    RouteDecision::InsertNewline
                }
            }
            Key::Escape if self.options.blur_on_escape && !press.modifiers.shift => {
                self.transition(FocusState::Blurred);
                RouteDecision::Blur
            }
            Key::Escape => RouteDecision::PassThrough,
        };

        debug!("Routed {:?} in {:?}: {:?}", press, self.state, decision);
        decision
    }

    fn mark_interacted(&mut self) {
        if self.state == FocusState::FocusedNoInteraction {
            self.transition(FocusState::FocusedInteracted);
        }
    }

    fn transition(&mut self, next: FocusState) {
        if self.state != next {
            debug!("Field focus state {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
