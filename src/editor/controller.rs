//! Field controller: routes host events to the editing core
//!
//! Each event is handled to completion before the next one: the router
//! decides, the current text and selection are read from the host, the edit
//! is computed, and the result is written back.

use super::continuation::{continue_on_enter, insert_newline};
use super::host::TextHost;
use super::indent::{IndentEngine, IndentUnit};
use super::router::{FieldEvent, FocusState, KeyRouter, RouteDecision, RouterOptions};
use crate::config::Settings;
use log::warn;

/// Whether the host should still run its default handling for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Not intercepted; the host applies its default behavior
    PassThrough,
    /// Consumed by the field
    Handled,
}

impl EventOutcome {
    /// Whether the event was consumed.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventOutcome::Handled)
    }
}

/// Connects a [`KeyRouter`] and an [`IndentEngine`] to a [`TextHost`].
#[derive(Debug, Clone, Default)]
pub struct FieldController {
    router: KeyRouter,
    engine: IndentEngine,
}

impl FieldController {
    /// Create a controller for an unfocused field.
    pub fn new(unit: IndentUnit, options: RouterOptions) -> Self {
        Self {
            router: KeyRouter::new(options),
            engine: IndentEngine::new(unit),
        }
    }

    /// Create a controller configured from user settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.indent_unit(), settings.router_options())
    }

    /// Pick up changed settings without resetting the focus state.
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.engine = IndentEngine::new(settings.indent_unit());
        self.router.set_options(settings.router_options());
    }

    /// Current focus state of the field.
    pub fn state(&self) -> FocusState {
        self.router.state()
    }

    /// Whether Tab/Shift+Tab are currently routed to indentation.
    pub fn intercepts_tab(&self) -> bool {
        self.router.intercepts_tab()
    }

    /// The indentation engine in use.
    pub fn engine(&self) -> &IndentEngine {
        &self.engine
    }

    /// Feed a focus, pointer or content event that needs no host access.
    pub fn notify(&mut self, event: FieldEvent) {
        let decision = self.router.handle(event);
        debug_assert!(
            !decision.is_intercepted(),
            "key events must go through handle_event"
        );
    }

    /// Handle an event against `host`.
    ///
    /// A host reporting an invalid selection is logged and the event is
    /// passed through untouched.
    pub fn handle_event<H: TextHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: FieldEvent,
    ) -> EventOutcome {
        let decision = self.router.handle(event);
        let result = match decision {
            RouteDecision::PassThrough => return EventOutcome::PassThrough,
            RouteDecision::Blur => {
                host.blur();
                return EventOutcome::Handled;
            }
            RouteDecision::Indent(direction) => {
                self.engine
                    .apply(host.text(), host.selection(), direction)
            }
            RouteDecision::ContinueMarkup => continue_on_enter(host.text(), host.selection()),
            RouteDecision::InsertNewline => insert_newline(host.text(), host.selection()),
        };

        match result {
            Ok(edit) => {
                if edit.applied {
                    host.set_text(edit.text);
                }
                host.set_selection(edit.selection);
                EventOutcome::Handled
            }
            Err(err) => {
                warn!("Not handling {:?}: {}", decision, err);
                EventOutcome::PassThrough
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
