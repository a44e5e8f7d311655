//! User settings and preferences for tabindent
//!
//! `Settings` covers how the comment field edits (indent width, Enter and
//! Escape behavior) plus the demo window's appearance and unsent draft.

use crate::editor::{IndentUnit, RouterOptions, DEFAULT_INDENT_WIDTH};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Theme Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Available color themes for the demo window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Toggle between light and dark.
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Get a display label for the theme.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window Size Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Window dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 480.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User settings.
///
/// Stored as JSON; missing keys take their `Default` value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Editing Behavior
    // ─────────────────────────────────────────────────────────────────────────
    /// Spaces added or removed per Tab/Shift+Tab
    pub indent_width: u8,

    /// Whether plain Enter continues list and quote prefixes
    pub continue_markup_on_enter: bool,

    /// Whether Escape removes focus from the comment field
    pub blur_on_escape: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Appearance
    // ─────────────────────────────────────────────────────────────────────────
    /// Color theme
    pub theme: Theme,

    /// Font size for the comment field (in points)
    pub font_size: f32,

    /// Window size
    pub window_size: WindowSize,

    // ─────────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────────
    /// Unsent comment text restored on the next start
    pub draft: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Editing Behavior
            indent_width: DEFAULT_INDENT_WIDTH as u8,
            continue_markup_on_enter: true,
            blur_on_escape: true,

            // Appearance
            theme: Theme::default(),
            font_size: 14.0,
            window_size: WindowSize::default(),

            // Session
            draft: String::new(),
        }
    }
}

impl Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Limits
    // ─────────────────────────────────────────────────────────────────────────

    /// Minimum allowed indent width.
    pub const MIN_INDENT_WIDTH: u8 = 1;
    /// Maximum allowed indent width.
    pub const MAX_INDENT_WIDTH: u8 = 8;
    /// Minimum allowed font size.
    pub const MIN_FONT_SIZE: f32 = 8.0;
    /// Maximum allowed font size.
    pub const MAX_FONT_SIZE: f32 = 72.0;
    /// Minimum window dimension.
    pub const MIN_WINDOW_SIZE: f32 = 200.0;
    /// Maximum window dimension.
    pub const MAX_WINDOW_SIZE: f32 = 10000.0;

    /// Clamp every numeric field into its allowed range.
    ///
    /// Hand-edited files can hold anything, so loading always ends here.
    pub fn sanitize(&mut self) {
        self.indent_width = self
            .indent_width
            .clamp(Self::MIN_INDENT_WIDTH, Self::MAX_INDENT_WIDTH);

        self.font_size = self
            .font_size
            .clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);

        self.window_size.width = self
            .window_size
            .width
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);
        self.window_size.height = self
            .window_size
            .height
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);
    }

    /// Parse JSON and clamp the result.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// The indent unit described by `indent_width`.
    pub fn indent_unit(&self) -> IndentUnit {
        IndentUnit::new(usize::from(self.indent_width))
    }

    /// Key routing options described by these settings.
    pub fn router_options(&self) -> RouterOptions {
        RouterOptions {
            continue_markup_on_enter: self.continue_markup_on_enter,
            blur_on_escape: self.blur_on_escape,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
