//! Main application module for the tabindent demo
//!
//! This module implements the eframe App trait: one comment box, a status
//! line showing the field's focus state, and the editing settings.

use eframe::egui::{self, RichText, Ui};
use log::{debug, info};
use tabindent::config::{save_config_silent, Settings, Theme, WindowSize};
use tabindent::editor::{CommentBox, FieldController};

/// The demo application.
pub struct TabindentApp {
    /// User settings, persisted on exit
    settings: Settings,
    /// Comment text being edited
    text: String,
    /// Routing and indentation for the comment box
    controller: FieldController,
    /// Whether settings changed since the last save
    settings_dirty: bool,
}

impl TabindentApp {
    /// Create the app from loaded settings, restoring the saved draft.
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        info!("Initializing tabindent");

        apply_theme(&cc.egui_ctx, settings.theme);
        let controller = FieldController::from_settings(&settings);

        Self {
            text: settings.draft.clone(),
            settings,
            controller,
            settings_dirty: false,
        }
    }

    /// Track the window size for persistence.
    fn update_window_state(&mut self, ctx: &egui::Context) {
        let Some(rect) = ctx.input(|i| i.viewport().inner_rect) else {
            return;
        };
        let size = rect.size();
        let current = self.settings.window_size;
        if (current.width - size.x).abs() > 1.0 || (current.height - size.y).abs() > 1.0 {
            self.settings.window_size = WindowSize {
                width: size.x,
                height: size.y,
            };
            self.settings_dirty = true;
        }
    }

    /// Show the editing settings.
    ///
    /// Returns true if any setting was changed.
    fn show_settings(&mut self, ui: &mut Ui) -> bool {
        let settings = &mut self.settings;
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label(RichText::new("Indent").strong());
            let mut width = f32::from(settings.indent_width);
            let slider = ui.add(
                egui::Slider::new(
                    &mut width,
                    f32::from(Settings::MIN_INDENT_WIDTH)..=f32::from(Settings::MAX_INDENT_WIDTH),
                )
                .step_by(1.0)
                .suffix(" spaces"),
            );
            if slider.changed() {
                settings.indent_width = width as u8;
                changed = true;
            }

            ui.add_space(12.0);

            if ui
                .checkbox(&mut settings.continue_markup_on_enter, "Continue lists")
                .on_hover_text("Enter repeats the list or quote prefix of the current line")
                .changed()
            {
                changed = true;
            }

            if ui
                .checkbox(&mut settings.blur_on_escape, "Escape leaves field")
                .on_hover_text("Escape removes focus so Tab moves to the next control")
                .changed()
            {
                changed = true;
            }

            ui.add_space(12.0);

            let theme_label = format!("{} theme", settings.theme.toggle().label());
            if ui.button(theme_label).clicked() {
                settings.theme = settings.theme.toggle();
                apply_theme(ui.ctx(), settings.theme);
                changed = true;
            }
        });

        changed
    }
}

impl eframe::App for TabindentApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_window_state(ctx);

        egui::TopBottomPanel::top("settings").show(ctx, |ui| {
            ui.add_space(4.0);
            if self.show_settings(ui) {
                self.settings.sanitize();
                self.controller.apply_settings(&self.settings);
                self.settings_dirty = true;
                debug!("Settings changed: {:?}", self.settings);
            }
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(self.controller.state().label()).weak());
                ui.separator();
                let hint = if self.controller.intercepts_tab() {
                    "Tab indents, Escape leaves the field"
                } else {
                    "Tab moves focus"
                };
                ui.label(RichText::new(hint).weak());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let output = CommentBox::new(&mut self.text, &mut self.controller)
                .font_size(self.settings.font_size)
                .hint_text("Leave a comment")
                .show(ui);
            if output.changed {
                self.settings_dirty = true;
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                // Plain widgets so focus traversal out of the comment box is visible
                if ui.button("Comment").clicked() {
                    info!("Comment submitted ({} chars)", self.text.chars().count());
                    self.text.clear();
                    self.settings_dirty = true;
                }
                if ui.button("Cancel").clicked() {
                    self.text.clear();
                    self.settings_dirty = true;
                }
            });
        });
    }

    /// Called when the application is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
        self.settings.draft = self.text.clone();
        save_config_silent(&self.settings);
    }

    /// Save persistent state.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        if self.settings_dirty {
            debug!("Saving settings");
            self.settings.draft = self.text.clone();
            if save_config_silent(&self.settings) {
                self.settings_dirty = false;
            }
        }
    }

    /// Auto-save interval in seconds.
    fn auto_save_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(30)
    }
}

/// Apply the theme's visuals to the egui context.
fn apply_theme(ctx: &egui::Context, theme: Theme) {
    let visuals = match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    };
    ctx.set_visuals(visuals);
}
