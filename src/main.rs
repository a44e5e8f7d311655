// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! tabindent - Demo Entry Point
//!
//! A single comment box wired to the indentation controller.

mod app;

use app::TabindentApp;
use log::info;
use tabindent::config::load_config;

/// Application name constant.
const APP_NAME: &str = "tabindent";

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {}", APP_NAME);

    // Window size and the saved draft come from the settings file
    let settings = load_config();
    let window_size = settings.window_size;

    info!(
        "Window configuration: {}x{}, indent width: {}",
        window_size.width, window_size.height, settings.indent_width
    );

    let viewport = eframe::egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([window_size.width, window_size.height])
        .with_min_inner_size([400.0, 300.0]);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(move |cc| Ok(Box::new(TabindentApp::new(cc, settings)))),
    )
}
