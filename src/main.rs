#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe_shapes::{EditorConfig, EditorError, ShapeEditorApp};

fn main() -> Result<(), EditorError> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EditorConfig::default();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Graphical Editor")
            .with_inner_size(config.window_size)
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    log::info!("Starting graphical editor");
    eframe::run_native(
        "Graphical Editor",
        native_options,
        Box::new(|cc| Ok(Box::new(ShapeEditorApp::new(cc)))),
    )?;
    Ok(())
}
