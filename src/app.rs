use egui::Color32;

use crate::config::EditorConfig;
use crate::controller::{Controller, EditorEvent};
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::state::Mode;

/// We derive Deserialize/Serialize so we can persist the editor settings on shutdown.
/// The drawing itself lives in the controller and is never saved.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ShapeEditorApp {
    config: EditorConfig,
    fill_color: Color32,
    mode: Mode,

    #[serde(skip)]
    controller: Controller,
    #[serde(skip)]
    input: InputHandler,
}

impl Default for ShapeEditorApp {
    fn default() -> Self {
        let config = EditorConfig::default();
        Self {
            fill_color: config.default_fill,
            mode: Mode::Select,
            controller: Controller::new(config.clone()),
            input: InputHandler::default(),
            config,
        }
    }
}

impl ShapeEditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        app.controller = Controller::new(app.config.clone());
        app.controller.handle_event(EditorEvent::FillColorChanged(app.fill_color));
        app.controller.handle_event(EditorEvent::ModeChanged(app.mode));
        log::info!(
            "Editor ready: mode {}, fill {:?}",
            app.controller.mode().name(),
            app.controller.fill_color()
        );
        app
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    /// Feed one event to the controller and schedule a repaint.
    pub fn handle_event(&mut self, ctx: &egui::Context, event: EditorEvent) {
        self.controller.handle_event(event);
        ctx.request_repaint();
    }
}

impl eframe::App for ShapeEditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.config = self.controller.config().clone();
        self.fill_color = self.controller.fill_color();
        self.mode = self.controller.mode();
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
