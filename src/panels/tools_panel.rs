use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::ShapeEditorApp;
use crate::controller::{Controller, EditorEvent};
use crate::state::Mode;

pub fn tools_panel(app: &mut ShapeEditorApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Options");
            ui.separator();

            let active_mode = app.controller().mode();
            for mode in Mode::ALL {
                if ui.radio(active_mode == mode, mode.name()).clicked() && active_mode != mode {
                    log::debug!("Mode selected from UI: {}", mode.name());
                    app.handle_event(ctx, EditorEvent::ModeChanged(mode));
                }
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = app.controller().fill_color();
                if color_edit_button_srgba(ui, &mut color, Alpha::OnlyBlend).changed() {
                    app.handle_event(ctx, EditorEvent::FillColorChanged(color));
                }
            });

            ui.separator();

            // Commands only make sense while selecting
            let enabled = app.controller().mode().is_select();
            ui.horizontal(|ui| {
                if ui.add_enabled(enabled, egui::Button::new("Delete")).clicked() {
                    app.handle_event(ctx, EditorEvent::DeleteSelected);
                }
                if ui.add_enabled(enabled, egui::Button::new("Clone")).clicked() {
                    app.handle_event(ctx, EditorEvent::CloneSelected);
                }
            });

            ui.separator();

            for line in status_lines(app.controller()) {
                ui.label(line);
            }
        });
}

fn status_lines(controller: &Controller) -> [String; 4] {
    let selected = match controller.selected() {
        Some(id) => id.to_string(),
        None => "none".to_owned(),
    };
    [
        format!("Mode: {}", controller.mode().name()),
        format!("State: {}", controller.state().name()),
        format!("Shapes: {}", controller.store().len()),
        format!("Selected: {selected}"),
    ]
}
