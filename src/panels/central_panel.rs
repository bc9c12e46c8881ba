use egui::{CursorIcon, Sense};

use crate::ShapeEditorApp;
use crate::renderer::{Highlight, PainterSurface, SurfaceDefaults, render, render_preview};

pub fn central_panel(app: &mut ShapeEditorApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
            let canvas_rect = response.rect;

            // Handle input
            app.input_mut().set_canvas_rect(canvas_rect);
            let mut events = app.input_mut().process_input(ctx, painter.layer_id());
            let mode = app.controller().mode();
            events.extend(app.input_mut().process_shortcuts(ctx, mode));
            for event in events {
                log::debug!("Canvas event: {:?}", event);
                app.handle_event(ctx, event);
            }

            // Render the canvas
            let controller = app.controller();
            let config = controller.config();
            let defaults = SurfaceDefaults {
                line_width: config.default_stroke_width,
                ..SurfaceDefaults::new(controller.fill_color())
            };
            let mut surface = PainterSurface::new(&painter, canvas_rect.min, config.canvas_background);
            let local_bounds = egui::Rect::from_min_size(egui::Pos2::ZERO, canvas_rect.size());
            render(
                &mut surface,
                local_bounds,
                controller.store(),
                controller.selected(),
                &Highlight::from_config(config),
                defaults,
            );
            if let Some(preview) = controller.preview() {
                render_preview(&mut surface, &preview, defaults);
            }

            // Hand cursor over the selected shape
            if let (Some(id), Some(hover)) = (controller.selected(), response.hover_pos()) {
                let local = (hover - canvas_rect.min).to_pos2();
                let hovered = controller
                    .store()
                    .get(id)
                    .is_some_and(|shape| shape.contains_with_tolerance(local, config.line_hit_tolerance));
                if hovered {
                    ctx.set_cursor_icon(CursorIcon::PointingHand);
                }
            }
        });
}
