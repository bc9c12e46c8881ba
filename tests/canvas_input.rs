use eframe_shapes::panels::central_panel;
use eframe_shapes::{EditorEvent, Mode, ShapeEditorApp};
use egui::{Context, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, pos2, vec2};

/// Runs one frame of the canvas with a foreground popup covering (150,100)-(250,200).
fn frame(ctx: &Context, app: &mut ShapeEditorApp, events: Vec<Event>) {
    let raw = RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
        events,
        ..Default::default()
    };
    let _ = ctx.run(raw, |ctx| {
        egui::Area::new(egui::Id::new("color_popup"))
            .order(egui::Order::Foreground)
            .fixed_pos(pos2(150.0, 100.0))
            .show(ctx, |ui| {
                ui.allocate_space(vec2(100.0, 100.0));
            });
        central_panel(app, ctx);
    });
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

fn click_drag(ctx: &Context, app: &mut ShapeEditorApp, from: Pos2, to: Pos2) {
    frame(ctx, app, vec![Event::PointerMoved(from), button(from, true)]);
    frame(ctx, app, vec![Event::PointerMoved(to)]);
    frame(ctx, app, vec![button(to, false)]);
}

fn rectangle_app(ctx: &Context) -> ShapeEditorApp {
    let mut app = ShapeEditorApp::default();
    app.handle_event(ctx, EditorEvent::ModeChanged(Mode::Rectangle));
    frame(ctx, &mut app, vec![]);
    frame(ctx, &mut app, vec![]);
    app
}

#[test]
fn test_gesture_on_popup_does_not_draw() {
    let ctx = Context::default();
    let mut app = rectangle_app(&ctx);

    click_drag(&ctx, &mut app, pos2(200.0, 150.0), pos2(220.0, 170.0));

    assert!(app.controller().store().is_empty());
}

#[test]
fn test_gesture_on_uncovered_canvas_draws() {
    let ctx = Context::default();
    let mut app = rectangle_app(&ctx);

    click_drag(&ctx, &mut app, pos2(400.0, 300.0), pos2(450.0, 340.0));

    assert_eq!(app.controller().store().len(), 1);
}

#[test]
fn test_popup_click_keeps_selection() {
    let ctx = Context::default();
    let mut app = rectangle_app(&ctx);
    click_drag(&ctx, &mut app, pos2(400.0, 300.0), pos2(450.0, 340.0));

    app.handle_event(&ctx, EditorEvent::ModeChanged(Mode::Select));
    frame(&ctx, &mut app, vec![Event::PointerMoved(pos2(410.0, 310.0)), button(pos2(410.0, 310.0), true)]);
    frame(&ctx, &mut app, vec![button(pos2(410.0, 310.0), false)]);
    let selected = app.controller().selected();
    assert!(selected.is_some());

    click_drag(&ctx, &mut app, pos2(200.0, 150.0), pos2(205.0, 155.0));
    assert_eq!(app.controller().selected(), selected);
}
