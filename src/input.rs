use egui::{Context, Key, LayerId, Modifiers, PointerButton, Pos2, Rect};

use crate::controller::EditorEvent;
use crate::state::Mode;

/// Converts raw egui input into canvas-local editor events.
///
/// A gesture only starts when the primary button is pressed inside the
/// canvas; once started, drags and the release are reported even if the
/// pointer leaves the canvas.
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    gesture_active: bool,
    canvas_rect: Rect,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            gesture_active: false,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture_active
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// A press belongs to the canvas only if no other layer (popup, window)
    /// sits on top of it at that position.
    fn owns_press(&self, ctx: &Context, pos: Pos2, canvas_layer: LayerId) -> bool {
        self.canvas_rect.contains(pos)
            && ctx.layer_id_at(pos).is_none_or(|layer| layer == canvas_layer)
    }

    /// Process raw pointer input and generate pointer events
    pub fn process_input(&mut self, ctx: &Context, canvas_layer: LayerId) -> Vec<EditorEvent> {
        let mut events = Vec::new();

        let (latest, pressed, down, released) = ctx.input(|input| {
            (
                input.pointer.latest_pos(),
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.button_down(PointerButton::Primary),
                input.pointer.button_released(PointerButton::Primary),
            )
        });
        let pos = latest.or(self.last_pointer_pos);

        if pressed {
            if let Some(pos) = pos.filter(|p| self.owns_press(ctx, *p, canvas_layer)) {
                self.gesture_active = true;
                events.push(EditorEvent::PointerDown(self.to_canvas(pos)));
            } else {
                log::debug!("Press at {:?} not on the canvas", pos);
            }
        } else if self.gesture_active && down {
            if let Some(pos) = latest.filter(|p| Some(*p) != self.last_pointer_pos) {
                events.push(EditorEvent::PointerDrag(self.to_canvas(pos)));
            }
        }

        if self.gesture_active && released {
            if let Some(pos) = pos {
                events.push(EditorEvent::PointerUp(self.to_canvas(pos)));
            }
            self.gesture_active = false;
        }

        if latest.is_some() {
            self.last_pointer_pos = latest;
        }

        events
    }

    /// Keyboard shortcuts for the selection commands, honored in select mode only.
    pub fn process_shortcuts(&self, ctx: &Context, mode: Mode) -> Vec<EditorEvent> {
        let mut events = Vec::new();
        if !mode.is_select() || ctx.wants_keyboard_input() {
            return events;
        }
        ctx.input_mut(|input| {
            if input.consume_key(Modifiers::NONE, Key::Delete)
                || input.consume_key(Modifiers::NONE, Key::Backspace)
            {
                events.push(EditorEvent::DeleteSelected);
            }
            if input.consume_key(Modifiers::COMMAND, Key::D) {
                events.push(EditorEvent::CloneSelected);
            }
        });
        events
    }
}
