use egui::{Color32, Pos2, Vec2};
use log::{debug, info};

use crate::config::EditorConfig;
use crate::shape::{Shape, ShapeId, ShapeKind, drag_extent};
use crate::state::{EditorState, Mode};
use crate::store::ShapeStore;

/// Everything the host can ask the editor to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent {
    ModeChanged(Mode),
    FillColorChanged(Color32),
    /// Pointer pressed, in canvas coordinates.
    PointerDown(Pos2),
    /// Pointer moved while pressed.
    PointerDrag(Pos2),
    PointerUp(Pos2),
    DeleteSelected,
    CloneSelected,
}

/// Owns the shapes and interprets gestures according to the active mode.
#[derive(Debug)]
pub struct Controller {
    store: ShapeStore,
    mode: Mode,
    state: EditorState,
    selected: Option<ShapeId>,
    /// Pointer position captured at the last pointer press.
    anchor: Pos2,
    fill_color: Color32,
    config: EditorConfig,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Controller {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            store: ShapeStore::new(),
            mode: Mode::Select,
            state: EditorState::Idle,
            selected: None,
            anchor: Pos2::ZERO,
            fill_color: config.default_fill,
            config,
        }
    }

    /// Dispatch one event. Events must be fed in delivery order; each one is
    /// fully applied before this returns.
    pub fn handle_event(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::ModeChanged(mode) => self.set_mode(mode),
            EditorEvent::FillColorChanged(color) => self.set_fill_color(color),
            EditorEvent::PointerDown(pos) => self.pointer_down(pos),
            EditorEvent::PointerDrag(pos) => self.pointer_drag(pos),
            EditorEvent::PointerUp(pos) => self.pointer_up(pos),
            EditorEvent::DeleteSelected => self.delete_selected(),
            EditorEvent::CloneSelected => self.clone_selected(),
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        info!("Mode changed: {} -> {}", self.mode.name(), mode.name());
        self.mode = mode;

        // An unfinished gesture follows the new mode
        self.state = match (self.state, mode.shape_kind()) {
            (EditorState::DrawingShape { current, .. }, Some(kind)) => {
                EditorState::DrawingShape { kind, current }
            }
            (EditorState::DrawingShape { .. }, None) => EditorState::Idle,
            (state, _) => state,
        };
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.fill_color = color;
        if let Some(id) = self.selected {
            if self.store.set_fill(id, color) {
                info!("Recolored shape {}", id);
            }
        }
    }

    fn pointer_down(&mut self, pos: Pos2) {
        self.anchor = pos;
        self.clear_selection();

        self.state = match self.mode.shape_kind() {
            Some(kind) => EditorState::DrawingShape { kind, current: pos },
            None => match self.store.find_first_hit_within(pos, self.config.line_hit_tolerance) {
                Some(id) => {
                    info!("Selected shape {} at {:?}", id, pos);
                    self.selected = Some(id);
                    EditorState::DraggingSelection { id }
                }
                None => {
                    debug!("No shape under {:?}", pos);
                    EditorState::Idle
                }
            },
        };
    }

    fn pointer_drag(&mut self, pos: Pos2) {
        match self.mode.shape_kind() {
            Some(kind) => {
                self.state = EditorState::DrawingShape { kind, current: pos };
            }
            None => {
                if let Some(id) = self.selected {
                    // Unsigned distance from the press point, added on every tick
                    let delta = drag_extent(self.anchor, pos);
                    debug!("Moving shape {} by {:?}", id, delta);
                    self.store.apply_translation(id, delta);
                    self.state = EditorState::DraggingSelection { id };
                }
            }
        }
    }

    fn pointer_up(&mut self, pos: Pos2) {
        if let Some(kind) = self.mode.shape_kind() {
            let shape = self.committed_shape(kind, pos);
            let id = self.store.append(shape);
            info!("Committed {} {} ({} shapes)", kind.name(), id, self.store.len());
            self.anchor = Pos2::ZERO;
        }
        self.state = EditorState::Idle;
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected.take() else {
            debug!("Delete ignored: nothing selected");
            return;
        };
        if self.store.remove(id).is_some() {
            info!("Deleted shape {} ({} shapes left)", id, self.store.len());
        }
        if self.state.is_dragging_selection() {
            self.state = EditorState::Idle;
        }
    }

    fn clone_selected(&mut self) {
        let Some(id) = self.selected else {
            debug!("Clone ignored: nothing selected");
            return;
        };
        if let Some(copy) = self.store.clone_with_offset(id, self.config.clone_offset_vec()) {
            let clone_id = self.store.append(copy);
            info!("Cloned shape {} as {}", id, clone_id);
        }
    }

    fn clear_selection(&mut self) {
        if let Some(id) = self.selected.take() {
            debug!("Deselected shape {}", id);
        }
    }

    /// Shape produced by releasing the pointer at `pos`.
    ///
    /// Sizes come from the unsigned drag extent; a drag that ended left of or
    /// above the anchor is compensated with a translation so the shape lands
    /// between the anchor and the release point.
    fn committed_shape(&self, kind: ShapeKind, pos: Pos2) -> Shape {
        let mut shape = self.sized_shape(kind, pos);
        let mut compensation = Vec2::ZERO;
        if pos.x < self.anchor.x {
            compensation.x = pos.x - self.anchor.x;
        }
        if pos.y < self.anchor.y {
            compensation.y = pos.y - self.anchor.y;
        }
        shape.translate(compensation);
        shape
    }

    fn sized_shape(&self, kind: ShapeKind, pos: Pos2) -> Shape {
        let mut shape = Shape::from_drag(kind, self.anchor, pos, self.fill_color);
        match kind {
            ShapeKind::Line => shape.set_stroke_width(self.config.line_stroke_width),
            ShapeKind::Rectangle | ShapeKind::Ellipse => {
                shape.set_stroke_width(self.config.default_stroke_width)
            }
        }
        shape
    }

    /// Uncommitted echo of the shape being dragged out, if any.
    pub fn preview(&self) -> Option<Shape> {
        match self.state {
            EditorState::DrawingShape { kind, current } => Some(self.sized_shape(kind, current)),
            _ => None,
        }
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ShapeStore {
        &mut self.store
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// The selected shape, if it still exists.
    pub fn selected(&self) -> Option<ShapeId> {
        self.selected.filter(|id| self.store.get(*id).is_some())
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn fill_color(&self) -> Color32 {
        self.fill_color
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Geometry;
    use egui::{pos2, vec2};

    fn drag(controller: &mut Controller, from: Pos2, to: Pos2) {
        controller.handle_event(EditorEvent::PointerDown(from));
        controller.handle_event(EditorEvent::PointerDrag(to));
        controller.handle_event(EditorEvent::PointerUp(to));
    }

    #[test]
    fn pointer_down_in_drawing_mode_starts_drawing() {
        let mut controller = Controller::default();
        controller.handle_event(EditorEvent::ModeChanged(Mode::Ellipse));
        controller.handle_event(EditorEvent::PointerDown(pos2(5.0, 6.0)));

        assert_eq!(controller.anchor(), pos2(5.0, 6.0));
        assert!(controller.state().is_drawing());
    }

    #[test]
    fn preview_tracks_drag_without_committing() {
        let mut controller = Controller::default();
        controller.handle_event(EditorEvent::ModeChanged(Mode::Rectangle));
        controller.handle_event(EditorEvent::PointerDown(pos2(50.0, 50.0)));
        controller.handle_event(EditorEvent::PointerDrag(pos2(20.0, 70.0)));

        let preview = controller.preview().unwrap();
        assert_eq!(
            preview.geometry(),
            &Geometry::Rectangle { min: pos2(50.0, 50.0), size: vec2(30.0, 20.0) }
        );
        assert_eq!(preview.translation(), Vec2::ZERO);
        assert!(controller.store().is_empty());
    }

    #[test]
    fn commit_resets_anchor_and_returns_to_idle() {
        let mut controller = Controller::default();
        controller.handle_event(EditorEvent::ModeChanged(Mode::Line));
        drag(&mut controller, pos2(10.0, 10.0), pos2(60.0, 10.0));

        assert_eq!(controller.anchor(), Pos2::ZERO);
        assert!(controller.state().is_idle());
        assert!(controller.preview().is_none());
        assert_eq!(controller.store().len(), 1);
    }

    #[test]
    fn select_drag_adds_unsigned_delta_every_tick() {
        let mut controller = Controller::default();
        let id = controller.store_mut().append(Shape::rectangle(pos2(0.0, 0.0), vec2(20.0, 20.0), Color32::RED));

        controller.handle_event(EditorEvent::PointerDown(pos2(10.0, 10.0)));
        controller.handle_event(EditorEvent::PointerDrag(pos2(12.0, 7.0)));
        controller.handle_event(EditorEvent::PointerDrag(pos2(13.0, 10.0)));
        controller.handle_event(EditorEvent::PointerUp(pos2(13.0, 10.0)));

        let moved = controller.store().get(id).unwrap();
        assert_eq!(moved.translation(), vec2(5.0, 3.0));
        assert!(controller.state().is_idle());
        assert_eq!(controller.selected(), Some(id));
    }

    #[test]
    fn pointer_down_in_drawing_mode_drops_selection() {
        let mut controller = Controller::default();
        controller.store_mut().append(Shape::rectangle(pos2(0.0, 0.0), vec2(20.0, 20.0), Color32::RED));
        controller.handle_event(EditorEvent::PointerDown(pos2(5.0, 5.0)));
        assert!(controller.selected().is_some());

        controller.handle_event(EditorEvent::ModeChanged(Mode::Rectangle));
        assert!(controller.selected().is_some());

        controller.handle_event(EditorEvent::PointerDown(pos2(100.0, 100.0)));
        assert!(controller.selected().is_none());
    }

    #[test]
    fn color_change_recolors_selection_only() {
        let mut controller = Controller::default();
        let a = controller.store_mut().append(Shape::rectangle(pos2(0.0, 0.0), vec2(20.0, 20.0), Color32::RED));
        let b = controller.store_mut().append(Shape::rectangle(pos2(50.0, 0.0), vec2(20.0, 20.0), Color32::RED));

        controller.handle_event(EditorEvent::PointerDown(pos2(5.0, 5.0)));
        controller.handle_event(EditorEvent::PointerUp(pos2(5.0, 5.0)));
        controller.handle_event(EditorEvent::FillColorChanged(Color32::GREEN));

        assert_eq!(controller.fill_color(), Color32::GREEN);
        assert_eq!(controller.store().get(a).unwrap().fill(), Some(Color32::GREEN));
        assert_eq!(controller.store().get(b).unwrap().fill(), Some(Color32::RED));
    }

    #[test]
    fn switching_to_select_mid_drawing_drops_preview() {
        let mut controller = Controller::default();
        controller.handle_event(EditorEvent::ModeChanged(Mode::Rectangle));
        controller.handle_event(EditorEvent::PointerDown(pos2(0.0, 0.0)));
        controller.handle_event(EditorEvent::PointerDrag(pos2(10.0, 10.0)));
        controller.handle_event(EditorEvent::ModeChanged(Mode::Select));

        assert!(controller.preview().is_none());
        assert!(controller.state().is_idle());
    }
}
