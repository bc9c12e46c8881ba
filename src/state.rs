use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::shape::{ShapeId, ShapeKind};

/// The active tool. Decides which branch pointer gestures take.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Select,
    Rectangle,
    Ellipse,
    Line,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Select, Mode::Rectangle, Mode::Ellipse, Mode::Line];

    pub fn name(self) -> &'static str {
        match self {
            Self::Select => "Select / Move",
            Self::Rectangle => "Rectangle",
            Self::Ellipse => "Ellipse",
            Self::Line => "Line",
        }
    }

    /// The kind of shape this mode draws, if it is a drawing mode.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Self::Select => None,
            Self::Rectangle => Some(ShapeKind::Rectangle),
            Self::Ellipse => Some(ShapeKind::Ellipse),
            Self::Line => Some(ShapeKind::Line),
        }
    }

    pub fn is_select(self) -> bool {
        matches!(self, Self::Select)
    }
}

/// Gesture state of the editor.
///
/// ```text
///            pointer_down (drawing mode)
///   ┌──────┐ ─────────────────────────► ┌───────────────┐
///   │      │ ◄───────────────────────── │ DrawingShape  │
///   │ Idle │        pointer_up          └───────────────┘
///   │      │ ─────────────────────────► ┌───────────────────┐
///   └──────┘ pointer_down on a shape    │ DraggingSelection │
///       ▲         (select mode)         └─────────┬─────────┘
///       └──────────────── pointer_up ─────────────┘
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum EditorState {
    #[default]
    Idle,
    /// A new shape is being dragged out; `current` is the latest pointer position.
    DrawingShape { kind: ShapeKind, current: Pos2 },
    /// The selected shape follows the pointer.
    DraggingSelection { id: ShapeId },
}

impl EditorState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::DrawingShape { .. } => "Drawing",
            Self::DraggingSelection { .. } => "Moving",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::DrawingShape { .. })
    }

    pub fn is_dragging_selection(&self) -> bool {
        matches!(self, Self::DraggingSelection { .. })
    }
}
