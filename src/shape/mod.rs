use egui::{Color32, Pos2, Rect, Vec2};

pub mod hit_testing;

// Stroke widths used for freshly committed shapes
pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;
pub const LINE_STROKE_WIDTH: f32 = 5.0;

/// Stable handle assigned by the store when a shape is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u64);

impl ShapeId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three kinds of shape the editor can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Line,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Ellipse => "Ellipse",
            Self::Line => "Line",
        }
    }
}

/// Geometry in the shape's local, untranslated frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Rectangle { min: Pos2, size: Vec2 },
    Ellipse { center: Pos2, radius: Vec2 },
    Line { start: Pos2, end: Pos2 },
}

impl Geometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle { .. } => ShapeKind::Rectangle,
            Self::Ellipse { .. } => ShapeKind::Ellipse,
            Self::Line { .. } => ShapeKind::Line,
        }
    }

    /// Same geometry moved rigidly by `delta`.
    pub fn translated(&self, delta: Vec2) -> Self {
        match *self {
            Self::Rectangle { min, size } => Self::Rectangle { min: min + delta, size },
            Self::Ellipse { center, radius } => Self::Ellipse {
                center: center + delta,
                radius,
            },
            Self::Line { start, end } => Self::Line {
                start: start + delta,
                end: end + delta,
            },
        }
    }

    /// Bounding box, ignoring stroke width.
    pub fn bounds(&self) -> Rect {
        match *self {
            Self::Rectangle { min, size } => Rect::from_min_size(min, size),
            Self::Ellipse { center, radius } => Rect::from_center_size(center, radius * 2.0),
            Self::Line { start, end } => Rect::from_two_pos(start, end),
        }
    }
}

/// A drawn shape with its paint attributes.
///
/// `translation` accumulates every move applied to the shape and is only
/// folded into the geometry when painting or hit-testing.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: Geometry,
    fill: Option<Color32>,
    stroke: Color32,
    stroke_width: f32,
    translation: Vec2,
}

impl Shape {
    pub fn rectangle(min: Pos2, size: Vec2, fill: Color32) -> Self {
        Self {
            geometry: Geometry::Rectangle {
                min,
                size: size.max(Vec2::ZERO),
            },
            fill: Some(fill),
            stroke: Color32::BLACK,
            stroke_width: DEFAULT_STROKE_WIDTH,
            translation: Vec2::ZERO,
        }
    }

    pub fn ellipse(center: Pos2, radius: Vec2, fill: Color32) -> Self {
        Self {
            geometry: Geometry::Ellipse {
                center,
                radius: radius.max(Vec2::ZERO),
            },
            fill: Some(fill),
            stroke: Color32::BLACK,
            stroke_width: DEFAULT_STROKE_WIDTH,
            translation: Vec2::ZERO,
        }
    }

    pub fn line(start: Pos2, end: Pos2, stroke: Color32) -> Self {
        Self {
            geometry: Geometry::Line { start, end },
            fill: None,
            stroke,
            stroke_width: LINE_STROKE_WIDTH,
            translation: Vec2::ZERO,
        }
    }

    /// Builds the shape a drag from `anchor` to `current` describes.
    ///
    /// Rectangles and ellipses are sized by the absolute deltas and stay
    /// anchored at `anchor` whatever the drag direction. Lines run from the
    /// anchor to the current point.
    pub fn from_drag(kind: ShapeKind, anchor: Pos2, current: Pos2, color: Color32) -> Self {
        let size = drag_extent(anchor, current);
        match kind {
            ShapeKind::Rectangle => Self::rectangle(anchor, size, color),
            ShapeKind::Ellipse => Self::ellipse(anchor, size, color),
            ShapeKind::Line => Self::line(anchor, current, color),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Geometry with the accumulated translation applied.
    pub fn placed_geometry(&self) -> Geometry {
        self.geometry.translated(self.translation)
    }

    pub fn fill(&self) -> Option<Color32> {
        self.fill
    }

    /// Lines have no interior; setting their fill is ignored.
    pub fn set_fill(&mut self, color: Color32) {
        if self.kind() != ShapeKind::Line {
            self.fill = Some(color);
        }
    }

    pub fn stroke(&self) -> Color32 {
        self.stroke
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width.max(0.0);
    }

    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.translation += delta;
    }

    /// Screen-space bounds after translation.
    pub fn bounds(&self) -> Rect {
        self.placed_geometry().bounds()
    }

    /// Copy of this shape with its anchor point moved by `offset`.
    ///
    /// Rectangles move their corner and ellipses their center. A line only
    /// moves its start point; the end point stays where it was.
    pub fn offset_copy(&self, offset: Vec2) -> Self {
        let geometry = match self.geometry {
            Geometry::Line { start, end } => Geometry::Line {
                start: start + offset,
                end,
            },
            other => other.translated(offset),
        };
        Self {
            geometry,
            ..self.clone()
        }
    }
}

/// Unsigned width/height of a drag gesture.
pub fn drag_extent(anchor: Pos2, current: Pos2) -> Vec2 {
    Vec2::new((current.x - anchor.x).abs(), (current.y - anchor.y).abs())
}
