use egui::Pos2;

use super::{Geometry, Shape};

/// Lines are selectable within this many pixels of the segment, or half
/// their stroke width if that is larger.
pub const LINE_HIT_TOLERANCE: f32 = 3.0;

impl Shape {
    /// Test whether `pos` lies in the shape's paintable region, with the
    /// accumulated translation applied.
    pub fn contains(&self, pos: Pos2) -> bool {
        self.contains_with_tolerance(pos, LINE_HIT_TOLERANCE)
    }

    pub fn contains_with_tolerance(&self, pos: Pos2, line_tolerance: f32) -> bool {
        match self.placed_geometry() {
            Geometry::Rectangle { min, size } => {
                pos.x >= min.x && pos.x <= min.x + size.x && pos.y >= min.y && pos.y <= min.y + size.y
            }
            Geometry::Ellipse { center, radius } => point_in_ellipse(pos, center, radius.x, radius.y),
            Geometry::Line { start, end } => {
                let band = (self.stroke_width() / 2.0).max(line_tolerance);
                distance_to_line_segment(pos, start, end) <= band
            }
        }
    }
}

fn point_in_ellipse(pos: Pos2, center: Pos2, rx: f32, ry: f32) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let nx = (pos.x - center.x) / rx;
    let ny = (pos.y - center.y) / ry;
    nx * nx + ny * ny <= 1.0
}

/// Distance from a point to a line segment
pub fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}
