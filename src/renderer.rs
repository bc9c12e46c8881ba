// src/renderer.rs
use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::config::EditorConfig;
use crate::shape::{Geometry, Shape, ShapeId};
use crate::store::ShapeStore;

/// Number of segments used to approximate an oval.
const OVAL_SEGMENTS: usize = 64;

/// Immediate drawing API the renderer paints through.
///
/// Coordinates are canvas-local pixels. Fill and stroke calls use the
/// surface's current fill color, stroke color and line width.
pub trait Surface {
    fn clear(&mut self, rect: Rect);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Oval inscribed in the given bounding box.
    fn fill_oval(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn stroke_oval(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    fn set_fill(&mut self, color: Color32);
    fn set_stroke(&mut self, color: Color32);
    fn set_line_width(&mut self, width: f32);
}

/// Default paint attributes restored after every full redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDefaults {
    pub fill: Color32,
    pub stroke: Color32,
    pub line_width: f32,
}

impl SurfaceDefaults {
    pub fn new(fill: Color32) -> Self {
        Self {
            fill,
            stroke: Color32::BLACK,
            line_width: 1.0,
        }
    }
}

/// Visual treatment of the selected shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub stroke: Color32,
    pub width: f32,
    pub shadow: Color32,
}

impl Highlight {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            stroke: config.highlight_color,
            width: config.highlight_width,
            shadow: config.shadow_color,
        }
    }
}

/// Repaint the whole canvas from the store.
///
/// Clears `bounds`, paints every shape in insertion order and leaves the
/// surface with `defaults` set so a drag preview starts from known state.
pub fn render(
    surface: &mut dyn Surface,
    bounds: Rect,
    store: &ShapeStore,
    selected: Option<ShapeId>,
    highlight: &Highlight,
    defaults: SurfaceDefaults,
) {
    surface.clear(bounds);

    for (id, shape) in store.iter() {
        if selected == Some(id) {
            paint_selected(surface, shape, highlight);
        } else {
            paint_shape(surface, shape, shape.stroke(), shape.stroke_width());
        }
    }

    surface.set_fill(defaults.fill);
    surface.set_stroke(defaults.stroke);
    surface.set_line_width(defaults.line_width);
}

/// Paint the uncommitted shape of a drag on top of the last redraw.
///
/// Rectangles and ellipses use the surface defaults left by [`render`]; a line
/// preview uses its own color and width, then puts the defaults back.
pub fn render_preview(surface: &mut dyn Surface, preview: &Shape, defaults: SurfaceDefaults) {
    match preview.placed_geometry() {
        Geometry::Line { start, end } => {
            surface.set_line_width(preview.stroke_width());
            surface.set_stroke(preview.stroke());
            surface.stroke_line(start.x, start.y, end.x, end.y);

            surface.set_line_width(defaults.line_width);
            surface.set_fill(defaults.fill);
            surface.set_stroke(defaults.stroke);
        }
        geometry => {
            fill_geometry(surface, &geometry);
            stroke_geometry(surface, &geometry);
        }
    }
}

fn paint_selected(surface: &mut dyn Surface, shape: &Shape, highlight: &Highlight) {
    // Soft halo underneath stands in for a drop shadow
    let geometry = shape.placed_geometry();
    surface.set_stroke(highlight.shadow);
    surface.set_line_width(highlight.width + 4.0);
    stroke_geometry(surface, &geometry);

    paint_shape(surface, shape, highlight.stroke, highlight.width);
}

fn paint_shape(surface: &mut dyn Surface, shape: &Shape, stroke: Color32, width: f32) {
    let geometry = shape.placed_geometry();
    surface.set_stroke(stroke);
    surface.set_line_width(width);
    if let Some(fill) = shape.fill() {
        surface.set_fill(fill);
        fill_geometry(surface, &geometry);
    }
    stroke_geometry(surface, &geometry);
}

fn fill_geometry(surface: &mut dyn Surface, geometry: &Geometry) {
    match *geometry {
        Geometry::Rectangle { min, size } => surface.fill_rect(min.x, min.y, size.x, size.y),
        Geometry::Ellipse { center, radius } => {
            // Center doubles as the oval's corner and the radii as its size
            surface.fill_oval(center.x, center.y, radius.x, radius.y);
        }
        Geometry::Line { .. } => {}
    }
}

fn stroke_geometry(surface: &mut dyn Surface, geometry: &Geometry) {
    match *geometry {
        Geometry::Rectangle { min, size } => surface.stroke_rect(min.x, min.y, size.x, size.y),
        Geometry::Ellipse { center, radius } => {
            surface.stroke_oval(center.x, center.y, radius.x, radius.y);
        }
        Geometry::Line { start, end } => surface.stroke_line(start.x, start.y, end.x, end.y),
    }
}

/// [`Surface`] backed by an egui painter.
///
/// `origin` is the screen position of the canvas' top-left corner.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    background: Color32,
    fill: Color32,
    stroke: Color32,
    line_width: f32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2, background: Color32) -> Self {
        Self {
            painter,
            origin,
            background,
            fill: Color32::WHITE,
            stroke: Color32::BLACK,
            line_width: 1.0,
        }
    }

    fn screen_rect(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_min_size(self.origin + Vec2::new(x, y), Vec2::new(w, h))
    }

    fn stroke(&self) -> Stroke {
        Stroke::new(self.line_width, self.stroke)
    }

    fn oval_points(&self, x: f32, y: f32, w: f32, h: f32) -> Vec<Pos2> {
        let rect = self.screen_rect(x, y, w, h);
        let center = rect.center();
        let (rx, ry) = (rect.width() / 2.0, rect.height() / 2.0);
        (0..OVAL_SEGMENTS)
            .map(|i| {
                let angle = i as f32 / OVAL_SEGMENTS as f32 * std::f32::consts::TAU;
                Pos2::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
            })
            .collect()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, rect: Rect) {
        let rect = rect.translate(self.origin.to_vec2());
        self.painter.rect_filled(rect, 0.0, self.background);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.painter.rect_filled(self.screen_rect(x, y, w, h), 0.0, self.fill);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let points = self.screen_rect(x, y, w, h);
        let corners = vec![
            points.left_top(),
            points.right_top(),
            points.right_bottom(),
            points.left_bottom(),
        ];
        self.painter.add(egui::Shape::closed_line(corners, self.stroke()));
    }

    fn fill_oval(&mut self, x: f32, y: f32, w: f32, h: f32) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let points = self.oval_points(x, y, w, h);
        self.painter
            .add(egui::Shape::convex_polygon(points, self.fill, Stroke::NONE));
    }

    fn stroke_oval(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let points = self.oval_points(x, y, w, h);
        self.painter.add(egui::Shape::closed_line(points, self.stroke()));
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let start = self.origin + Vec2::new(x1, y1);
        let end = self.origin + Vec2::new(x2, y2);
        self.painter.line_segment([start, end], self.stroke());
    }

    fn set_fill(&mut self, color: Color32) {
        self.fill = color;
    }

    fn set_stroke(&mut self, color: Color32) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_painter_surface_paints_every_kind() {
        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));
        let painter = Painter::new(ctx, layer_id, rect);

        let mut store = ShapeStore::new();
        store.append(Shape::rectangle(pos2(1.0, 1.0), vec2(10.0, 10.0), Color32::RED));
        store.append(Shape::ellipse(pos2(50.0, 50.0), vec2(10.0, 5.0), Color32::RED));
        store.append(Shape::line(pos2(0.0, 0.0), pos2(90.0, 90.0), Color32::BLUE));

        let mut surface = PainterSurface::new(&painter, pos2(10.0, 10.0), Color32::WHITE);
        let defaults = SurfaceDefaults::new(Color32::RED);
        render(
            &mut surface,
            rect,
            &store,
            None,
            &Highlight::from_config(&EditorConfig::default()),
            defaults,
        );

        assert_eq!(surface.fill, Color32::RED);
        assert_eq!(surface.stroke, Color32::BLACK);
        assert_eq!(surface.line_width, 1.0);
    }

    #[test]
    fn test_oval_points_stay_in_box() {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);
        let surface = PainterSurface::new(&painter, Pos2::ZERO, Color32::WHITE);

        let bounds = Rect::from_min_size(pos2(10.0, 20.0), vec2(40.0, 10.0)).expand(0.01);
        for p in surface.oval_points(10.0, 20.0, 40.0, 10.0) {
            assert!(bounds.contains(p), "{p:?} escaped the oval box");
        }
    }
}
