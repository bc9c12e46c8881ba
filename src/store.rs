use egui::{Pos2, Vec2};

use crate::shape::hit_testing::LINE_HIT_TOLERANCE;
use crate::shape::{Shape, ShapeId};

/// Ordered collection of every shape on the canvas.
///
/// Insertion order is paint order: later shapes are drawn on top.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<(ShapeId, Shape)>,
    next_id: u64,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape on top of the others and return its handle.
    pub fn append(&mut self, shape: Shape) -> ShapeId {
        self.next_id += 1;
        let id = ShapeId::new(self.next_id);
        self.shapes.push((id, shape));
        id
    }

    /// Remove the shape with the given handle, if it is still here.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.position(id)?;
        Some(self.shapes.remove(index).1)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|(sid, _)| *sid == id).map(|(_, shape)| shape)
    }

    fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|(sid, _)| *sid == id).map(|(_, shape)| shape)
    }

    fn position(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|(sid, _)| *sid == id)
    }

    /// First shape, in insertion order, whose region contains `pos`.
    ///
    /// Older shapes win over newer ones even though newer ones are painted
    /// on top of them.
    pub fn find_first_hit(&self, pos: Pos2) -> Option<ShapeId> {
        self.find_first_hit_within(pos, LINE_HIT_TOLERANCE)
    }

    pub fn find_first_hit_within(&self, pos: Pos2, line_tolerance: f32) -> Option<ShapeId> {
        self.shapes
            .iter()
            .find(|(_, shape)| shape.contains_with_tolerance(pos, line_tolerance))
            .map(|(id, _)| *id)
    }

    /// Accumulate a move on the shape. Returns false if the id is unknown.
    pub fn apply_translation(&mut self, id: ShapeId, delta: Vec2) -> bool {
        match self.get_mut(id) {
            Some(shape) => {
                shape.translate(delta);
                true
            }
            None => false,
        }
    }

    /// Recolor the shape's interior. Lines keep having no fill.
    pub fn set_fill(&mut self, id: ShapeId, color: egui::Color32) -> bool {
        match self.get_mut(id) {
            Some(shape) => {
                shape.set_fill(color);
                true
            }
            None => false,
        }
    }

    /// Produce an offset copy of the shape without inserting it.
    pub fn clone_with_offset(&self, id: ShapeId, offset: Vec2) -> Option<Shape> {
        self.get(id).map(|shape| shape.offset_copy(offset))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
