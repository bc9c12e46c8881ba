use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::shape::hit_testing::LINE_HIT_TOLERANCE;
use crate::shape::{DEFAULT_STROKE_WIDTH, LINE_STROKE_WIDTH};

/// Tunables of the editor, persisted with the rest of the app settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorConfig {
    pub canvas_background: Color32,
    pub default_fill: Color32,
    /// Offset applied to both axes when cloning the selected shape.
    pub clone_offset: f32,
    pub default_stroke_width: f32,
    pub line_stroke_width: f32,
    pub highlight_color: Color32,
    pub highlight_width: f32,
    pub shadow_color: Color32,
    pub line_hit_tolerance: f32,
    pub window_size: Vec2,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_background: Color32::WHITE,
            default_fill: Color32::WHITE,
            clone_offset: 10.0,
            default_stroke_width: DEFAULT_STROKE_WIDTH,
            line_stroke_width: LINE_STROKE_WIDTH,
            highlight_color: Color32::from_rgb(0x00, 0x00, 0x8b),
            highlight_width: 5.0,
            shadow_color: Color32::from_rgb(0xf0, 0xf8, 0xff),
            line_hit_tolerance: LINE_HIT_TOLERANCE,
            window_size: Vec2::new(900.0, 600.0),
        }
    }
}

impl EditorConfig {
    pub fn clone_offset_vec(&self) -> Vec2 {
        Vec2::splat(self.clone_offset)
    }
}
