#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod store;

pub use app::ShapeEditorApp;
pub use config::EditorConfig;
pub use controller::{Controller, EditorEvent};
pub use error::EditorError;
pub use input::InputHandler;
pub use renderer::{PainterSurface, Surface, render, render_preview};
pub use shape::{Geometry, Shape, ShapeId, ShapeKind};
pub use state::{EditorState, Mode};
pub use store::ShapeStore;
