use thiserror::Error;

/// Failures that abort the editor.
///
/// Editing operations themselves cannot fail; only the platform can.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The window or its graphics context could not be created.
    #[error("failed to start the editor window: {0}")]
    Startup(#[from] eframe::Error),
}
