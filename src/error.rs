use thiserror::Error;

/// Errors raised by a scene while capturing or restoring a snapshot
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Failed to serialize scene: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Malformed snapshot: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Errors surfaced by undo/redo
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to restore snapshot: {0}")]
    Restore(#[from] SceneError),
}

/// Errors that can occur while exporting the canvas as an image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write image: {0}")]
    Write(#[from] std::io::Error),

    #[error("Failed to download image: {0}")]
    Download(String),

    #[error("Canvas has no pixels to export")]
    Empty,
}
