use thiserror::Error;

/// Errors raised by the raster surface
#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Snapshot is {snapshot:?} but the canvas is {canvas:?}")]
    SnapshotSizeMismatch {
        snapshot: (u32, u32),
        canvas: (u32, u32),
    },
}

/// Errors that can occur while encoding or delivering a saved image
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unsupported export format for file name: {0}")]
    UnsupportedFormat(String),
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("Browser API failure: {0}")]
    Web(String),
}

/// Errors that can occur while loading the app configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}
