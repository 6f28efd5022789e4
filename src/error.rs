use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShrinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("Invalid quality value: {0}. Must be between 0 and 95")]
    InvalidQuality(u8),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Cannot derive an output name for: {0}")]
    InvalidFileName(PathBuf),
}

pub type Result<T> = std::result::Result<T, ShrinkError>;
