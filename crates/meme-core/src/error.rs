use thiserror::Error;

use crate::controls::ControlKind;

#[derive(Error, Debug)]
pub enum MemeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid dimensions: canvas {canvas_width}x{canvas_height}, image {image_width}x{image_height}")]
    InvalidDimensions {
        canvas_width: f64,
        canvas_height: f64,
        image_width: f64,
        image_height: f64,
    },

    #[error("Volume {0} out of range (0-100)")]
    VolumeOutOfRange(u32),

    #[error("{0} control is disabled")]
    ControlDisabled(ControlKind),

    #[error("Voice index {index} out of range (total: {total})")]
    VoiceIndexOutOfRange { index: usize, total: usize },

    #[error("Font unavailable: {0}")]
    FontUnavailable(String),

    #[error("Speech error: {0}")]
    Speech(String),

    #[error("Config parse error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MemeError>;
