use thiserror::Error;

/// Reasons a line build refuses to produce geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    #[error("line needs at least 2 points, got {count}")]
    NotEnoughPoints { count: usize },

    #[error("no line texture set")]
    TextureNotSet,

    #[error("line texture has zero size ({width}x{height})")]
    EmptyTexture { width: u32, height: u32 },

    #[error("line source rect is empty")]
    EmptySourceRect,

    #[error("line pixel size must be finite and non-negative, got {0}")]
    InvalidPixelSize(f32),

    #[error("point index {index} out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },
}
