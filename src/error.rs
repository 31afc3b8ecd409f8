//! Configuration errors.

use thiserror::Error;

/// Errors raised while building a picker from its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("item height must be positive, got {0}")]
    ItemHeight(i32),

    #[error("frame size must be positive, got {width}x{height}")]
    FrameSize { width: i32, height: i32 },

    #[error("{rows} rows of {item_height} px do not fit in the scroll range")]
    StripTooTall { rows: usize, item_height: i32 },

    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ImageSize { width: u32, height: u32 },

    #[error("image buffer holds {actual} bytes, expected {expected} for RGBA8")]
    ImageBuffer { expected: usize, actual: usize },
}
