//! Custom error types for imshow.

use thiserror::Error;

/// Main error type for the imshow library.
#[derive(Error, Debug)]
pub enum Error {
    /// Images and titles passed to a row display differ in length.
    #[error("titles are not complete, got {titles:?} for {images} image(s)")]
    TitleCountMismatch { images: usize, titles: Vec<String> },

    /// A leading batch axis could not be squeezed away.
    #[error("cannot squeeze leading axis of length {len} from image of shape {shape:?}")]
    BatchNotSqueezable { len: usize, shape: Vec<usize> },

    /// Image rank cannot be displayed.
    #[error("unsupported image rank {rank} (shape {shape:?}): expected (H, W) or (H, W, C)")]
    UnsupportedRank { rank: usize, shape: Vec<usize> },

    /// Channel count cannot be displayed.
    #[error("unsupported channel count {channels}: expected 1, 3 or 4")]
    UnsupportedChannels { channels: usize },

    /// Image has no pixels.
    #[error("image of shape {shape:?} has no pixels")]
    EmptyImage { shape: Vec<usize> },

    /// Subplot position outside its grid.
    #[error(
        "invalid subplot ({rows}, {cols}, {index}): index out of range for a {rows}x{cols} grid"
    )]
    InvalidSubplot {
        rows: usize,
        cols: usize,
        index: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Drawing backend failure.
    #[error("rendering failed: {0}")]
    Render(String),
}

/// Result type alias for imshow operations.
pub type Result<T> = std::result::Result<T, Error>;
