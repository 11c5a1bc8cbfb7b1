//! Image shape normalization and pixel conversion.

mod element;
mod pixels;
mod shape;

pub use element::ImageElement;
pub use pixels::to_rgb;
pub use shape::{pixel_layout, squeeze_batch, PixelLayout};

use ndarray::{ArrayD, ArrayViewD};

/// Owned image data as stored on an axes: (H, W) or (H, W, C), on the
/// 0-1 float scale.
pub type ImageArray = ArrayD<f32>;

/// Borrowed image data of any rank.
pub type ImageView<'a, A = f32> = ArrayViewD<'a, A>;

/// Rank of a channel-last image that can be shown without reshaping.
pub const DISPLAY_RANK: usize = 3;

/// Number of channels in RGB images.
pub const RGB_CHANNELS: usize = 3;

/// Number of channels in RGBA images.
pub const RGBA_CHANNELS: usize = 4;
