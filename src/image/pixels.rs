//! Conversion from image arrays to RGB pixel buffers.

use image::{Rgb, RgbImage};
use ndarray::{ArrayView3, ArrayViewD, Axis, Ix3};

use crate::error::{Error, Result};

use super::shape::{pixel_layout, PixelLayout};

/// Convert a displayable image array to an 8-bit RGB buffer.
///
/// - RGB data is expected in [0, 1] and clipped to it.
/// - RGBA data is composited over a white background.
/// - Gray data is stretched from its own min/max to [0, 255]; a constant
///   image maps to black.
///
/// # Errors
///
/// Returns an error if the image shape cannot be displayed.
pub fn to_rgb(image: &ArrayViewD<'_, f32>) -> Result<RgbImage> {
    let layout = pixel_layout(image)?;

    let image = if image.ndim() == 2 {
        image.view().insert_axis(Axis(2))
    } else {
        image.view()
    };
    let image = image
        .into_dimensionality::<Ix3>()
        .map_err(|err| Error::InvalidParameter {
            name: "image".to_string(),
            reason: err.to_string(),
        })?;

    let (height, width, _) = image.dim();
    let mut out = RgbImage::new(pixel_dim(width)?, pixel_dim(height)?);

    match layout {
        PixelLayout::Gray => fill_gray(&image, &mut out),
        PixelLayout::Rgb | PixelLayout::Rgba => {
            if image.iter().any(|&v| !(0.0..=1.0).contains(&v) && !v.is_nan()) {
                tracing::warn!("Clipping input data to the valid range [0, 1] for RGB(A) display");
            }
            fill_color(&image, layout == PixelLayout::Rgba, &mut out);
        }
    }

    Ok(out)
}

fn pixel_dim(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::InvalidParameter {
        name: "image".to_string(),
        reason: format!("dimension {len} does not fit a pixel buffer"),
    })
}

#[allow(clippy::cast_possible_truncation)]
fn fill_gray(image: &ArrayView3<'_, f32>, out: &mut RgbImage) {
    let (min, max) = image
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let range = max - min;

    for ((y, x, _), &value) in image.indexed_iter() {
        let level = if range > 0.0 { (value - min) / range } else { 0.0 };
        let v = unit_to_u8(level);
        // Safe: coordinates are bounded by the buffer size checked in `to_rgb`
        out.put_pixel(x as u32, y as u32, Rgb([v, v, v]));
    }
}

#[allow(clippy::cast_possible_truncation)]
fn fill_color(image: &ArrayView3<'_, f32>, has_alpha: bool, out: &mut RgbImage) {
    let (height, width, _) = image.dim();

    for y in 0..height {
        for x in 0..width {
            let alpha = if has_alpha {
                image[[y, x, 3]].clamp(0.0, 1.0)
            } else {
                1.0
            };
            let channel = |c: usize| {
                let value = image[[y, x, c]].clamp(0.0, 1.0);
                unit_to_u8(value.mul_add(alpha, 1.0 - alpha))
            };
            // Safe: coordinates are bounded by the buffer size checked in `to_rgb`
            out.put_pixel(x as u32, y as u32, Rgb([channel(0), channel(1), channel(2)]));
        }
    }
}

/// Map a value in [0, 1] to [0, 255] with clamping. NaN maps to 0.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(value: f32) -> u8 {
    // Safe: clamped to [0, 255] range before casting
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
