//! Shape checks applied before an image is displayed.

use ndarray::{ArrayViewD, Axis};

use crate::error::{Error, Result};

use super::{DISPLAY_RANK, RGBA_CHANNELS, RGB_CHANNELS};

/// How the trailing axis of a displayable image is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    /// (H, W) or (H, W, 1): scalar data, min/max normalized.
    Gray,
    /// (H, W, 3): RGB in [0, 1].
    Rgb,
    /// (H, W, 4): RGBA in [0, 1].
    Rgba,
}

/// Drop a leading batch axis from an image of rank greater than 3.
///
/// Images of rank 3 or less are returned untouched. Otherwise exactly one
/// leading axis is removed, which must have length 1.
///
/// # Errors
///
/// Returns [`Error::BatchNotSqueezable`] if the leading axis is not of
/// length 1.
pub fn squeeze_batch<A>(image: ArrayViewD<'_, A>) -> Result<ArrayViewD<'_, A>> {
    if image.ndim() <= DISPLAY_RANK {
        return Ok(image);
    }

    let len = image.len_of(Axis(0));
    if len != 1 {
        return Err(Error::BatchNotSqueezable {
            len,
            shape: image.shape().to_vec(),
        });
    }

    Ok(image.index_axis_move(Axis(0), 0))
}

/// Classify an image shape, rejecting shapes that cannot be shown.
///
/// # Errors
///
/// Returns an error for ranks other than 2 or 3, channel counts other
/// than 1, 3 or 4, and images with zero height or width.
pub fn pixel_layout<A>(image: &ArrayViewD<'_, A>) -> Result<PixelLayout> {
    let shape = image.shape();

    let layout = match shape.len() {
        2 => PixelLayout::Gray,
        3 => match shape[2] {
            1 => PixelLayout::Gray,
            RGB_CHANNELS => PixelLayout::Rgb,
            RGBA_CHANNELS => PixelLayout::Rgba,
            channels => return Err(Error::UnsupportedChannels { channels }),
        },
        rank => {
            return Err(Error::UnsupportedRank {
                rank,
                shape: shape.to_vec(),
            })
        }
    };

    if shape[0] == 0 || shape[1] == 0 {
        return Err(Error::EmptyImage {
            shape: shape.to_vec(),
        });
    }

    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{ArrayD, IxDyn};

    fn zeros(shape: &[usize]) -> ArrayD<f32> {
        ArrayD::zeros(IxDyn(shape))
    }

    #[test]
    fn test_rank3_is_untouched() {
        let img = zeros(&[3, 3, 3]);
        let out = squeeze_batch(img.view()).unwrap();
        assert_eq!(out.shape(), &[3, 3, 3]);
    }

    #[test]
    fn test_leading_batch_is_dropped() {
        let mut img = zeros(&[1, 4, 5, 3]);
        img[[0, 2, 1, 0]] = 0.5;

        let out = squeeze_batch(img.view()).unwrap();

        assert_eq!(out.shape(), &[4, 5, 3]);
        assert!((out[[2, 1, 0]] - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_batch_of_two_is_rejected() {
        let img = zeros(&[2, 3, 3, 3]);
        match squeeze_batch(img.view()) {
            Err(Error::BatchNotSqueezable { len, shape }) => {
                assert_eq!(len, 2);
                assert_eq!(shape, vec![2, 3, 3, 3]);
            }
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn test_only_one_axis_is_squeezed() {
        let img = zeros(&[1, 1, 2, 2, 3]);
        let out = squeeze_batch(img.view()).unwrap();
        assert_eq!(out.shape(), &[1, 2, 2, 3]);
    }

    #[test]
    fn test_layouts() {
        assert_eq!(pixel_layout(&zeros(&[2, 2]).view()).unwrap(), PixelLayout::Gray);
        assert_eq!(pixel_layout(&zeros(&[2, 2, 1]).view()).unwrap(), PixelLayout::Gray);
        assert_eq!(pixel_layout(&zeros(&[2, 2, 3]).view()).unwrap(), PixelLayout::Rgb);
        assert_eq!(pixel_layout(&zeros(&[2, 2, 4]).view()).unwrap(), PixelLayout::Rgba);
    }

    #[test]
    fn test_layout_rejects_bad_shapes() {
        assert!(matches!(
            pixel_layout(&zeros(&[2, 2, 2]).view()),
            Err(Error::UnsupportedChannels { channels: 2 })
        ));
        assert!(matches!(
            pixel_layout(&zeros(&[4]).view()),
            Err(Error::UnsupportedRank { rank: 1, .. })
        ));
        assert!(matches!(
            pixel_layout(&zeros(&[0, 4, 3]).view()),
            Err(Error::EmptyImage { .. })
        ));
    }
}
