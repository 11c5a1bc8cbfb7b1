//! Showing images on a [`PlotContext`].

use ndarray::{ArrayBase, Data, Dimension};

use crate::error::{Error, Result};
use crate::image::{squeeze_batch, ImageElement};
use crate::plot::{FigureSize, PlotContext};

/// Display an image, with an optional title, on the current axes of `ctx`.
///
/// Images of rank greater than 3 have their leading batch axis dropped
/// first. Integer data is read on a 0-255 scale and float data on a 0-1
/// scale. An empty title is ignored.
///
/// # Errors
///
/// Returns [`Error::BatchNotSqueezable`] if the leading axis of a batched
/// image is not of length 1, or an error if the remaining shape cannot be
/// displayed.
pub fn display_image<S, D>(
    ctx: &mut PlotContext,
    image: &ArrayBase<S, D>,
    title: Option<&str>,
) -> Result<()>
where
    S: Data,
    S::Elem: ImageElement,
    D: Dimension,
{
    let image = squeeze_batch(image.view().into_dyn())?;
    tracing::debug!("Displaying image of shape {:?}", image.shape());

    let axes = ctx.current_axes();
    axes.imshow(image)?;

    if let Some(title) = title.filter(|t| !t.is_empty()) {
        axes.set_title(title);
    }

    Ok(())
}

/// Display images side by side in a new figure, one titled subplot each.
///
/// Creates a single figure of [`FigureSize::ROW`] holding a `1 x N` grid,
/// filled left to right in input order with ticks hidden.
///
/// # Errors
///
/// Returns [`Error::TitleCountMismatch`] before creating any figure if
/// `images` and `titles` differ in length. Errors from displaying an
/// individual image are returned as is; subplots filled before the
/// failing one remain in the figure.
pub fn display_image_row<S, D, T>(
    ctx: &mut PlotContext,
    images: &[ArrayBase<S, D>],
    titles: &[T],
) -> Result<()>
where
    S: Data,
    S::Elem: ImageElement,
    D: Dimension,
    T: AsRef<str>,
{
    if images.len() != titles.len() {
        return Err(Error::TitleCountMismatch {
            images: images.len(),
            titles: titles.iter().map(|t| t.as_ref().to_string()).collect(),
        });
    }

    let count = images.len();
    tracing::info!("Displaying a row of {count} image(s)");

    ctx.new_figure(FigureSize::ROW)?;

    for (index, (image, title)) in images.iter().zip(titles).enumerate() {
        ctx.subplot(1, count, index + 1)?.hide_ticks();
        display_image(ctx, image, Some(title.as_ref()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3, Array4, ArrayD, IxDyn};

    #[test]
    fn test_display_rank3_unchanged() {
        let mut ctx = PlotContext::new();
        let img = Array3::<f32>::from_elem((3, 4, 3), 0.25);

        display_image(&mut ctx, &img, None).unwrap();

        let axes = &ctx.figures()[0].axes()[0];
        assert_eq!(axes.image().unwrap().shape(), &[3, 4, 3]);
        assert_eq!(axes.title(), None);
    }

    #[test]
    fn test_display_squeezes_batch() {
        let mut ctx = PlotContext::new();
        let img = Array4::<f32>::zeros((1, 4, 4, 3));

        display_image(&mut ctx, &img, Some("batched")).unwrap();

        let axes = &ctx.figures()[0].axes()[0];
        assert_eq!(axes.image().unwrap().shape(), &[4, 4, 3]);
        assert_eq!(axes.title(), Some("batched"));
    }

    #[test]
    fn test_display_u8_batch() {
        let mut ctx = PlotContext::new();
        let img = Array4::<u8>::from_elem((1, 2, 3, 3), 51);

        display_image(&mut ctx, &img, Some("bytes")).unwrap();

        let shown = ctx.figures()[0].axes()[0].image().unwrap();
        assert_eq!(shown.shape(), &[2, 3, 3]);
        assert!(shown.iter().all(|&v| (v - 0.2).abs() < 1e-6));
    }

    #[test]
    fn test_row_of_f64_images() {
        let mut ctx = PlotContext::new();
        let images = vec![Array3::<f64>::from_elem((2, 2, 3), 0.5); 2];

        display_image_row(&mut ctx, &images, &["x", "y"]).unwrap();

        let fig = &ctx.figures()[0];
        assert_eq!(fig.axes().len(), 2);
        assert!((fig.axes()[1].image().unwrap()[[0, 0, 0]] - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_display_rejects_batch_of_two() {
        let mut ctx = PlotContext::new();
        let img = Array4::<f32>::zeros((2, 3, 3, 3));

        let err = display_image(&mut ctx, &img, None).unwrap_err();

        assert!(matches!(err, Error::BatchNotSqueezable { len: 2, .. }));
    }

    #[test]
    fn test_display_ignores_empty_title() {
        let mut ctx = PlotContext::new();
        let img = Array2::<f32>::zeros((2, 2));

        display_image(&mut ctx, &img, Some("")).unwrap();

        assert_eq!(ctx.figures()[0].axes()[0].title(), None);
    }

    #[test]
    fn test_display_keeps_ticks() {
        let mut ctx = PlotContext::new();
        let img = Array2::<f32>::zeros((2, 2));

        display_image(&mut ctx, &img, None).unwrap();

        let axes = &ctx.figures()[0].axes()[0];
        assert!(axes.xticks_visible() && axes.yticks_visible());
    }

    #[test]
    fn test_row_mismatch_creates_no_figure() {
        let mut ctx = PlotContext::new();
        let images = vec![ArrayD::<f32>::zeros(IxDyn(&[3, 3, 3]))];

        let err = display_image_row(&mut ctx, &images, &["A", "B"]).unwrap_err();

        assert!(matches!(err, Error::TitleCountMismatch { images: 1, .. }));
        assert!(ctx.figures().is_empty());
    }

    #[test]
    fn test_row_keeps_earlier_subplots_on_failure() {
        let mut ctx = PlotContext::new();
        let images = vec![
            ArrayD::<f32>::zeros(IxDyn(&[3, 3, 3])),
            ArrayD::<f32>::zeros(IxDyn(&[2, 3, 3, 3])),
            ArrayD::<f32>::zeros(IxDyn(&[3, 3, 3])),
        ];

        let err = display_image_row(&mut ctx, &images, &["a", "b", "c"]).unwrap_err();
        assert!(matches!(err, Error::BatchNotSqueezable { .. }));

        let fig = &ctx.figures()[0];
        assert_eq!(fig.axes().len(), 2);
        assert_eq!(fig.axes()[0].title(), Some("a"));
        assert!(fig.axes()[1].image().is_none());
    }

    #[test]
    fn test_empty_row_creates_empty_figure() {
        let mut ctx = PlotContext::new();
        let images: Vec<Array3<f32>> = Vec::new();
        let titles: [&str; 0] = [];

        display_image_row(&mut ctx, &images, &titles).unwrap();

        assert_eq!(ctx.figures().len(), 1);
        assert!(ctx.figures()[0].axes().is_empty());
    }
}
