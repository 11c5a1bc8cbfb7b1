//! # imshow
//!
//! Display `ndarray` images, alone or as a titled row of subplots.
//!
//! Display calls record what to show on an explicit [`PlotContext`]:
//! figures, their subplot axes, images and titles. A figure is turned into
//! pixels with [`render_figure`] on any plotters drawing area, so the caller
//! chooses the backend and whether the result is kept.
//!
//! Batched images of shape `(1, H, W, C)` have the batch axis dropped
//! before display.
//!
//! ## Example
//!
//! ```
//! use imshow::{display_image_row, PlotContext};
//! use ndarray::{Array3, Array4};
//!
//! # fn main() -> imshow::Result<()> {
//! let mut ctx = PlotContext::new();
//!
//! let content = Array3::<f32>::zeros((64, 64, 3)).into_dyn();
//! let style = Array4::<f32>::ones((1, 32, 32, 3)).into_dyn();
//!
//! display_image_row(&mut ctx, &[content, style], &["Content", "Style"])?;
//!
//! let figure = &ctx.figures()[0];
//! assert_eq!(figure.axes().len(), 2);
//! assert_eq!(figure.axes()[1].image().unwrap().shape(), &[32, 32, 3]);
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod image;
pub mod plot;

pub use display::{display_image, display_image_row};
pub use error::{Error, Result};
pub use crate::image::ImageElement;
pub use plot::{render_figure, Axes, Figure, FigureSize, PlotContext, RenderConfig, SubplotSpec};
