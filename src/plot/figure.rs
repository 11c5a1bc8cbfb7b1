//! Figures and the subplot axes they hold.

use crate::error::{Error, Result};
use crate::image::{pixel_layout, ImageArray, ImageElement, ImageView};

/// Figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    /// Size of a figure created implicitly.
    pub const DEFAULT: Self = Self::new(6.4, 4.8);

    /// Size of the figure created for a row of images.
    pub const ROW: Self = Self::new(20.0, 12.0);

    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Validate the size.
    ///
    /// # Errors
    ///
    /// Returns an error if either side is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidParameter {
                    name: format!("figure {name}"),
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Backend size in pixels at the given resolution, at least 1x1.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixel_size(&self, dpi: f64) -> (u32, u32) {
        let px = |inches: f64| (inches * dpi).round().clamp(1.0, f64::from(u32::MAX)) as u32;
        (px(self.width), px(self.height))
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Position of a subplot in a `rows x cols` grid, with a 1-based index
/// counted row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubplotSpec {
    rows: usize,
    cols: usize,
    index: usize,
}

impl SubplotSpec {
    /// The single cell of a 1x1 grid.
    pub const SINGLE: Self = Self {
        rows: 1,
        cols: 1,
        index: 1,
    };

    /// Create a subplot position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSubplot`] if the grid is empty or `index`
    /// is outside `1..=rows * cols`.
    pub fn new(rows: usize, cols: usize, index: usize) -> Result<Self> {
        if rows == 0 || cols == 0 || index == 0 || index > rows.saturating_mul(cols) {
            return Err(Error::InvalidSubplot { rows, cols, index });
        }
        Ok(Self { rows, cols, index })
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Zero-based `(row, col)` of the cell.
    #[must_use]
    pub const fn cell(&self) -> (usize, usize) {
        ((self.index - 1) / self.cols, (self.index - 1) % self.cols)
    }
}

/// One subplot: an optional image, an optional title and tick visibility.
#[derive(Debug, Clone)]
pub struct Axes {
    spec: SubplotSpec,
    image: Option<ImageArray>,
    title: Option<String>,
    xticks_visible: bool,
    yticks_visible: bool,
}

impl Axes {
    fn new(spec: SubplotSpec) -> Self {
        Self {
            spec,
            image: None,
            title: None,
            xticks_visible: true,
            yticks_visible: true,
        }
    }

    #[must_use]
    pub const fn spec(&self) -> SubplotSpec {
        self.spec
    }

    /// The displayed image, (H, W) or (H, W, C).
    #[must_use]
    pub fn image(&self) -> Option<&ImageArray> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub const fn xticks_visible(&self) -> bool {
        self.xticks_visible
    }

    #[must_use]
    pub const fn yticks_visible(&self) -> bool {
        self.yticks_visible
    }

    /// Show an image on these axes, replacing any previous one.
    ///
    /// The axes keep their own copy of the data, converted to the 0-1
    /// float scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the image is not (H, W) or (H, W, C) with 1, 3
    /// or 4 channels.
    pub fn imshow<A: ImageElement>(&mut self, image: ImageView<'_, A>) -> Result<()> {
        pixel_layout(&image)?;
        self.image = Some(image.mapv(ImageElement::to_unit));
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_xticks_visible(&mut self, visible: bool) {
        self.xticks_visible = visible;
    }

    pub fn set_yticks_visible(&mut self, visible: bool) {
        self.yticks_visible = visible;
    }

    /// Hide tick marks on both axes.
    pub fn hide_ticks(&mut self) {
        self.set_xticks_visible(false);
        self.set_yticks_visible(false);
    }
}

/// A figure: its size and the axes created on it, in creation order.
#[derive(Debug, Clone)]
pub struct Figure {
    size: FigureSize,
    axes: Vec<Axes>,
    current: Option<usize>,
}

impl Figure {
    #[must_use]
    pub const fn new(size: FigureSize) -> Self {
        Self {
            size,
            axes: Vec::new(),
            current: None,
        }
    }

    #[must_use]
    pub const fn size(&self) -> FigureSize {
        self.size
    }

    #[must_use]
    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    /// Backend size in pixels for this figure at the given resolution.
    #[must_use]
    pub fn pixel_size(&self, dpi: f64) -> (u32, u32) {
        self.size.pixel_size(dpi)
    }

    /// Select the axes at `spec`, creating them if needed, and make them
    /// current.
    pub fn subplot(&mut self, spec: SubplotSpec) -> &mut Axes {
        let index = self.select(spec);
        &mut self.axes[index]
    }

    /// Current axes, creating a 1x1 subplot if the figure has none.
    pub fn current_axes(&mut self) -> &mut Axes {
        let index = match self.current {
            Some(index) => index,
            None => self.select(SubplotSpec::SINGLE),
        };
        &mut self.axes[index]
    }

    fn select(&mut self, spec: SubplotSpec) -> usize {
        let index = if let Some(index) = self.axes.iter().position(|a| a.spec == spec) {
            index
        } else {
            self.axes.push(Axes::new(spec));
            self.axes.len() - 1
        };
        self.current = Some(index);
        index
    }
}
