//! The plotting context: every figure created through it and which one is
//! current.

use crate::error::Result;

use super::figure::{Axes, Figure, FigureSize, SubplotSpec};

/// Explicit plotting state handed to the display functions.
///
/// Holds figures in creation order. Drawing calls without an explicit
/// target go to the current figure and its current axes, which are
/// created on first use.
#[derive(Debug, Default)]
pub struct PlotContext {
    figures: Vec<Figure>,
    current: Option<usize>,
}

impl PlotContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All figures, oldest first.
    #[must_use]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// The current figure, if any has been created.
    #[must_use]
    pub fn active_figure(&self) -> Option<&Figure> {
        self.current.map(|index| &self.figures[index])
    }

    /// Create a figure and make it current.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is not positive.
    pub fn new_figure(&mut self, size: FigureSize) -> Result<&mut Figure> {
        size.validate()?;
        Ok(self.push_figure(size))
    }

    /// The current figure, creating a default-sized one if needed.
    pub fn current_figure(&mut self) -> &mut Figure {
        match self.current {
            Some(index) => &mut self.figures[index],
            None => self.push_figure(FigureSize::DEFAULT),
        }
    }

    /// The current axes of the current figure.
    pub fn current_axes(&mut self) -> &mut Axes {
        self.current_figure().current_axes()
    }

    /// Select subplot `index` of a `rows x cols` grid on the current figure.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is outside the grid.
    pub fn subplot(&mut self, rows: usize, cols: usize, index: usize) -> Result<&mut Axes> {
        let spec = SubplotSpec::new(rows, cols, index)?;
        tracing::debug!("Selecting subplot ({rows}, {cols}, {index})");
        Ok(self.current_figure().subplot(spec))
    }

    fn push_figure(&mut self, size: FigureSize) -> &mut Figure {
        tracing::debug!(
            "Creating figure {} ({}x{} in)",
            self.figures.len() + 1,
            size.width,
            size.height
        );
        self.figures.push(Figure::new(size));
        let index = self.figures.len() - 1;
        self.current = Some(index);
        &mut self.figures[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_starts_empty() {
        let ctx = PlotContext::new();
        assert!(ctx.figures().is_empty());
        assert!(ctx.active_figure().is_none());
    }

    #[test]
    fn test_current_axes_creates_default_figure() {
        let mut ctx = PlotContext::new();
        ctx.current_axes().set_title("x");

        assert_eq!(ctx.figures().len(), 1);
        let fig = ctx.active_figure().unwrap();
        assert_eq!(fig.size(), FigureSize::DEFAULT);
        assert_eq!(fig.axes()[0].title(), Some("x"));
    }

    #[test]
    fn test_new_figure_becomes_current() {
        let mut ctx = PlotContext::new();
        ctx.current_axes();
        ctx.new_figure(FigureSize::ROW).unwrap();
        ctx.subplot(1, 2, 2).unwrap();

        assert_eq!(ctx.figures().len(), 2);
        assert!(ctx.figures()[1].size() == FigureSize::ROW);
        assert_eq!(ctx.figures()[1].axes().len(), 1);
        assert_eq!(ctx.figures()[0].axes().len(), 1);
    }

    #[test]
    fn test_invalid_subplot() {
        let mut ctx = PlotContext::new();
        assert!(matches!(
            ctx.subplot(1, 2, 3),
            Err(Error::InvalidSubplot { rows: 1, cols: 2, index: 3 })
        ));
    }

    #[test]
    fn test_invalid_figure_size() {
        let mut ctx = PlotContext::new();
        assert!(ctx.new_figure(FigureSize::new(-1.0, 2.0)).is_err());
        assert!(ctx.figures().is_empty());
    }
}
