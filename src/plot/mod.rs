//! Plotting state and rendering.
//!
//! [`PlotContext`] holds figures and their axes as plain data; nothing is
//! drawn until [`render_figure`] is called with a plotters drawing area.

mod context;
mod figure;
mod render;

pub use context::PlotContext;
pub use figure::{Axes, Figure, FigureSize, SubplotSpec};
pub use render::{render_figure, tick_positions, RenderConfig};
