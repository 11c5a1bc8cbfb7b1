//! Draw a [`Figure`] onto a plotters drawing area.

use image::imageops::{self, FilterType};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::element::BitMapElement;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{Error, Result};
use crate::image::to_rgb;

use super::figure::{Axes, Figure};

/// Length of a tick mark in pixels.
const TICK_LENGTH: i32 = 4;

/// Gap between a tick mark and its label in pixels.
const TICK_LABEL_GAP: i32 = 2;

/// Rendering options.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Pixels per inch, used to size the backend from a figure size.
    pub dpi: f64,

    /// Font family for titles and tick labels.
    pub font_family: String,

    /// Title font size in pixels.
    pub title_font_size: u32,

    /// Tick label font size in pixels.
    pub tick_font_size: u32,

    /// Upper bound on ticks drawn per axis.
    pub max_ticks: usize,

    /// Padding around each subplot cell in pixels.
    pub cell_padding: u32,

    /// Figure background as RGB.
    pub background: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: 100.0,
            font_family: "sans-serif".to_string(),
            title_font_size: 18,
            tick_font_size: 11,
            max_ticks: 6,
            cell_padding: 8,
            background: [255, 255, 255],
        }
    }
}

impl RenderConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if !self.dpi.is_finite() || self.dpi <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "dpi".to_string(),
                reason: "must be a positive number".to_string(),
            });
        }

        if self.font_family.is_empty() {
            return Err(Error::InvalidParameter {
                name: "font_family".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.title_font_size == 0 || self.tick_font_size == 0 {
            return Err(Error::InvalidParameter {
                name: "font size".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        if self.max_ticks < 2 {
            return Err(Error::InvalidParameter {
                name: "max_ticks".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }

        Ok(())
    }

    /// Backend size in pixels for `figure` at this resolution.
    #[must_use]
    pub fn backend_size(&self, figure: &Figure) -> (u32, u32) {
        figure.pixel_size(self.dpi)
    }
}

/// Draw every axes of `figure` into its grid cell on `root`.
///
/// The caller owns the backend and decides whether to present it. Cells
/// left with no room after padding, title and tick labels are skipped.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or drawing fails.
pub fn render_figure<DB: DrawingBackend>(
    figure: &Figure,
    root: &DrawingArea<DB, Shift>,
    config: &RenderConfig,
) -> Result<()> {
    config.validate()?;

    let [r, g, b] = config.background;
    root.fill(&RGBColor(r, g, b)).map_err(render_error)?;

    let padding = to_coord(config.cell_padding);

    for axes in figure.axes() {
        let spec = axes.spec();
        let cells = root.split_evenly((spec.rows(), spec.cols()));
        let cell = cells.get(spec.index() - 1).ok_or(Error::InvalidSubplot {
            rows: spec.rows(),
            cols: spec.cols(),
            index: spec.index(),
        })?;

        let cell = cell.margin(padding, padding, padding, padding);
        if usable_size(&cell).is_none() {
            tracing::debug!("Skipping subplot {:?}: no room inside padding", spec.cell());
            continue;
        }

        tracing::debug!("Rendering subplot {:?}", spec.cell());
        render_axes(axes, &cell, config)?;
    }

    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_axes<DB: DrawingBackend>(
    axes: &Axes,
    area: &DrawingArea<DB, Shift>,
    config: &RenderConfig,
) -> Result<()> {
    let area = match axes.title() {
        Some(title) => area
            .titled(title, (config.font_family.as_str(), config.title_font_size))
            .map_err(render_error)?,
        None => area.clone(),
    };

    let gutter = to_coord(config.tick_font_size).saturating_add(TICK_LENGTH + TICK_LABEL_GAP);
    let bottom = if axes.xticks_visible() { gutter } else { 0 };
    let left = if axes.yticks_visible() {
        gutter.saturating_mul(3)
    } else {
        0
    };
    let area = area.margin(0, bottom, left, 0);
    let Some((area_w, area_h)) = usable_size(&area) else {
        tracing::debug!("Skipping subplot {:?}: no room for the image", axes.spec().cell());
        return Ok(());
    };

    let Some(image) = axes.image() else {
        return draw_frame(&area, (0, 0), (area_w, area_h));
    };

    let rgb = to_rgb(&image.view())?;
    let (img_w, img_h) = rgb.dimensions();

    // Keep square pixels, centered in the cell
    let scale = f64::min(
        f64::from(area_w) / f64::from(img_w),
        f64::from(area_h) / f64::from(img_h),
    );
    let draw_w = ((f64::from(img_w) * scale).floor() as u32).clamp(1, area_w);
    let draw_h = ((f64::from(img_h) * scale).floor() as u32).clamp(1, area_h);
    let origin = (
        to_coord((area_w - draw_w) / 2),
        to_coord((area_h - draw_h) / 2),
    );

    let resized = imageops::resize(&rgb, draw_w, draw_h, FilterType::Nearest);
    let bitmap: BitMapElement<'_, (i32, i32)> =
        BitMapElement::with_owned_buffer(origin, (draw_w, draw_h), resized.into_raw())
            .ok_or_else(|| Error::Render("pixel buffer does not match bitmap size".to_string()))?;
    area.draw(&bitmap).map_err(render_error)?;

    draw_frame(&area, origin, (draw_w, draw_h))?;

    let font = (config.font_family.as_str(), config.tick_font_size).into_font();
    let (x0, y0) = origin;
    let y1 = y0.saturating_add(to_coord(draw_h));
    let at = |index: u32| ((f64::from(index) + 0.5) * scale) as i32;

    if axes.xticks_visible() {
        let style = TextStyle::from(font.clone()).pos(Pos::new(HPos::Center, VPos::Top));
        for tick in tick_positions(img_w, config.max_ticks) {
            let x = x0.saturating_add(at(tick));
            area.draw(&PathElement::new(
                vec![(x, y1), (x, y1 + TICK_LENGTH)],
                BLACK.stroke_width(1),
            ))
            .map_err(render_error)?;
            area.draw(&Text::new(
                tick.to_string(),
                (x, y1 + TICK_LENGTH + TICK_LABEL_GAP),
                style.clone(),
            ))
            .map_err(render_error)?;
        }
    }

    if axes.yticks_visible() {
        let style = TextStyle::from(font).pos(Pos::new(HPos::Right, VPos::Center));
        for tick in tick_positions(img_h, config.max_ticks) {
            let y = y0.saturating_add(at(tick));
            area.draw(&PathElement::new(
                vec![(x0 - TICK_LENGTH, y), (x0, y)],
                BLACK.stroke_width(1),
            ))
            .map_err(render_error)?;
            area.draw(&Text::new(
                tick.to_string(),
                (x0 - TICK_LENGTH - TICK_LABEL_GAP, y),
                style.clone(),
            ))
            .map_err(render_error)?;
        }
    }

    Ok(())
}

fn draw_frame<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    (x, y): (i32, i32),
    (w, h): (u32, u32),
) -> Result<()> {
    area.draw(&Rectangle::new(
        [
            (x - 1, y - 1),
            (x.saturating_add(to_coord(w)), y.saturating_add(to_coord(h))),
        ],
        BLACK.stroke_width(1),
    ))
    .map_err(render_error)
}

/// Pixel extent of `area`, or `None` once margins have used it all up.
fn usable_size<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>) -> Option<(u32, u32)> {
    let (x, y) = area.get_pixel_range();
    let width = u32::try_from(i64::from(x.end) - i64::from(x.start)).ok()?;
    let height = u32::try_from(i64::from(y.end) - i64::from(y.start)).ok()?;
    (width > 0 && height > 0).then_some((width, height))
}

fn to_coord(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Pixel indices in `0..len` to label, stepping by 1, 2 or 5 times a
/// power of ten so that at most `max_ticks` are produced.
#[must_use]
pub fn tick_positions(len: u32, max_ticks: usize) -> Vec<u32> {
    if len == 0 {
        return Vec::new();
    }

    let max_ticks = u32::try_from(max_ticks.max(1)).unwrap_or(u32::MAX);
    let mut magnitude: u32 = 1;
    let step = 'search: loop {
        for factor in [1_u32, 2, 5] {
            let step = factor.saturating_mul(magnitude);
            if (len - 1) / step + 1 <= max_ticks {
                break 'search step;
            }
        }
        magnitude = magnitude.saturating_mul(10);
        if magnitude == u32::MAX {
            break len;
        }
    };

    (0..len).step_by(step as usize).collect()
}

fn render_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> Error {
    Error::Render(err.to_string())
}
