//! Scatter plot rendering
//!
//! Renders the active point set as an equal-aspect 2D scatter plot, to SVG
//! (in memory, for the HTTP API) or PNG (to a file, for the CLI).

use crate::circle::{Point, PointSet};
use crate::constants::plot;
use crate::error::{Error, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Options controlling plot appearance
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Point color as a hex string, e.g. "#1f77b4"
    pub color: String,
    /// Axis unit label, e.g. "m"; empty for bare axis names
    pub units: String,
    /// Draw gridlines
    pub grid: bool,
    /// Mark the circle center
    pub show_center: bool,
    /// Label each point with its index
    pub label_indices: bool,
    /// Square output size in pixels
    pub size_px: u32,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            color: plot::DEFAULT_COLOR.to_string(),
            units: String::new(),
            grid: true,
            show_center: false,
            label_indices: false,
            size_px: plot::DEFAULT_SIZE_PX,
        }
    }
}

/// Parse a "#rrggbb" hex color
pub fn parse_color(hex: &str) -> Result<RGBColor> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::Render(format!(
            "invalid color '{}' (expected #rrggbb)",
            hex
        )));
    }

    let parse = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
    Ok(RGBColor(
        parse(&digits[0..2]),
        parse(&digits[2..4]),
        parse(&digits[4..6]),
    ))
}

/// Equal-aspect axis ranges covering the points (and center, if shown)
///
/// Pads the data extent by 10% on the longer side and applies the same span
/// to both axes. An empty point set falls back to a unit box so that
/// zero-point renders still produce a well-formed plot.
pub(crate) fn plot_bounds(points: &PointSet, center: Option<Point>) -> (Range<f64>, Range<f64>) {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for point in points.iter().chain(center.as_ref()) {
        min_x = min_x.min(point.x);
        max_x = max_x.max(point.x);
        min_y = min_y.min(point.y);
        max_y = max_y.max(point.y);
    }

    if !min_x.is_finite() {
        let origin = center.unwrap_or(Point::new(0.0, 0.0));
        min_x = origin.x - 1.0;
        max_x = origin.x + 1.0;
        min_y = origin.y - 1.0;
        max_y = origin.y + 1.0;
    }

    let mid_x = (min_x + max_x) / 2.0;
    let mid_y = (min_y + max_y) / 2.0;
    // Guard against a degenerate span (single or coincident points)
    let half = ((max_x - min_x).max(max_y - min_y) * 1.1 / 2.0).max(0.5);

    (mid_x - half..mid_x + half, mid_y - half..mid_y + half)
}

/// Render the point set to an SVG string
pub fn render_svg(
    points: &PointSet,
    center: Option<Point>,
    title: &str,
    options: &PlotOptions,
) -> Result<String> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (options.size_px, options.size_px))
            .into_drawing_area();
        draw_scatter(&root, points, center, title, options)?;
        root.present().map_err(|e| Error::Render(e.to_string()))?;
    }
    Ok(buffer)
}

/// Render the point set to a PNG file
pub fn render_png(
    points: &PointSet,
    center: Option<Point>,
    title: &str,
    options: &PlotOptions,
    path: &Path,
) -> Result<()> {
    let root =
        BitMapBackend::new(path, (options.size_px, options.size_px)).into_drawing_area();
    draw_scatter(&root, points, center, title, options)?;
    root.present().map_err(|e| Error::Render(e.to_string()))?;
    Ok(())
}

fn draw_scatter<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    points: &PointSet,
    center: Option<Point>,
    title: &str,
    options: &PlotOptions,
) -> Result<()> {
    let color = parse_color(&options.color)?;
    let (x_range, y_range) = plot_bounds(points, center);

    root.fill(&WHITE).map_err(|e| Error::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| Error::Render(e.to_string()))?;

    let axis_label = |name: &str| {
        if options.units.is_empty() {
            name.to_string()
        } else {
            format!("{} ({})", name, options.units)
        }
    };

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(axis_label("x"))
        .y_desc(axis_label("y"))
        .axis_desc_style(("sans-serif", 16));
    if !options.grid {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(|e| Error::Render(e.to_string()))?;

    chart
        .draw_series(
            points
                .iter()
                .map(|p| Circle::new((p.x, p.y), 3, color.filled())),
        )
        .map_err(|e| Error::Render(e.to_string()))?;

    if let Some(c) = center {
        chart
            .draw_series(std::iter::once(Cross::new(
                (c.x, c.y),
                6,
                BLACK.stroke_width(2),
            )))
            .map_err(|e| Error::Render(e.to_string()))?;
    }

    if options.label_indices {
        chart
            .draw_series(points.iter().enumerate().map(|(i, p)| {
                Text::new(i.to_string(), (p.x, p.y), ("sans-serif", 12))
            }))
            .map_err(|e| Error::Render(e.to_string()))?;
    }

    Ok(())
}
