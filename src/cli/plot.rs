//! Plot command handler
//!
//! Renders the active point set to an SVG or PNG image, chosen by the
//! output file extension.

use crate::cli::input::{resolve_selection, CircleArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::render::{self, PlotOptions};
use clap::Args;
use std::path::PathBuf;

/// Title drawn above the scatter plot
pub(crate) const PLOT_TITLE: &str = "Circle points";

/// Plot command arguments
#[derive(Args)]
pub struct PlotArgs {
    #[command(flatten)]
    pub circle: CircleArgs,

    /// Point color (hex, e.g. "#1f77b4")
    #[arg(long, short = 'c')]
    pub color: Option<String>,

    /// Axis unit label, e.g. "m"
    #[arg(long)]
    pub units: Option<String>,

    /// Draw gridlines
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub grid: Option<bool>,

    /// Mark the circle center
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub show_center: Option<bool>,

    /// Label each point with its index
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub label_indices: Option<bool>,

    /// Square output size in pixels
    #[arg(long)]
    pub size: Option<u32>,

    /// Output image path (.svg or .png)
    #[arg(long, short = 'o', default_value = "points.svg")]
    pub output: PathBuf,
}

impl PlotArgs {
    /// Merge flags over config defaults into plot options
    pub(crate) fn plot_options(&self, config: &Config) -> PlotOptions {
        let defaults = PlotOptions::default();
        PlotOptions {
            color: self
                .color
                .clone()
                .unwrap_or_else(|| config.defaults.color.clone()),
            units: self
                .units
                .clone()
                .unwrap_or_else(|| config.defaults.units.clone()),
            grid: self.grid.unwrap_or(config.defaults.grid),
            show_center: self.show_center.unwrap_or(config.defaults.show_center),
            label_indices: self.label_indices.unwrap_or(config.defaults.label_indices),
            size_px: self.size.unwrap_or(defaults.size_px),
        }
    }
}

/// Run the plot command
pub fn run(args: PlotArgs) -> Result<()> {
    let config = Config::load()?;
    let (spec, selection) = resolve_selection(&args.circle, &config)?;
    let options = args.plot_options(&config);
    let center = options.show_center.then(|| spec.center());

    let extension = args
        .output
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("svg") => {
            let svg = render::render_svg(&selection.points, center, PLOT_TITLE, &options)?;
            std::fs::write(&args.output, svg)?;
        }
        Some("png") => {
            render::render_png(&selection.points, center, PLOT_TITLE, &options, &args.output)?;
        }
        _ => {
            return Err(Error::Render(format!(
                "unsupported image format for '{}' (expected .svg or .png)",
                args.output.display()
            )));
        }
    }

    eprintln!("Plot written to {}", args.output.display());
    Ok(())
}
