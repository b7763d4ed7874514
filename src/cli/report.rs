//! Report command handler
//!
//! Exports the active point set and its parameters as a PDF document.

use crate::cli::input::{resolve_selection, CircleArgs};
use crate::cli::plot::PlotArgs;
use crate::config::Config;
use crate::error::Result;
use crate::report::{build_report, ReportMeta};
use crate::source::PointsResponse;
use clap::Args;
use std::path::PathBuf;

/// Report command arguments
#[derive(Args)]
pub struct ReportArgs {
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

    /// Author name for the report
    #[arg(long)]
    pub author: Option<String>,

    /// Author contact for the report
    #[arg(long)]
    pub contact: Option<String>,

    /// Free-text note for the report
    #[arg(long)]
    pub note: Option<String>,

    /// Output PDF path
    #[arg(long, short = 'o', default_value = "report.pdf")]
    pub output: PathBuf,
}

/// Run the report command
pub fn run(args: ReportArgs) -> Result<()> {
    let config = Config::load()?;
    let (spec, selection) = resolve_selection(&args.circle, &config)?;
    let response = PointsResponse::new(spec, selection);

    // Reuse the plot option merging from the plot command
    let plot_args = PlotArgs {
        circle: args.circle,
        color: args.color,
        units: args.units,
        grid: args.grid,
        show_center: args.show_center,
        label_indices: args.label_indices,
        size: None,
        output: PathBuf::new(),
    };
    let options = plot_args.plot_options(&config);

    let meta = ReportMeta {
        author: args.author.unwrap_or_else(|| config.report.author.clone()),
        contact: args.contact.unwrap_or_else(|| config.report.contact.clone()),
        note: args.note.unwrap_or_else(|| config.report.note.clone()),
    };

    let pdf = build_report(&response, &options, &meta)?;
    std::fs::write(&args.output, pdf)?;

    eprintln!("Report written to {}", args.output.display());
    Ok(())
}
