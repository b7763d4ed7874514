//! Generate command handler
//!
//! Resolves the active point set (uploaded or generated) and writes it in
//! the selected output format.

use crate::cli::input::{resolve_selection, CircleArgs};
use crate::config::Config;
use crate::error::Result;
use crate::format::{available_formats, get_formatter, FormatOptions};
use crate::source::PointsResponse;
use clap::Args;
use std::path::PathBuf;

/// Generate command arguments
#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub circle: CircleArgs,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Axis unit label for headers, e.g. "m"
    #[arg(long)]
    pub units: Option<String>,

    /// Include the coordinate table in text output
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub show_coords: Option<bool>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let config = Config::load()?;
    let (spec, selection) = resolve_selection(&args.circle, &config)?;
    let response = PointsResponse::new(spec, selection);

    let format = args.format.unwrap_or_else(|| config.defaults.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| crate::error::Error::Config(format!("Unknown format: {}", format)))?;

    let options = FormatOptions {
        units: args.units.unwrap_or_else(|| config.defaults.units.clone()),
        show_coords: args.show_coords.unwrap_or(config.defaults.show_coords),
    };
    let output = formatter.format(&response, &options)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path.display());
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
