//! Shared input handling for the generate/plot/report subcommands
//!
//! Flags override config defaults; validation happens here, at the input
//! boundary, before any generation or rendering runs.

use crate::circle::CircleSpec;
use crate::config::Config;
use crate::error::Result;
use crate::source::{self, Selection, Upload};
use clap::Args;
use std::path::PathBuf;

/// Circle and upload arguments shared by generate/plot/report
#[derive(Args, Debug)]
pub struct CircleArgs {
    /// Circle center x
    #[arg(long, short = 'x')]
    pub center_x: Option<f64>,

    /// Circle center y
    #[arg(long, short = 'y')]
    pub center_y: Option<f64>,

    /// Circle radius
    #[arg(long, short = 'r')]
    pub radius: Option<f64>,

    /// Number of points on the circle
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Tabular file with x,y columns (.csv or .xlsx)
    #[arg(long, short = 'u')]
    pub upload: Option<PathBuf>,

    /// Prefer uploaded data over generated points
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub prefer_upload: Option<bool>,
}

impl CircleArgs {
    /// Build the circle spec from flags and config defaults, validated
    pub fn spec(&self, config: &Config) -> Result<CircleSpec> {
        let spec = CircleSpec::new(
            self.center_x.unwrap_or(config.defaults.center_x),
            self.center_y.unwrap_or(config.defaults.center_y),
            self.radius.unwrap_or(config.defaults.radius),
            self.count.unwrap_or(config.defaults.count),
        );
        spec.validate()?;
        Ok(spec)
    }
}

/// Resolve the upload (if any) and select the active point set
///
/// Warnings from the selection policy and upload parse errors go to stderr
/// so they never mix with formatted output on stdout.
pub fn resolve_selection(args: &CircleArgs, config: &Config) -> Result<(CircleSpec, Selection)> {
    let spec = args.spec(config)?;

    let upload = match &args.upload {
        Some(path) => {
            let bytes = std::fs::read(path)?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            source::resolve(&name, &bytes)
        }
        None => Upload::Absent,
    };

    let prefer_upload = args.prefer_upload.unwrap_or(config.defaults.prefer_upload);

    if let Upload::Invalid(reason) = &upload {
        if !prefer_upload {
            eprintln!("Upload error: {}", reason);
        }
    }

    let selection = source::select_active(&upload, prefer_upload, &spec);
    if let Some(warning) = &selection.warning {
        eprintln!("Warning: {}", warning);
    }

    Ok((spec, selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DataSource;
    use std::io::Write;

    fn args() -> CircleArgs {
        CircleArgs {
            center_x: None,
            center_y: None,
            radius: None,
            count: Some(6),
            upload: None,
            prefer_upload: None,
        }
    }

    #[test]
    fn test_spec_uses_config_defaults() {
        let config = Config::default();
        let spec = args().spec(&config).unwrap();

        assert_eq!(spec.center_x, config.defaults.center_x);
        assert_eq!(spec.radius, config.defaults.radius);
        assert_eq!(spec.count, 6);
    }

    #[test]
    fn test_spec_rejects_invalid_flag() {
        let config = Config::default();
        let mut invalid = args();
        invalid.radius = Some(-2.0);
        assert!(invalid.spec(&config).is_err());
    }

    #[test]
    fn test_resolve_selection_without_upload() {
        let config = Config::default();
        let (spec, selection) = resolve_selection(&args(), &config).unwrap();

        assert_eq!(selection.source, DataSource::Generated);
        assert_eq!(selection.points.len(), spec.count);
    }

    #[test]
    fn test_resolve_selection_with_uploaded_file() {
        let config = Config::default();
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"X,Y\n1.0,2.0\n").unwrap();

        let mut with_upload = args();
        with_upload.upload = Some(file.path().to_path_buf());
        with_upload.prefer_upload = Some(true);

        let (_, selection) = resolve_selection(&with_upload, &config).unwrap();
        assert_eq!(selection.source, DataSource::Uploaded);
        assert_eq!(selection.points.len(), 1);
    }

    #[test]
    fn test_resolve_selection_invalid_upload_falls_back() {
        let config = Config::default();
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"a,b\n1.0,2.0\n").unwrap();

        let mut with_upload = args();
        with_upload.upload = Some(file.path().to_path_buf());
        with_upload.prefer_upload = Some(true);

        let (spec, selection) = resolve_selection(&with_upload, &config).unwrap();
        assert_eq!(selection.source, DataSource::Generated);
        assert_eq!(selection.points.len(), spec.count);
        assert!(selection.warning.is_some());
    }
}
