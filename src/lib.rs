//! roundel: circle point generator and report exporter
//!
//! A library and CLI tool for generating evenly-spaced points on a circle,
//! visualizing them, and exporting reports.
//!
//! ## Features
//!
//! - Deterministic generation of N evenly-spaced circle points
//! - Uploaded point sets from CSV or XLSX files, with a user-controlled
//!   preference over generated data
//! - CSV / JSON / text export, SVG / PNG plots, PDF report export
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use roundel::circle::{self, CircleSpec};
//!
//! let spec = CircleSpec::new(0.0, 0.0, 1.0, 100);
//! spec.validate().unwrap();
//!
//! let points = circle::generate(&spec);
//! assert_eq!(points.len(), 100);
//! ```

pub mod circle;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod render;
pub mod report;
pub mod server;
pub mod source;

// Re-export commonly used types
pub use circle::{CircleSpec, Point, PointSet};
pub use config::Config;
pub use error::{Error, Result};
pub use source::{DataSource, PointsResponse, Selection, Upload};
