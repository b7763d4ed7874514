//! Data source resolution
//!
//! This module handles:
//! - Parsing uploaded tabular data (delimited text or spreadsheet binary)
//! - Case-insensitive `x`/`y` column normalization
//! - The upload-versus-generated selection policy

pub mod csv;
pub mod sheet;

use crate::circle::{self, CircleSpec, PointSet};
use crate::constants::columns;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Outcome of resolving an uploaded file
///
/// Exactly one of the three states applies per interaction cycle. An invalid
/// upload carries a human-readable reason and never aborts the cycle; the
/// selection policy decides what happens next.
#[derive(Debug, Clone, PartialEq)]
pub enum Upload {
    /// No file was provided
    Absent,
    /// The file parsed and both coordinate columns were found
    Valid(PointSet),
    /// The file could not be used, with the reason why
    Invalid(String),
}

impl Upload {
    /// Whether this upload yielded usable data
    pub fn is_valid(&self) -> bool {
        matches!(self, Upload::Valid(_))
    }
}

/// Which data source produced the active point set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Points generated from the circle spec
    Generated,
    /// Points taken from an uploaded file
    Uploaded,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generated => write!(f, "generated"),
            Self::Uploaded => write!(f, "uploaded"),
        }
    }
}

/// Parse an uploaded file into a point set
///
/// The format is chosen by file extension: `.csv` for delimited text,
/// `.xlsx` for spreadsheet binary. Parse failures and missing columns are
/// reported as `Upload::Invalid`, never as a panic or a hard error. An empty
/// file with a valid header is a valid zero-row point set.
pub fn resolve(filename: &str, bytes: &[u8]) -> Upload {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let parsed = match extension.as_deref() {
        Some("csv") => csv::parse(bytes),
        Some("xlsx") => sheet::parse(bytes),
        _ => Err(Error::Upload(format!(
            "unsupported file type for '{}' (expected .csv or .xlsx)",
            filename
        ))),
    };

    match parsed {
        Ok(points) => Upload::Valid(points),
        Err(e) => Upload::Invalid(e.to_string()),
    }
}

/// Find the `x` and `y` column indices in a header row
///
/// Matching is case-insensitive after trimming; the caller treats the
/// matched columns as canonical `x`/`y` regardless of original casing.
pub(crate) fn find_xy_columns<'a, I>(headers: I) -> Result<(usize, usize)>
where
    I: Iterator<Item = &'a str>,
{
    let mut x_index = None;
    let mut y_index = None;

    for (i, name) in headers.enumerate() {
        let normalized = name.trim().to_lowercase();
        if normalized == columns::X && x_index.is_none() {
            x_index = Some(i);
        } else if normalized == columns::Y && y_index.is_none() {
            y_index = Some(i);
        }
    }

    match (x_index, y_index) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(Error::Upload(columns::MISSING_COLUMNS_MSG.to_string())),
    }
}

/// The point set selected for the current cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The active point set
    pub points: PointSet,
    /// Where the points came from
    pub source: DataSource,
    /// Warning to surface to the user, if the preferred source was unusable
    pub warning: Option<String>,
}

/// Decide which point set is active for this cycle
///
/// The decision table, reproduced exactly:
/// 1. `prefer_upload` and the upload is valid: use the uploaded points.
/// 2. `prefer_upload` but the upload is invalid or absent: warn and fall
///    back to generated points.
/// 3. `prefer_upload` is false: always use generated points, even when a
///    valid upload exists.
///
/// Uploaded and generated points are never merged.
pub fn select_active(upload: &Upload, prefer_upload: bool, spec: &CircleSpec) -> Selection {
    match (prefer_upload, upload) {
        (true, Upload::Valid(points)) => Selection {
            points: points.clone(),
            source: DataSource::Uploaded,
            warning: None,
        },
        (true, Upload::Invalid(reason)) => Selection {
            points: circle::generate(spec),
            source: DataSource::Generated,
            warning: Some(format!(
                "uploaded data is unusable ({}); using generated points instead",
                reason
            )),
        },
        (true, Upload::Absent) => Selection {
            points: circle::generate(spec),
            source: DataSource::Generated,
            warning: Some(
                "upload preferred but no file was provided; using generated points instead"
                    .to_string(),
            ),
        },
        (false, _) => Selection {
            points: circle::generate(spec),
            source: DataSource::Generated,
            warning: None,
        },
    }
}

/// Full result of one resolve-and-select cycle
///
/// This is what formatters, the plot, and the report consume, and what the
/// HTTP API returns as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    /// Unique id for this cycle
    pub id: Uuid,
    /// When the cycle ran
    pub timestamp: DateTime<Utc>,
    /// Circle parameters used (or that would have been used) for generation
    pub spec: CircleSpec,
    /// Where the active points came from
    pub source: DataSource,
    /// Warning surfaced by the selection policy, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// The active point set
    pub points: PointSet,
}

impl PointsResponse {
    /// Build a response from a spec and a completed selection
    pub fn new(spec: CircleSpec, selection: Selection) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            spec,
            source: selection.source,
            warning: selection.warning,
            points: selection.points,
        }
    }
}
