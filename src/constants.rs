//! Centralized constants for the roundel crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Point count limits
pub mod limits {
    /// Minimum number of generated points
    pub const MIN_POINTS: usize = 1;

    /// Maximum number of generated points (keeps plotting and PDF export responsive)
    pub const MAX_POINTS: usize = 5000;
}

/// Canonical column names expected in uploaded tabular data
pub mod columns {
    /// Canonical name for the x coordinate column
    pub const X: &str = "x";

    /// Canonical name for the y coordinate column
    pub const Y: &str = "y";

    /// User-facing message when neither column can be matched
    pub const MISSING_COLUMNS_MSG: &str =
        "file must contain 'x' and 'y' columns (column names are matched case-insensitively)";
}

/// Plot rendering defaults
pub mod plot {
    /// Default square plot size in pixels
    pub const DEFAULT_SIZE_PX: u32 = 800;

    /// Default point color (matplotlib tab10 blue)
    pub const DEFAULT_COLOR: &str = "#1f77b4";
}
