//! Default configuration values
//!
//! Centralized so serde defaults and `Config::default()` stay in sync.

use crate::constants::plot;

/// Application directory name under the XDG config dir
pub const APP_DIR_NAME: &str = "roundel";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default circle center x
pub const DEFAULT_CENTER_X: f64 = 0.0;

/// Default circle center y
pub const DEFAULT_CENTER_Y: f64 = 0.0;

/// Default circle radius
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default point count
pub const DEFAULT_COUNT: usize = 100;

/// Default point color
pub const DEFAULT_COLOR: &str = plot::DEFAULT_COLOR;

/// Default axis unit label
pub const DEFAULT_UNITS: &str = "m";

/// Default gridline toggle
pub const DEFAULT_GRID: bool = true;

/// Default coordinate-table toggle
pub const DEFAULT_SHOW_COORDS: bool = true;

/// Default center-marker toggle
pub const DEFAULT_SHOW_CENTER: bool = false;

/// Default per-point index label toggle
pub const DEFAULT_LABEL_INDICES: bool = false;

/// Default upload-preference toggle
pub const DEFAULT_PREFER_UPLOAD: bool = false;

/// Default output format
pub const DEFAULT_FORMAT: &str = "csv";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7878;
