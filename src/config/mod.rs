//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/roundel/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default values for generation, plotting, and export
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Report metadata
    #[serde(default)]
    pub report: ReportConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Default values for generation, plotting, and export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default circle center x
    #[serde(default = "default_center_x")]
    pub center_x: f64,

    /// Default circle center y
    #[serde(default = "default_center_y")]
    pub center_y: f64,

    /// Default circle radius
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Default point count
    #[serde(default = "default_count")]
    pub count: usize,

    /// Default point color (hex)
    #[serde(default = "default_color")]
    pub color: String,

    /// Default axis unit label
    #[serde(default = "default_units")]
    pub units: String,

    /// Draw gridlines by default
    #[serde(default = "default_grid")]
    pub grid: bool,

    /// Include the coordinate table in text output by default
    #[serde(default = "default_show_coords")]
    pub show_coords: bool,

    /// Mark the circle center by default
    #[serde(default = "default_show_center")]
    pub show_center: bool,

    /// Label points with their index by default
    #[serde(default = "default_label_indices")]
    pub label_indices: bool,

    /// Prefer uploaded data over generated points by default
    #[serde(default = "default_prefer_upload")]
    pub prefer_upload: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// Report metadata (author block printed in the PDF)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    /// Author name
    #[serde(default)]
    pub author: String,

    /// Author contact (email / phone)
    #[serde(default)]
    pub contact: String,

    /// Free-text note included in the PDF
    #[serde(default)]
    pub note: String,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions for serde
fn default_center_x() -> f64 {
    DEFAULT_CENTER_X
}
fn default_center_y() -> f64 {
    DEFAULT_CENTER_Y
}
fn default_radius() -> f64 {
    DEFAULT_RADIUS
}
fn default_count() -> usize {
    DEFAULT_COUNT
}
fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}
fn default_units() -> String {
    DEFAULT_UNITS.to_string()
}
fn default_grid() -> bool {
    DEFAULT_GRID
}
fn default_show_coords() -> bool {
    DEFAULT_SHOW_COORDS
}
fn default_show_center() -> bool {
    DEFAULT_SHOW_CENTER
}
fn default_label_indices() -> bool {
    DEFAULT_LABEL_INDICES
}
fn default_prefer_upload() -> bool {
    DEFAULT_PREFER_UPLOAD
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            center_x: default_center_x(),
            center_y: default_center_y(),
            radius: default_radius(),
            count: default_count(),
            color: default_color(),
            units: default_units(),
            grid: default_grid(),
            show_coords: default_show_coords(),
            show_center: default_show_center(),
            label_indices: default_label_indices(),
            prefer_upload: default_prefer_upload(),
            format: default_format(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            // Create default config
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "center_x"] => Some(self.defaults.center_x.to_string()),
            ["defaults", "center_y"] => Some(self.defaults.center_y.to_string()),
            ["defaults", "radius"] => Some(self.defaults.radius.to_string()),
            ["defaults", "count"] => Some(self.defaults.count.to_string()),
            ["defaults", "color"] => Some(self.defaults.color.clone()),
            ["defaults", "units"] => Some(self.defaults.units.clone()),
            ["defaults", "grid"] => Some(self.defaults.grid.to_string()),
            ["defaults", "show_coords"] => Some(self.defaults.show_coords.to_string()),
            ["defaults", "show_center"] => Some(self.defaults.show_center.to_string()),
            ["defaults", "label_indices"] => Some(self.defaults.label_indices.to_string()),
            ["defaults", "prefer_upload"] => Some(self.defaults.prefer_upload.to_string()),
            ["defaults", "format"] => Some(self.defaults.format.clone()),

            ["report", "author"] => Some(self.report.author.clone()),
            ["report", "contact"] => Some(self.report.contact.clone()),
            ["report", "note"] => Some(self.report.note.clone()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "center_x"] => {
                self.defaults.center_x = parse_value(key, value)?;
            }
            ["defaults", "center_y"] => {
                self.defaults.center_y = parse_value(key, value)?;
            }
            ["defaults", "radius"] => {
                self.defaults.radius = parse_value(key, value)?;
            }
            ["defaults", "count"] => {
                self.defaults.count = parse_value(key, value)?;
            }
            ["defaults", "color"] => {
                self.defaults.color = value.to_string();
            }
            ["defaults", "units"] => {
                self.defaults.units = value.to_string();
            }
            ["defaults", "grid"] => {
                self.defaults.grid = parse_value(key, value)?;
            }
            ["defaults", "show_coords"] => {
                self.defaults.show_coords = parse_value(key, value)?;
            }
            ["defaults", "show_center"] => {
                self.defaults.show_center = parse_value(key, value)?;
            }
            ["defaults", "label_indices"] => {
                self.defaults.label_indices = parse_value(key, value)?;
            }
            ["defaults", "prefer_upload"] => {
                self.defaults.prefer_upload = parse_value(key, value)?;
            }
            ["defaults", "format"] => {
                self.defaults.format = value.to_string();
            }

            ["report", "author"] => {
                self.report.author = value.to_string();
            }
            ["report", "contact"] => {
                self.report.contact = value.to_string();
            }
            ["report", "note"] => {
                self.report.note = value.to_string();
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = parse_value(key, value)?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "defaults.center_x",
            "defaults.center_y",
            "defaults.radius",
            "defaults.count",
            "defaults.color",
            "defaults.units",
            "defaults.grid",
            "defaults.show_coords",
            "defaults.show_center",
            "defaults.label_indices",
            "defaults.prefer_upload",
            "defaults.format",
            "report.author",
            "report.contact",
            "report.note",
            "server.host",
            "server.port",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid value for {}: {}", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    fn with_temp_config<F: FnOnce()>(f: F) {
        let temp_dir = TempDir::new().unwrap();
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        f();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.defaults.center_x, 0.0);
        assert_eq!(config.defaults.radius, 1.0);
        assert_eq!(config.defaults.count, 100);
        assert_eq!(config.defaults.color, "#1f77b4");
        assert_eq!(config.defaults.units, "m");
        assert!(config.defaults.grid);
        assert!(!config.defaults.prefer_upload);
        assert_eq!(config.server.port, 7878);
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("defaults.format"), Some("csv".to_string()));

        config.set("defaults.format", "json").unwrap();
        assert_eq!(config.get("defaults.format"), Some("json".to_string()));

        config.set("defaults.radius", "5").unwrap();
        assert_eq!(config.defaults.radius, 5.0);

        config.set("defaults.prefer_upload", "true").unwrap();
        assert!(config.defaults.prefer_upload);

        config.set("report.author", "Jane Doe").unwrap();
        assert_eq!(config.get("report.author"), Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("defaults.radius", "not_a_number").is_err());
        assert!(config.set("defaults.grid", "maybe").is_err());
        assert!(config.set("server.port", "-1").is_err());
    }

    #[test]
    fn test_save_and_load() {
        with_temp_config(|| {
            let mut config = Config::default();
            config.defaults.count = 42;
            config.report.author = "Jane Doe".to_string();
            config.save().unwrap();

            let loaded = Config::load().unwrap();
            assert_eq!(loaded.defaults.count, 42);
            assert_eq!(loaded.report.author, "Jane Doe");
        });
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.defaults.count, 100);
        assert_eq!(loaded.defaults.color, "#1f77b4");
        assert_eq!(loaded.server.port, 7878);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let loaded: Config = toml::from_str("[defaults]\nradius = 2.5\n").unwrap();
        assert_eq!(loaded.defaults.radius, 2.5);
        assert_eq!(loaded.defaults.count, 100);
        assert_eq!(loaded.server.host, "127.0.0.1");
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        assert!(toml.contains("[defaults]"));
        assert!(toml.contains("[report]"));
        assert!(toml.contains("[server]"));
    }

    #[test]
    fn test_server_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "127.0.0.1:7878");
    }

    #[test]
    fn test_available_keys() {
        let keys = Config::available_keys();
        assert!(keys.contains(&"defaults.radius"));
        assert!(keys.contains(&"report.author"));
        assert!(keys.contains(&"server.port"));
        for key in keys {
            assert!(Config::default().get(key).is_some(), "missing key {}", key);
        }
    }
}
