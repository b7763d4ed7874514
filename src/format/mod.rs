//! Output formatters
//!
//! Provides trait-based output formatting for the active point set.

pub mod csv;
pub mod json;
pub mod text;

use crate::error::Result;
use crate::source::PointsResponse;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Presentation options shared by formatters
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Axis unit label, e.g. "m"; empty for no unit annotation
    pub units: String,
    /// Whether the text formatter includes the coordinate table
    pub show_coords: bool,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format the response
    fn format(&self, response: &PointsResponse, options: &FormatOptions) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "csv" => Some(Box::new(csv::CsvFormatter)),
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "csv".to_string(),
            description: "Delimited coordinate rows".to_string(),
        },
        FormatInfo {
            name: "json".to_string(),
            description: "Full JSON response".to_string(),
        },
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable summary".to_string(),
        },
    ]
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::circle::CircleSpec;
    use crate::source::{select_active, PointsResponse, Upload};

    pub fn create_test_response() -> PointsResponse {
        let spec = CircleSpec::new(0.0, 0.0, 1.0, 4);
        let selection = select_active(&Upload::Absent, false, &spec);
        PointsResponse::new(spec, selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("csv").is_some());
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("text").is_some());
        assert!(get_formatter("unknown").is_none());
    }

    #[test]
    fn test_get_formatter_case_insensitive() {
        assert!(get_formatter("CSV").is_some());
        assert!(get_formatter("Json").is_some());
        assert!(get_formatter("TEXT").is_some());
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert_eq!(formats.len(), 3);
        assert!(formats.iter().any(|f| f.name == "csv"));
        assert!(formats.iter().any(|f| f.name == "json"));
        assert!(formats.iter().any(|f| f.name == "text"));
    }
}
