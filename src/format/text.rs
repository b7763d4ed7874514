//! Human-readable text output formatter

use crate::error::Result;
use crate::format::{FormatOptions, OutputFormatter};
use crate::source::PointsResponse;

/// Text formatter - outputs a summary and an optional coordinate table
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable summary"
    }

    fn format(&self, response: &PointsResponse, options: &FormatOptions) -> Result<String> {
        let mut output = String::new();
        let unit_suffix = if options.units.is_empty() {
            String::new()
        } else {
            format!(" {}", options.units)
        };

        // Header
        output.push_str(&format!("roundel point set ({})\n", response.id));
        output.push_str(&format!(
            "Center: ({:.4}, {:.4}){}\n",
            response.spec.center_x, response.spec.center_y, unit_suffix
        ));
        output.push_str(&format!(
            "Radius: {:.4}{}\n",
            response.spec.radius, unit_suffix
        ));
        output.push_str(&format!("Source: {}\n", response.source));
        output.push_str(&format!("Points: {}\n", response.points.len()));

        if let Some(warning) = &response.warning {
            output.push_str(&format!("Warning: {}\n", warning));
        }

        // Coordinate table
        if options.show_coords {
            output.push_str("\nCoordinates:\n");
            if response.points.is_empty() {
                output.push_str("  (none)\n");
            }
            for (i, point) in response.points.iter().enumerate() {
                output.push_str(&format!("  {:>5}  {:>12.6}  {:>12.6}\n", i, point.x, point.y));
            }
        }

        Ok(output)
    }
}
