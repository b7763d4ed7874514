//! JSON output formatter

use crate::error::Result;
use crate::format::{FormatOptions, OutputFormatter};
use crate::source::PointsResponse;

/// JSON formatter - outputs the full response as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON response"
    }

    fn format(&self, response: &PointsResponse, _options: &FormatOptions) -> Result<String> {
        Ok(serde_json::to_string_pretty(response)?)
    }
}
