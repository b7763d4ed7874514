//! Delimited-text output formatter

use crate::error::{Error, Result};
use crate::format::{FormatOptions, OutputFormatter};
use crate::source::PointsResponse;

/// CSV formatter - one coordinate row per point
///
/// With no unit label the header is the canonical `x,y`, which round-trips
/// through the upload resolver. A unit label annotates the header as
/// `x (m),y (m)`.
pub struct CsvFormatter;

impl OutputFormatter for CsvFormatter {
    fn name(&self) -> &str {
        "csv"
    }

    fn description(&self) -> &str {
        "Delimited coordinate rows"
    }

    fn format(&self, response: &PointsResponse, options: &FormatOptions) -> Result<String> {
        let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

        let (x_header, y_header) = if options.units.is_empty() {
            ("x".to_string(), "y".to_string())
        } else {
            (
                format!("x ({})", options.units),
                format!("y ({})", options.units),
            )
        };
        writer.write_record([&x_header, &y_header])?;

        for point in &response.points {
            writer.write_record([point.x.to_string(), point.y.to_string()])?;
        }

        let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
        String::from_utf8(bytes)
            .map_err(|e| Error::Render(format!("CSV output was not valid UTF-8: {}", e)))
    }
}
