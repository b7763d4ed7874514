//! Delimited-text upload parsing

use crate::circle::{Point, PointSet};
use crate::error::{Error, Result};
use crate::source::find_xy_columns;

/// Parse CSV bytes into a point set
///
/// Expects a header row containing `x` and `y` columns (any casing); other
/// columns are ignored. Rows are kept in file order without deduplication.
pub(crate) fn parse(bytes: &[u8]) -> Result<PointSet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let (x_index, y_index) = find_xy_columns(headers.iter())?;

    let mut points = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let x = parse_cell(record.get(x_index), row, "x")?;
        let y = parse_cell(record.get(y_index), row, "y")?;
        points.push(Point::new(x, y));
    }

    Ok(points)
}

fn parse_cell(cell: Option<&str>, row: usize, column: &str) -> Result<f64> {
    let raw = cell.ok_or_else(|| {
        Error::Upload(format!("row {} has no '{}' value", row + 1, column))
    })?;

    raw.parse().map_err(|_| {
        Error::Upload(format!(
            "row {}: '{}' is not a number in column '{}'",
            row + 1,
            raw,
            column
        ))
    })
}
