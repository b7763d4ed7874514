//! Spreadsheet (xlsx) upload parsing

use crate::circle::{Point, PointSet};
use crate::error::{Error, Result};
use crate::source::find_xy_columns;
use calamine::{Data, DataType, Reader, Xlsx};
use std::io::Cursor;

/// Parse xlsx bytes into a point set
///
/// Reads the first worksheet. The first row is the header; `x` and `y`
/// columns are matched case-insensitively. Rows whose cells are all empty
/// are skipped (trailing blank rows are common in spreadsheets).
pub(crate) fn parse(bytes: &[u8]) -> Result<PointSet> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| Error::Upload(format!("failed to open spreadsheet: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Upload("spreadsheet has no worksheets".to_string()))?
        .map_err(|e| Error::Upload(format!("failed to read worksheet: {}", e)))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| Error::Upload(crate::constants::columns::MISSING_COLUMNS_MSG.to_string()))?;

    let names: Vec<String> = header.iter().map(|cell| cell.to_string()).collect();
    let (x_index, y_index) = find_xy_columns(names.iter().map(|s| s.as_str()))?;

    let mut points = Vec::new();
    for (row_number, row) in rows.enumerate() {
        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        let x = cell_to_f64(row.get(x_index), row_number, "x")?;
        let y = cell_to_f64(row.get(y_index), row_number, "y")?;
        points.push(Point::new(x, y));
    }

    Ok(points)
}

fn cell_to_f64(cell: Option<&Data>, row: usize, column: &str) -> Result<f64> {
    let cell = cell.filter(|c| !c.is_empty()).ok_or_else(|| {
        Error::Upload(format!("row {} has no '{}' value", row + 2, column))
    })?;

    // Numeric cells first; fall back to parsing string cells
    cell.as_f64()
        .or_else(|| cell.to_string().trim().parse().ok())
        .ok_or_else(|| {
            Error::Upload(format!(
                "row {}: '{}' is not a number in column '{}'",
                row + 2,
                cell,
                column
            ))
        })
}
