// Excel import (first worksheet only)

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::TableError;
use crate::table::RawTable;

/// Read the first worksheet of a spreadsheet. The first non-empty row is the
/// header; every cell below it is rendered as text.
///
/// # Errors
///
/// Returns [`TableError::Spreadsheet`] if the workbook cannot be opened or
/// read, or [`TableError::EmptyWorkbook`] if it has no sheets.
pub fn read_spreadsheet(path: &Path) -> Result<RawTable, TableError> {
    let to_err = |source| TableError::Spreadsheet {
        path: path.display().to_string(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(to_err)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TableError::EmptyWorkbook {
            path: path.display().to_string(),
        })?
        .map_err(to_err)?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>())
        .filter(|row| row.iter().any(|c| !c.trim().is_empty()));

    let headers = rows.next().unwrap_or_default();
    Ok(RawTable::new(headers, rows.collect()))
}

/// Render a cell as text.
///
/// Integral numbers print without a fractional part, so a barcode stored as
/// the number `5012345678900` reads back as `"5012345678900"` rather than
/// `"5012345678900.0"`.
#[must_use]
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 => format!("{f:.0}"),
        Data::Float(f) => f.to_string(),
        other => other.to_string(),
    }
}
