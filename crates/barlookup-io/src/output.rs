//! Writing a [`ResolutionResult`] as a one-row table.

use std::path::Path;

use barlookup_core::ResolutionResult;
use rust_xlsxwriter::{Format, Workbook};

use crate::error::TableError;
use crate::format::TableFormat;

/// Write `result` to `path` as a header row plus one data row.
///
/// `.xlsx` paths get a spreadsheet, `.tsv` tab-separated text, everything
/// else CSV. Returns the format written.
///
/// # Errors
///
/// Returns a [`TableError`] if the file cannot be created or written.
pub fn write_result(path: &Path, result: &ResolutionResult) -> Result<TableFormat, TableError> {
    let format = TableFormat::for_output(path);
    match format {
        TableFormat::Spreadsheet => write_spreadsheet(path, result)?,
        TableFormat::Csv => write_delimited(path, result, b',')?,
        TableFormat::Tsv => write_delimited(path, result, b'\t')?,
    }
    tracing::debug!(path = %path.display(), %format, "wrote resolution result");
    Ok(format)
}

fn write_delimited(
    path: &Path,
    result: &ResolutionResult,
    delimiter: u8,
) -> Result<(), TableError> {
    let to_err = |source| TableError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(to_err)?;
    writer.serialize(result).map_err(to_err)?;
    writer.flush().map_err(|source| TableError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn write_spreadsheet(path: &Path, result: &ResolutionResult) -> Result<(), TableError> {
    let to_err = |source| TableError::XlsxWrite {
        path: path.display().to_string(),
        source,
    };

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, (name, value)) in (0u16..).zip(result.fields()) {
        worksheet
            .write_string_with_format(0, col, name, &header)
            .map_err(to_err)?;
        worksheet.write_string(1, col, value).map_err(to_err)?;
    }

    workbook.save(path).map_err(to_err)
}

#[cfg(test)]
mod tests {
    use barlookup_core::Confidence;

    use super::*;

    fn result() -> ResolutionResult {
        ResolutionResult::assemble(
            "1234567890123",
            Some("Hydrating Serum"),
            Some("GlowCo"),
            "UK",
            &["glowco.com", "boots.com"],
            &["Skin Lab, Soho"],
            Confidence::Medium,
        )
    }

    #[test]
    fn csv_has_header_and_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");

        let format = write_result(&path, &result()).unwrap();
        assert_eq!(format, TableFormat::Csv);

        let written = std::fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(
            lines.next(),
            Some("barcode,product,brand,country,websites,nearby_stores,confidence")
        );
        assert_eq!(
            lines.next(),
            Some("1234567890123,Hydrating Serum,GlowCo,UK,glowco.com; boots.com,\"Skin Lab, Soho\",Medium")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn tsv_uses_tabs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.tsv");

        assert_eq!(write_result(&path, &result()).unwrap(), TableFormat::Tsv);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("barcode\tproduct\tbrand"));
    }

    #[test]
    fn xlsx_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.xlsx");

        assert_eq!(
            write_result(&path, &result()).unwrap(),
            TableFormat::Spreadsheet
        );
        let bytes = std::fs::read(&path).unwrap();
        // xlsx is a zip archive
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("output.csv");
        assert!(write_result(&path, &result()).is_err());
    }
}
