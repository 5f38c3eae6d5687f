// CSV/TSV import

use std::path::Path;

use crate::error::TableError;
use crate::table::RawTable;

/// Read a delimited text file with a header row. Every cell is kept as text,
/// so barcodes such as `"0012345"` survive untouched.
///
/// # Errors
///
/// Returns [`TableError::Io`] if the file cannot be read or
/// [`TableError::Csv`] if a record is malformed.
pub fn read_delimited(path: &Path, delimiter: u8) -> Result<RawTable, TableError> {
    let content = read_file_as_utf8(path)?;
    parse_delimited(&content, delimiter).map_err(|source| TableError::Csv {
        path: path.display().to_string(),
        source,
    })
}

/// Read file and convert to UTF-8 if needed (Windows-1252 exports from Excel
/// are common).
///
/// # Errors
///
/// Returns [`TableError::Io`] if the file cannot be read.
pub fn read_file_as_utf8(path: &Path) -> Result<String, TableError> {
    let bytes = std::fs::read(path).map_err(|source| TableError::Io {
        path: path.display().to_string(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

fn parse_delimited(content: &str, delimiter: u8) -> Result<RawTable, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        // Fully blank lines carry no data
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable::new(headers, rows))
}
