use std::path::Path;

/// On-disk table format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Tsv,
    Spreadsheet,
}

impl TableFormat {
    /// Spreadsheet for `.xlsx`, `.xlsm`, `.xls`, `.xlsb` and `.ods`; TSV for
    /// `.tsv`; CSV for anything else, including no extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("xlsx" | "xlsm" | "xls" | "xlsb" | "ods") => TableFormat::Spreadsheet,
            Some("tsv") => TableFormat::Tsv,
            _ => TableFormat::Csv,
        }
    }

    /// Output only distinguishes `.xlsx` from delimited text.
    #[must_use]
    pub fn for_output(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => TableFormat::Spreadsheet,
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => TableFormat::Tsv,
            _ => TableFormat::Csv,
        }
    }
}

impl std::fmt::Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableFormat::Csv => write!(f, "CSV"),
            TableFormat::Tsv => write!(f, "TSV"),
            TableFormat::Spreadsheet => write!(f, "Excel"),
        }
    }
}
