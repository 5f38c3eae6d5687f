use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("file not found: {path}")]
    NotFound { path: String },

    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read spreadsheet {path}: {source}")]
    Spreadsheet {
        path: String,
        #[source]
        source: calamine::Error,
    },

    #[error("spreadsheet {path} contains no worksheets")]
    EmptyWorkbook { path: String },

    #[error("{path} is missing required column '{column}'")]
    MissingColumn { path: String, column: &'static str },

    #[error("failed to write spreadsheet {path}: {source}")]
    XlsxWrite {
        path: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}
