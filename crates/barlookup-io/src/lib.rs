//! File I/O for barcode resolution: reference tables in (CSV, TSV, Excel),
//! one result row out (CSV, TSV, XLSX).

pub mod delimited;
pub mod error;
pub mod format;
pub mod load;
pub mod output;
pub mod spreadsheet;
pub mod table;

pub use error::TableError;
pub use format::TableFormat;
pub use load::{load_reference_store, load_table, ReferencePaths};
pub use output::write_result;
pub use table::RawTable;
