//! Loading the three reference tables into a [`ReferenceStore`].
//!
//! Required columns: `barcode` (products), `barcode` and `website`
//! (websites), `country` and `store_name` (stores). Any other column may be
//! missing, in which case its values are treated as empty.

use std::path::{Path, PathBuf};

use barlookup_core::{AppConfig, ProductRecord, ReferenceStore, StoreRecord, WebsiteEntry};

use crate::delimited::read_delimited;
use crate::error::TableError;
use crate::format::TableFormat;
use crate::spreadsheet::read_spreadsheet;
use crate::table::{cell, RawTable};

/// Where to find each reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePaths {
    pub products: PathBuf,
    pub websites: PathBuf,
    pub stores: PathBuf,
}

impl ReferencePaths {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            products: config.products_path.clone(),
            websites: config.websites_path.clone(),
            stores: config.stores_path.clone(),
        }
    }
}

/// Load a table, choosing the reader from the file extension.
///
/// # Errors
///
/// Returns [`TableError::NotFound`] if `path` does not exist, or the reader's
/// error if it cannot be parsed.
pub fn load_table(path: &Path) -> Result<RawTable, TableError> {
    if !path.exists() {
        return Err(TableError::NotFound {
            path: path.display().to_string(),
        });
    }

    let table = match TableFormat::from_path(path) {
        TableFormat::Csv => read_delimited(path, b',')?,
        TableFormat::Tsv => read_delimited(path, b'\t')?,
        TableFormat::Spreadsheet => read_spreadsheet(path)?,
    };
    if table.is_empty() {
        tracing::warn!(path = %path.display(), "table has a header but no data rows");
    }
    Ok(table)
}

/// Load all three tables. Fails on the first table that cannot be loaded.
///
/// # Errors
///
/// Returns a [`TableError`] if any file is missing, unreadable, or lacks a
/// required column.
pub fn load_reference_store(paths: &ReferencePaths) -> Result<ReferenceStore, TableError> {
    tracing::info!(path = %paths.products.display(), "loading products");
    let products = products_from_table(&load_table(&paths.products)?, &paths.products)?;
    tracing::info!(rows = products.len(), "loaded products");

    tracing::info!(path = %paths.websites.display(), "loading websites");
    let websites = websites_from_table(&load_table(&paths.websites)?, &paths.websites)?;
    tracing::info!(rows = websites.len(), "loaded website entries");

    tracing::info!(path = %paths.stores.display(), "loading stores");
    let stores = stores_from_table(&load_table(&paths.stores)?, &paths.stores)?;
    tracing::info!(rows = stores.len(), "loaded stores");

    let reference = ReferenceStore::new(products, websites, stores);
    let duplicates = reference.duplicate_product_barcodes();
    if duplicates > 0 {
        tracing::warn!(
            duplicates,
            "product table repeats some barcodes; the first row for each wins"
        );
    }
    Ok(reference)
}

/// Convert a products table. Rows without a barcode are skipped.
///
/// # Errors
///
/// Returns [`TableError::MissingColumn`] if there is no `barcode` column.
pub fn products_from_table(
    table: &RawTable,
    path: &Path,
) -> Result<Vec<ProductRecord>, TableError> {
    let display = path.display().to_string();
    let barcode = table.require_column("barcode", &display)?;
    let product_name = table.column("product_name");
    let brand = table.column("brand");
    let category = table.column("category");

    let products: Vec<ProductRecord> = table
        .rows()
        .iter()
        .filter_map(|row| {
            Some(ProductRecord {
                barcode: cell(row, Some(barcode))?.to_string(),
                product_name: cell(row, product_name).map(str::to_string),
                brand: cell(row, brand).map(str::to_string),
                category: cell(row, category).map(str::to_string),
            })
        })
        .collect();

    log_skipped(&display, table.len(), products.len());
    Ok(products)
}

/// Convert a websites table. Rows without a barcode or website are skipped.
///
/// # Errors
///
/// Returns [`TableError::MissingColumn`] if `barcode` or `website` is absent.
pub fn websites_from_table(
    table: &RawTable,
    path: &Path,
) -> Result<Vec<WebsiteEntry>, TableError> {
    let display = path.display().to_string();
    let barcode = table.require_column("barcode", &display)?;
    let website = table.require_column("website", &display)?;

    let websites: Vec<WebsiteEntry> = table
        .rows()
        .iter()
        .filter_map(|row| {
            Some(WebsiteEntry {
                barcode: cell(row, Some(barcode))?.to_string(),
                website: cell(row, Some(website))?.to_string(),
            })
        })
        .collect();

    log_skipped(&display, table.len(), websites.len());
    Ok(websites)
}

/// Convert a stores table. Rows without a country or store name are skipped.
///
/// # Errors
///
/// Returns [`TableError::MissingColumn`] if `country` or `store_name` is absent.
pub fn stores_from_table(table: &RawTable, path: &Path) -> Result<Vec<StoreRecord>, TableError> {
    let display = path.display().to_string();
    let country = table.require_column("country", &display)?;
    let store_name = table.require_column("store_name", &display)?;
    let city = table.column("city");
    let store_category = table.column("store_category");

    let stores: Vec<StoreRecord> = table
        .rows()
        .iter()
        .filter_map(|row| {
            Some(StoreRecord {
                country: cell(row, Some(country))?.to_string(),
                city: cell(row, city).map(str::to_string),
                store_category: cell(row, store_category).map(str::to_string),
                store_name: cell(row, Some(store_name))?.to_string(),
            })
        })
        .collect();

    log_skipped(&display, table.len(), stores.len());
    Ok(stores)
}

fn log_skipped(path: &str, total: usize, kept: usize) {
    let skipped = total - kept;
    if skipped > 0 {
        tracing::debug!(path, skipped, "skipped rows missing required values");
    }
}
