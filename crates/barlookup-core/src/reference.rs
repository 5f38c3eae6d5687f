//! In-memory reference tables and the exact-key lookups over them.

use std::collections::HashSet;

use crate::records::{ProductRecord, StoreRecord, WebsiteEntry};

/// The three reference tables, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ReferenceStore {
    products: Vec<ProductRecord>,
    websites: Vec<WebsiteEntry>,
    stores: Vec<StoreRecord>,
}

impl ReferenceStore {
    #[must_use]
    pub fn new(
        products: Vec<ProductRecord>,
        websites: Vec<WebsiteEntry>,
        stores: Vec<StoreRecord>,
    ) -> Self {
        Self {
            products,
            websites,
            stores,
        }
    }

    #[must_use]
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    #[must_use]
    pub fn websites(&self) -> &[WebsiteEntry] {
        &self.websites
    }

    #[must_use]
    pub fn stores(&self) -> &[StoreRecord] {
        &self.stores
    }

    /// Find the product whose barcode equals `barcode` exactly.
    ///
    /// Comparison is case-sensitive. When several rows share a barcode the
    /// first one in table order wins.
    #[must_use]
    pub fn find_product(&self, barcode: &str) -> Option<&ProductRecord> {
        self.products.iter().find(|p| p.barcode == barcode)
    }

    /// Distinct sellers listing `barcode`, in first-seen table order.
    ///
    /// Blank website cells are skipped.
    #[must_use]
    pub fn find_websites(&self, barcode: &str) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.websites
            .iter()
            .filter(|w| w.barcode == barcode)
            .map(|w| w.website.as_str())
            .filter(|site| !site.trim().is_empty())
            .filter(|site| seen.insert(*site))
            .collect()
    }

    /// Number of product barcodes that appear on more than one row.
    ///
    /// Lookups still resolve these by first match; this exists so loaders can
    /// surface conflicting catalog data.
    #[must_use]
    pub fn duplicate_product_barcodes(&self) -> usize {
        let mut seen = HashSet::new();
        let mut duplicated = HashSet::new();
        for product in &self.products {
            if !seen.insert(product.barcode.as_str()) {
                duplicated.insert(product.barcode.as_str());
            }
        }
        duplicated.len()
    }
}
