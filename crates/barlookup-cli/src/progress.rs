//! Narrates a resolution through `tracing`.

use barlookup_core::{Confidence, ProductRecord, ResolutionObserver};

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TracingObserver;

impl ResolutionObserver for TracingObserver {
    fn resolution_started(&self, barcode: &str) {
        tracing::info!(barcode, "resolving barcode");
    }

    fn product_found(&self, product: &ProductRecord) {
        tracing::info!(
            product = product.product_name.as_deref().unwrap_or("-"),
            brand = product.brand.as_deref().unwrap_or("-"),
            "found product"
        );
    }

    fn product_missing(&self, barcode: &str) {
        tracing::warn!(barcode, "product not found in catalog");
    }

    fn websites_found(&self, count: usize) {
        tracing::info!(count, "found websites selling this product");
    }

    fn stores_found(&self, count: usize, country: &str, city: Option<&str>) {
        tracing::info!(count, country, city = city.unwrap_or("-"), "found nearby stores");
    }

    fn confidence_assessed(&self, confidence: Confidence) {
        tracing::info!(%confidence, "confidence assessed");
    }
}
