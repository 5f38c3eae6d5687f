//! Progress hooks for a resolution.
//!
//! The resolver never logs on its own. Callers that want narration pass an
//! observer; every method has an empty default so implementors override only
//! what they report.

use crate::confidence::Confidence;
use crate::records::ProductRecord;

pub trait ResolutionObserver: Send + Sync {
    fn resolution_started(&self, _barcode: &str) {}

    fn product_found(&self, _product: &ProductRecord) {}

    fn product_missing(&self, _barcode: &str) {}

    fn websites_found(&self, _count: usize) {}

    fn stores_found(&self, _count: usize, _country: &str, _city: Option<&str>) {}

    fn confidence_assessed(&self, _confidence: Confidence) {}
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ResolutionObserver for NoopObserver {}
