use crate::confidence::assess_confidence;
use crate::observer::{NoopObserver, ResolutionObserver};
use crate::reference::ReferenceStore;
use crate::relevance::RelevanceTerms;
use crate::result::ResolutionResult;
use crate::stores::{filter_stores, StoreQuery};

/// Resolves barcodes against a loaded [`ReferenceStore`].
///
/// Holds no mutable state, so one resolver can serve calls for different
/// barcodes from several threads at once.
pub struct Resolver {
    reference: ReferenceStore,
    relevance: RelevanceTerms,
    observer: Box<dyn ResolutionObserver>,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("products", &self.reference.products().len())
            .field("websites", &self.reference.websites().len())
            .field("stores", &self.reference.stores().len())
            .field("relevance", &self.relevance)
            .finish_non_exhaustive()
    }
}

impl Resolver {
    /// Resolver with the cosmetics relevance vocabulary and no observer.
    #[must_use]
    pub fn new(reference: ReferenceStore) -> Self {
        Self {
            reference,
            relevance: RelevanceTerms::default(),
            observer: Box::new(NoopObserver),
        }
    }

    #[must_use]
    pub fn with_relevance(mut self, relevance: RelevanceTerms) -> Self {
        self.relevance = relevance;
        self
    }

    #[must_use]
    pub fn with_observer(mut self, observer: impl ResolutionObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Resolve `barcode` for a shopper in `country` (and optionally `city`).
    ///
    /// Always returns a complete result. When the barcode is not in the
    /// product catalog the website and store lookups are skipped entirely and
    /// the result carries placeholders with `Low` confidence.
    #[must_use]
    pub fn resolve(&self, barcode: &str, country: &str, city: Option<&str>) -> ResolutionResult {
        self.observer.resolution_started(barcode);

        let Some(product) = self.reference.find_product(barcode) else {
            self.observer.product_missing(barcode);
            return ResolutionResult::not_found(barcode, country);
        };
        self.observer.product_found(product);

        let websites = self.reference.find_websites(barcode);
        self.observer.websites_found(websites.len());

        let query = StoreQuery::new(country)
            .with_city(city)
            .with_category(product.category());
        let stores = filter_stores(self.reference.stores(), &query, &self.relevance);
        self.observer.stores_found(stores.len(), country, city);

        let confidence = assess_confidence(true, websites.len(), stores.len());
        self.observer.confidence_assessed(confidence);

        ResolutionResult::assemble(
            barcode,
            product.product_name.as_deref(),
            product.brand.as_deref(),
            country,
            &websites,
            &stores,
            confidence,
        )
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
