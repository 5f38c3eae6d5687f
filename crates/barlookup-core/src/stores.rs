//! Geographic and category filtering of the store directory.
//!
//! "Nearby" means administrative equality only: the store's country must
//! match, and its city too when one is given. No distances are computed.

use std::collections::HashSet;

use crate::records::{non_blank, StoreRecord};
use crate::relevance::RelevanceTerms;

/// Location and category a store must match.
#[derive(Debug, Clone, Copy)]
pub struct StoreQuery<'a> {
    pub country: &'a str,
    pub city: Option<&'a str>,
    /// Category of the resolved product, if it has one.
    pub category: Option<&'a str>,
}

impl<'a> StoreQuery<'a> {
    #[must_use]
    pub fn new(country: &'a str) -> Self {
        Self {
            country,
            city: None,
            category: None,
        }
    }

    #[must_use]
    pub fn with_city(mut self, city: Option<&'a str>) -> Self {
        self.city = city;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Option<&'a str>) -> Self {
        self.category = category;
        self
    }
}

/// Distinct names of stores matching `query`, in first-seen table order.
///
/// Filters apply in order: country (case-insensitive equality), city when
/// given (case-insensitive equality), then category. With a product category
/// a store is kept if its category text contains that category or any
/// relevance term; without one only the relevance terms count. A store with
/// no category text never matches.
#[must_use]
pub fn filter_stores<'s>(
    stores: &'s [StoreRecord],
    query: &StoreQuery<'_>,
    relevance: &RelevanceTerms,
) -> Vec<&'s str> {
    let country = query.country.to_lowercase();
    let city = non_blank(query.city).map(str::to_lowercase);
    let category = non_blank(query.category).map(str::to_lowercase);

    let mut seen = HashSet::new();
    stores
        .iter()
        .filter(|s| s.country.to_lowercase() == country)
        .filter(|s| match &city {
            Some(city) => s.city.as_deref().is_some_and(|c| c.to_lowercase() == *city),
            None => true,
        })
        .filter(|s| {
            category_matches(s.store_category.as_deref(), category.as_deref(), relevance)
        })
        .map(|s| s.store_name.as_str())
        .filter(|name| !name.trim().is_empty())
        .filter(|name| seen.insert(*name))
        .collect()
}

fn category_matches(
    store_category: Option<&str>,
    category: Option<&str>,
    relevance: &RelevanceTerms,
) -> bool {
    let Some(store_category) = non_blank(store_category) else {
        return false;
    };
    let store_category = store_category.to_lowercase();

    let direct = category.is_some_and(|c| store_category.contains(c));
    direct || relevance.matches_lowercase(&store_category)
}
