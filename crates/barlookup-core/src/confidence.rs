//! Confidence tiering for a resolution.
//!
//! Three additive signals: product found (+2), website count and store count
//! (each +2 at three or more, +1 at one or more). A missing product is always
//! `Low`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::Low => write!(f, "Low"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::High => write!(f, "High"),
        }
    }
}

const PRODUCT_FOUND_POINTS: u8 = 2;
const HIGH_THRESHOLD: u8 = 5;
const MEDIUM_THRESHOLD: u8 = 2;

/// Points for a list of corroborating items: 2 for three or more, 1 for at
/// least one, 0 otherwise.
#[must_use]
pub fn count_score(count: usize) -> u8 {
    match count {
        0 => 0,
        1 | 2 => 1,
        _ => 2,
    }
}

/// Total score in `0..=6`.
#[must_use]
pub fn confidence_score(product_found: bool, website_count: usize, store_count: usize) -> u8 {
    if !product_found {
        return 0;
    }
    PRODUCT_FOUND_POINTS + count_score(website_count) + count_score(store_count)
}

/// Map the three signals to a tier.
#[must_use]
pub fn assess_confidence(
    product_found: bool,
    website_count: usize,
    store_count: usize,
) -> Confidence {
    if !product_found {
        return Confidence::Low;
    }
    match confidence_score(product_found, website_count, store_count) {
        s if s >= HIGH_THRESHOLD => Confidence::High,
        s if s >= MEDIUM_THRESHOLD => Confidence::Medium,
        _ => Confidence::Low,
    }
}
