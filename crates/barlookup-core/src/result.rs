use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;

/// Placeholder for a product name that could not be resolved.
pub const NOT_FOUND: &str = "Not found";
/// Placeholder for a missing brand.
pub const UNKNOWN_BRAND: &str = "Unknown";
/// Placeholder for an empty website or store list.
pub const NONE_FOUND: &str = "None found";
/// Separator used when flattening website and store lists.
pub const LIST_DELIMITER: &str = "; ";

/// The flattened outcome of resolving one barcode.
///
/// Every field is populated: missing data is replaced by one of the
/// placeholder constants in this module, never left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub barcode: String,
    pub product: String,
    pub brand: String,
    pub country: String,
    pub websites: String,
    pub nearby_stores: String,
    pub confidence: Confidence,
}

impl ResolutionResult {
    /// Assemble a result, substituting placeholders for empty values.
    #[must_use]
    pub fn assemble(
        barcode: &str,
        product: Option<&str>,
        brand: Option<&str>,
        country: &str,
        websites: &[&str],
        stores: &[&str],
        confidence: Confidence,
    ) -> Self {
        Self {
            barcode: barcode.to_string(),
            product: or_placeholder(product, NOT_FOUND),
            brand: or_placeholder(brand, UNKNOWN_BRAND),
            country: country.to_string(),
            websites: join_or_none(websites),
            nearby_stores: join_or_none(stores),
            confidence,
        }
    }

    /// Result for a barcode absent from the product catalog.
    #[must_use]
    pub fn not_found(barcode: &str, country: &str) -> Self {
        Self::assemble(barcode, None, None, country, &[], &[], Confidence::Low)
    }

    /// Column names in output order.
    #[must_use]
    pub fn field_names() -> [&'static str; 7] {
        [
            "barcode",
            "product",
            "brand",
            "country",
            "websites",
            "nearby_stores",
            "confidence",
        ]
    }

    /// `(column, value)` pairs in output order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, String); 7] {
        let [barcode, product, brand, country, websites, nearby_stores, confidence] =
            Self::field_names();
        [
            (barcode, self.barcode.clone()),
            (product, self.product.clone()),
            (brand, self.brand.clone()),
            (country, self.country.clone()),
            (websites, self.websites.clone()),
            (nearby_stores, self.nearby_stores.clone()),
            (confidence, self.confidence.to_string()),
        ]
    }
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

fn join_or_none(items: &[&str]) -> String {
    if items.is_empty() {
        NONE_FOUND.to_string()
    } else {
        items.join(LIST_DELIMITER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_uses_every_placeholder() {
        let result = ResolutionResult::not_found("999", "UK");
        assert_eq!(result.barcode, "999");
        assert_eq!(result.product, "Not found");
        assert_eq!(result.brand, "Unknown");
        assert_eq!(result.country, "UK");
        assert_eq!(result.websites, "None found");
        assert_eq!(result.nearby_stores, "None found");
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn lists_are_joined_with_semicolon_space() {
        let result = ResolutionResult::assemble(
            "1",
            Some("Serum"),
            Some("GlowCo"),
            "UK",
            &["a.com", "b.com"],
            &["Shop A"],
            Confidence::Medium,
        );
        assert_eq!(result.websites, "a.com; b.com");
        assert_eq!(result.nearby_stores, "Shop A");
    }

    #[test]
    fn blank_brand_becomes_unknown() {
        let result = ResolutionResult::assemble(
            "1",
            Some("Serum"),
            Some(""),
            "UK",
            &[],
            &[],
            Confidence::Medium,
        );
        assert_eq!(result.product, "Serum");
        assert_eq!(result.brand, "Unknown");
    }

    #[test]
    fn fields_follow_column_order() {
        let result = ResolutionResult::not_found("999", "FR");
        let names: Vec<&str> = result.fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(names, ResolutionResult::field_names());
        assert_eq!(result.fields()[6].1, "Low");
    }

    #[test]
    fn serializes_confidence_as_tier_name() {
        let result = ResolutionResult::not_found("999", "FR");
        let json = serde_json::to_value(&result).expect("serialization failed");
        assert_eq!(json["confidence"], "Low");
        assert_eq!(json["nearby_stores"], "None found");
    }
}
