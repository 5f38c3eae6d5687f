use serde::{Deserialize, Serialize};

/// One row of the product catalog.
///
/// `barcode` is always text. Loaders coerce numeric cells before building the
/// record so that `"0123"` and `123.0` never compare equal by accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub barcode: String,
    pub product_name: Option<String>,
    pub brand: Option<String>,
    /// Free-text category, e.g. `"skincare"`.
    pub category: Option<String>,
}

impl ProductRecord {
    /// Category with blank values treated as absent.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        non_blank(self.category.as_deref())
    }
}

/// A seller (usually a domain) known to list a barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteEntry {
    pub barcode: String,
    pub website: String,
}

/// One row of the physical store directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub country: String,
    pub city: Option<String>,
    /// Free-text tags, possibly several separated by `,` or `|`.
    pub store_category: Option<String>,
    pub store_name: String,
}

/// Returns `None` for missing or whitespace-only values.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_blank_is_none() {
        let product = ProductRecord {
            barcode: "1".to_string(),
            product_name: None,
            brand: None,
            category: Some("   ".to_string()),
        };
        assert!(product.category().is_none());
    }

    #[test]
    fn category_present_is_returned_verbatim() {
        let product = ProductRecord {
            barcode: "1".to_string(),
            product_name: None,
            brand: None,
            category: Some("Skincare".to_string()),
        };
        assert_eq!(product.category(), Some("Skincare"));
    }

    #[test]
    fn serde_roundtrip_store_record() {
        let store = StoreRecord {
            country: "UK".to_string(),
            city: Some("London".to_string()),
            store_category: Some("beauty|pharmacy".to_string()),
            store_name: "Boots Oxford Street".to_string(),
        };
        let json = serde_json::to_string(&store).expect("serialization failed");
        let decoded: StoreRecord = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded, store);
    }
}
