use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Terms the store directory is scoped to when no product category applies.
const COSMETICS_TERMS: &[&str] = &["cosmetics", "skincare", "beauty", "makeup"];

/// A set of domain-relevance terms matched as case-insensitive substrings
/// against a store's category text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceTerms {
    terms: Vec<String>,
}

impl RelevanceTerms {
    /// Build a term set. Terms are lowercased and trimmed; blanks and
    /// duplicates are dropped while preserving order.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .filter(|t| seen.insert(t.clone()))
            .collect();
        Self { terms }
    }

    /// The beauty retail vocabulary: `cosmetics`, `skincare`, `beauty`, `makeup`.
    #[must_use]
    pub fn cosmetics() -> Self {
        Self::new(COSMETICS_TERMS)
    }

    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// `true` if any term occurs in `text`. Expects `text` already lowercased.
    #[must_use]
    pub fn matches_lowercase(&self, text: &str) -> bool {
        self.terms.iter().any(|term| text.contains(term.as_str()))
    }
}

impl Default for RelevanceTerms {
    fn default() -> Self {
        Self::cosmetics()
    }
}

/// On-disk shape of a relevance vocabulary file.
///
/// ```yaml
/// domain: cosmetics
/// terms: [cosmetics, skincare, beauty, makeup]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevanceFile {
    pub domain: String,
    pub terms: Vec<String>,
}

impl RelevanceFile {
    #[must_use]
    pub fn into_terms(self) -> RelevanceTerms {
        RelevanceTerms::new(self.terms)
    }
}

/// Load and validate a relevance vocabulary from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_relevance_terms(path: &Path) -> Result<RelevanceFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RelevanceFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: RelevanceFile = serde_yaml::from_str(&content)?;

    validate_relevance(&file)?;

    Ok(file)
}

fn validate_relevance(file: &RelevanceFile) -> Result<(), ConfigError> {
    if file.domain.trim().is_empty() {
        return Err(ConfigError::Validation(
            "relevance domain must be non-empty".to_string(),
        ));
    }

    if file.terms.is_empty() {
        return Err(ConfigError::Validation(format!(
            "relevance domain '{}' lists no terms",
            file.domain
        )));
    }

    let mut seen = HashSet::new();
    for term in &file.terms {
        let normalized = term.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ConfigError::Validation(format!(
                "relevance domain '{}' contains a blank term",
                file.domain
            )));
        }
        if !seen.insert(normalized) {
            return Err(ConfigError::Validation(format!(
                "duplicate relevance term: '{term}'"
            )));
        }
    }

    Ok(())
}
