//! Barcode resolution core.
//!
//! Holds the three reference tables in memory and resolves a barcode into a
//! [`ResolutionResult`]: product identity, online sellers, nearby stores and a
//! confidence tier. Everything here is pure in-memory decision logic; file
//! loading and result writing live in `barlookup-io`.

pub mod app_config;
pub mod confidence;
pub mod config;
pub mod observer;
pub mod records;
pub mod reference;
pub mod relevance;
pub mod resolver;
pub mod result;
pub mod stores;

pub use app_config::{AppConfig, Environment};
pub use confidence::{assess_confidence, confidence_score, count_score, Confidence};
pub use config::{load_app_config, load_app_config_from_env};
pub use observer::{NoopObserver, ResolutionObserver};
pub use records::{ProductRecord, StoreRecord, WebsiteEntry};
pub use reference::ReferenceStore;
pub use relevance::{load_relevance_terms, RelevanceFile, RelevanceTerms};
pub use resolver::Resolver;
pub use result::{ResolutionResult, LIST_DELIMITER, NONE_FOUND, NOT_FOUND, UNKNOWN_BRAND};
pub use stores::{filter_stores, StoreQuery};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read relevance file {path}: {source}")]
    RelevanceFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse relevance file: {0}")]
    RelevanceFileParse(#[from] serde_yaml::Error),

    #[error("relevance validation failed: {0}")]
    Validation(String),
}
