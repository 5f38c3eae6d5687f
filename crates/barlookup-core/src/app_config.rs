use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Locations of the reference tables and output, plus logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub products_path: PathBuf,
    pub websites_path: PathBuf,
    pub stores_path: PathBuf,
    pub output_path: PathBuf,
    /// Optional YAML vocabulary replacing the built-in cosmetics terms.
    pub relevance_path: Option<PathBuf>,
}
