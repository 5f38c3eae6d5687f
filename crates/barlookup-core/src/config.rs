use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields the
/// conventional `products.csv` / `websites.csv` / `stores.csv` layout in the
/// working directory.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional_path = |var: &str| -> Option<PathBuf> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    };

    let env = parse_environment(&or_default("BARLOOKUP_ENV", "development"))?;
    let log_level = or_default("BARLOOKUP_LOG_LEVEL", "info");
    if log_level.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "BARLOOKUP_LOG_LEVEL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let products_path = PathBuf::from(or_default("BARLOOKUP_PRODUCTS_PATH", "products.csv"));
    let websites_path = PathBuf::from(or_default("BARLOOKUP_WEBSITES_PATH", "websites.csv"));
    let stores_path = PathBuf::from(or_default("BARLOOKUP_STORES_PATH", "stores.csv"));
    let output_path = PathBuf::from(or_default("BARLOOKUP_OUTPUT_PATH", "output.csv"));
    let relevance_path = optional_path("BARLOOKUP_RELEVANCE_PATH");

    Ok(AppConfig {
        env,
        log_level,
        products_path,
        websites_path,
        stores_path,
        output_path,
        relevance_path,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BARLOOKUP_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
