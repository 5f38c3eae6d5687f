mod progress;
mod resolve;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "barlookup")]
#[command(about = "Resolve a product barcode to its sellers and nearby stores")]
struct Cli {
    /// Product barcode
    #[arg(long)]
    barcode: String,

    /// Country (e.g., UK, US, DE)
    #[arg(long)]
    country: String,

    /// City to narrow store results
    #[arg(long)]
    city: Option<String>,

    /// Products data file (CSV or Excel) [env: BARLOOKUP_PRODUCTS_PATH]
    #[arg(long)]
    products: Option<PathBuf>,

    /// Websites data file (CSV or Excel) [env: BARLOOKUP_WEBSITES_PATH]
    #[arg(long)]
    websites: Option<PathBuf>,

    /// Stores data file (CSV or Excel) [env: BARLOOKUP_STORES_PATH]
    #[arg(long)]
    stores: Option<PathBuf>,

    /// Output file (`.xlsx`, `.tsv`, otherwise CSV) [env: BARLOOKUP_OUTPUT_PATH]
    #[arg(long)]
    output: Option<PathBuf>,

    /// YAML vocabulary of relevant store categories [env: BARLOOKUP_RELEVANCE_PATH]
    #[arg(long)]
    relevance: Option<PathBuf>,
}

impl Cli {
    /// Flags take precedence over environment configuration.
    fn apply_overrides(&self, config: &mut barlookup_core::AppConfig) {
        if let Some(path) = &self.products {
            config.products_path.clone_from(path);
        }
        if let Some(path) = &self.websites {
            config.websites_path.clone_from(path);
        }
        if let Some(path) = &self.stores {
            config.stores_path.clone_from(path);
        }
        if let Some(path) = &self.output {
            config.output_path.clone_from(path);
        }
        if self.relevance.is_some() {
            config.relevance_path.clone_from(&self.relevance);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = barlookup_core::load_app_config()?;
    cli.apply_overrides(&mut config);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(config.env != barlookup_core::Environment::Production)
        .init();

    let request = resolve::ResolveRequest {
        barcode: cli.barcode,
        country: cli.country,
        city: cli.city,
    };
    let result = resolve::run_resolve(&config, &request)?;
    println!("{}", resolve::format_summary(&result));

    Ok(())
}

#[cfg(test)]
mod tests;
