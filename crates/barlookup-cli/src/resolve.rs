//! The `barlookup` run: load reference data, resolve one barcode, write the
//! result row.
//!
//! Any load or write failure is returned to `main` and ends the process with
//! a non-zero exit. A barcode that resolves to nothing is not a failure.

use anyhow::Context;
use barlookup_core::{
    load_relevance_terms, AppConfig, RelevanceTerms, ResolutionResult, Resolver,
};
use barlookup_io::{load_reference_store, write_result, ReferencePaths};

use crate::progress::TracingObserver;

const BANNER_WIDTH: usize = 60;

#[derive(Debug, Clone)]
pub(crate) struct ResolveRequest {
    pub barcode: String,
    pub country: String,
    pub city: Option<String>,
}

/// Build a resolver from the configured files, resolve `request`, and write
/// the result to `config.output_path`.
pub(crate) fn run_resolve(
    config: &AppConfig,
    request: &ResolveRequest,
) -> anyhow::Result<ResolutionResult> {
    let relevance = load_relevance(config)?;
    let reference = load_reference_store(&ReferencePaths::from_config(config))?;

    let resolver = Resolver::new(reference)
        .with_relevance(relevance)
        .with_observer(TracingObserver);
    let result = resolver.resolve(&request.barcode, &request.country, request.city.as_deref());

    let format = write_result(&config.output_path, &result)?;
    tracing::info!(
        path = %config.output_path.display(),
        %format,
        "results saved"
    );

    Ok(result)
}

fn load_relevance(config: &AppConfig) -> anyhow::Result<RelevanceTerms> {
    let Some(path) = &config.relevance_path else {
        return Ok(RelevanceTerms::default());
    };
    let file = load_relevance_terms(path)
        .with_context(|| format!("loading relevance vocabulary from {}", path.display()))?;
    tracing::info!(domain = %file.domain, terms = file.terms.len(), "loaded relevance vocabulary");
    Ok(file.into_terms())
}

/// Human-readable summary: a banner followed by one `key : value` line per field.
pub(crate) fn format_summary(result: &ResolutionResult) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    let lines: Vec<String> = result
        .fields()
        .into_iter()
        .map(|(key, value)| format!("{key:15} : {value}"))
        .collect();
    format!("{rule}\nResult Summary:\n{rule}\n{}", lines.join("\n"))
}
