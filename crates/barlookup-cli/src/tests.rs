use std::path::{Path, PathBuf};

use barlookup_core::{AppConfig, Confidence, Environment};

use super::*;

fn config_in(dir: &Path) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "info".to_string(),
        products_path: dir.join("products.csv"),
        websites_path: dir.join("websites.csv"),
        stores_path: dir.join("stores.csv"),
        output_path: dir.join("output.csv"),
        relevance_path: None,
    }
}

fn write_fixtures(dir: &Path) {
    std::fs::write(
        dir.join("products.csv"),
        "barcode,product_name,brand,category\n4006381333931,Garden Trowel,GreenCo,\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("websites.csv"),
        "barcode,website\n4006381333931,greenco.com\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("stores.csv"),
        "country,city,store_category,store_name\n\
         DE,Berlin,garden centre,Grün Berlin\n\
         DE,Berlin,beauty,Glow Berlin\n",
    )
    .unwrap();
}

fn request(barcode: &str, country: &str, city: Option<&str>) -> resolve::ResolveRequest {
    resolve::ResolveRequest {
        barcode: barcode.to_string(),
        country: country.to_string(),
        city: city.map(str::to_string),
    }
}

#[test]
fn parses_required_args() {
    let cli = Cli::try_parse_from(["barlookup", "--barcode", "0123", "--country", "UK"])
        .expect("expected valid cli args");
    assert_eq!(cli.barcode, "0123");
    assert_eq!(cli.country, "UK");
    assert!(cli.city.is_none());
    assert!(cli.products.is_none());
    assert!(cli.output.is_none());
}

#[test]
fn parses_all_args() {
    let cli = Cli::try_parse_from([
        "barlookup",
        "--barcode",
        "1234567890123",
        "--country",
        "UK",
        "--city",
        "London",
        "--products",
        "p.xlsx",
        "--websites",
        "w.csv",
        "--stores",
        "s.csv",
        "--output",
        "out.xlsx",
        "--relevance",
        "garden.yaml",
    ])
    .expect("expected valid cli args");
    assert_eq!(cli.city.as_deref(), Some("London"));
    assert_eq!(cli.products, Some(PathBuf::from("p.xlsx")));
    assert_eq!(cli.output, Some(PathBuf::from("out.xlsx")));
    assert_eq!(cli.relevance, Some(PathBuf::from("garden.yaml")));
}

#[test]
fn barcode_is_required() {
    assert!(Cli::try_parse_from(["barlookup", "--country", "UK"]).is_err());
}

#[test]
fn country_is_required() {
    assert!(Cli::try_parse_from(["barlookup", "--barcode", "1"]).is_err());
}

#[test]
fn flags_override_config() {
    let cli = Cli::try_parse_from([
        "barlookup",
        "--barcode",
        "1",
        "--country",
        "UK",
        "--stores",
        "/data/stores.xlsx",
        "--relevance",
        "garden.yaml",
    ])
    .unwrap();
    let mut config = config_in(Path::new("/base"));
    cli.apply_overrides(&mut config);

    assert_eq!(config.products_path, PathBuf::from("/base/products.csv"));
    assert_eq!(config.stores_path, PathBuf::from("/data/stores.xlsx"));
    assert_eq!(config.relevance_path, Some(PathBuf::from("garden.yaml")));
}

#[test]
fn run_resolve_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let config = config_in(dir.path());

    let result = resolve::run_resolve(&config, &request("4006381333931", "de", None)).unwrap();

    assert_eq!(result.product, "Garden Trowel");
    assert_eq!(result.nearby_stores, "Glow Berlin");
    // 2 + 1 + 1
    assert_eq!(result.confidence, Confidence::Medium);

    let written = std::fs::read_to_string(&config.output_path).unwrap();
    let mut lines = written.lines();
    assert_eq!(
        lines.next(),
        Some("barcode,product,brand,country,websites,nearby_stores,confidence")
    );
    assert_eq!(
        lines.next(),
        Some("4006381333931,Garden Trowel,GreenCo,de,greenco.com,Glow Berlin,Medium")
    );
}

#[test]
fn run_resolve_uses_relevance_file() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let relevance = dir.path().join("garden.yaml");
    std::fs::write(&relevance, "domain: garden\nterms: [garden]\n").unwrap();
    let mut config = config_in(dir.path());
    config.relevance_path = Some(relevance);

    let result =
        resolve::run_resolve(&config, &request("4006381333931", "DE", Some("berlin"))).unwrap();

    assert_eq!(result.nearby_stores, "Grün Berlin");
}

#[test]
fn run_resolve_unknown_barcode_still_writes_low_result() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let config = config_in(dir.path());

    let result = resolve::run_resolve(&config, &request("000", "DE", None)).unwrap();

    assert_eq!(result.confidence, Confidence::Low);
    assert!(config.output_path.exists());
}

#[test]
fn run_resolve_fails_on_missing_reference_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let err = resolve::run_resolve(&config, &request("1", "UK", None)).unwrap_err();
    assert!(
        format!("{err:#}").contains("file not found"),
        "unexpected error: {err:#}"
    );
    assert!(!config.output_path.exists());
}

#[test]
fn run_resolve_fails_on_invalid_relevance_file() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let relevance = dir.path().join("bad.yaml");
    std::fs::write(&relevance, "domain: garden\nterms: []\n").unwrap();
    let mut config = config_in(dir.path());
    config.relevance_path = Some(relevance);

    let err = resolve::run_resolve(&config, &request("4006381333931", "DE", None)).unwrap_err();
    assert!(format!("{err:#}").contains("no terms"), "unexpected error: {err:#}");
}

#[test]
fn summary_lists_every_field() {
    let result = barlookup_core::ResolutionResult::not_found("999", "UK");
    let summary = resolve::format_summary(&result);
    let lines: Vec<&str> = summary.lines().collect();

    assert_eq!(lines[0], "=".repeat(60));
    assert_eq!(lines[1], "Result Summary:");
    assert_eq!(lines[3], "barcode         : 999");
    assert_eq!(lines[4], "product         : Not found");
    assert_eq!(lines[9], "confidence      : Low");
    assert_eq!(lines.len(), 10);
}
