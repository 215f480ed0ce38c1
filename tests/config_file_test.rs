#![cfg(feature = "cli")]

use clap::Parser;
use small_catalog::utils::validation::Validate;
use small_catalog::{CatalogConfig, CatalogError, CliConfig, DisplayFormat};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_config_from_file() {
    let file = write_config(
        r#"
[session]
seed_example = true

[display]
format = "tsv"
"#,
    );

    let config = CatalogConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert!(config.seed_example());
    assert_eq!(config.display_format().unwrap(), DisplayFormat::Tsv);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CatalogConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::IoError(_)));
}

#[test]
fn test_cli_resolve_merges_file_and_flags() {
    let file = write_config("[display]\nformat = \"json\"\n[logging]\nformat = \"json\"\n");
    let path = file.path().to_str().unwrap().to_string();

    let cli = CliConfig::parse_from(["small-catalog", "--config", path.as_str(), "--seed"]);
    let config = cli.resolve().unwrap();

    assert!(config.seed_example());
    assert!(config.json_logging());
    assert!(!config.verbose());
    assert_eq!(config.display_format().unwrap(), DisplayFormat::Json);
}

#[test]
fn test_cli_resolve_without_file() {
    let cli = CliConfig::parse_from(["small-catalog", "--verbose"]);
    let config = cli.resolve().unwrap();

    assert!(config.verbose());
    assert!(!config.seed_example());
    assert_eq!(config.display_format().unwrap(), DisplayFormat::Table);
}
