//! Configuration loading tests
//!
//! These tests mutate process environment variables and are therefore
//! marked `#[serial]`.

use std::io::Write;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::NamedTempFile;

use catalog_admin::cli::Cli;
use catalog_admin::Config;

const ENV_VARS: [&str; 4] = [
    "CATALOG_ADMIN_API_BASE",
    "CATALOG_ADMIN_TIMEOUT_SECONDS",
    "CATALOG_ADMIN_STORE_PATH",
    "CATALOG_ADMIN_PER_PAGE",
];

fn clear_env() {
    for name in ENV_VARS {
        std::env::remove_var(name);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp config");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
#[serial]
fn test_missing_file_uses_defaults() {
    clear_env();
    let config = Config::load("/nonexistent/catalog-admin.yaml", &Cli::default()).unwrap();

    assert_eq!(config.api.base_url, "https://dummyjson.com");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.pagination.per_page, 9);
    assert!(config.storage.path.is_none());
}

#[test]
#[serial]
fn test_load_reads_yaml_file() {
    clear_env();
    let file = write_config("api:\n  base_url: http://localhost:9000\npagination:\n  per_page: 20\n");

    let config = Config::load(file.path().to_str().unwrap(), &Cli::default()).unwrap();

    assert_eq!(config.api.base_url, "http://localhost:9000");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.pagination.per_page, 20);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_invalid_yaml_is_config_error() {
    clear_env();
    let file = write_config("api: [unterminated\n");

    let err = Config::load(file.path().to_str().unwrap(), &Cli::default()).unwrap_err();

    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
#[serial]
fn test_env_vars_override_file() {
    clear_env();
    let file = write_config("api:\n  base_url: http://localhost:9000\n  timeout_seconds: 5\n");

    std::env::set_var("CATALOG_ADMIN_API_BASE", "http://catalog.internal");
    std::env::set_var("CATALOG_ADMIN_TIMEOUT_SECONDS", "12");
    std::env::set_var("CATALOG_ADMIN_STORE_PATH", "/tmp/env-store");
    std::env::set_var("CATALOG_ADMIN_PER_PAGE", "15");

    let config = Config::load(file.path().to_str().unwrap(), &Cli::default()).unwrap();
    clear_env();

    assert_eq!(config.api.base_url, "http://catalog.internal");
    assert_eq!(config.api.timeout_seconds, 12);
    assert_eq!(config.storage.path, Some(PathBuf::from("/tmp/env-store")));
    assert_eq!(config.pagination.per_page, 15);
}

#[test]
#[serial]
fn test_unparseable_env_numbers_are_ignored() {
    clear_env();
    std::env::set_var("CATALOG_ADMIN_TIMEOUT_SECONDS", "soon");
    std::env::set_var("CATALOG_ADMIN_PER_PAGE", "-1");

    let config = Config::load("/nonexistent/catalog-admin.yaml", &Cli::default()).unwrap();
    clear_env();

    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.pagination.per_page, 9);
}

#[test]
#[serial]
fn test_cli_store_path_beats_env() {
    clear_env();
    std::env::set_var("CATALOG_ADMIN_STORE_PATH", "/tmp/env-store");

    let cli = Cli {
        store_path: Some(PathBuf::from("/tmp/cli-store")),
        ..Cli::default()
    };
    let config = Config::load("/nonexistent/catalog-admin.yaml", &cli).unwrap();
    clear_env();

    assert_eq!(config.storage.path, Some(PathBuf::from("/tmp/cli-store")));
}
