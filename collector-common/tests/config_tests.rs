//! Configuration resolution tests
//!
//! Covers the CLI → ENV → TOML → default priority order and graceful
//! handling of missing or malformed config files.
//!
//! Note: Uses serial_test to prevent ENV variable race conditions. Tests that
//! touch COLLECTOR_* or PYTHON_API_BASE are marked #[serial].

use collector_common::config::{
    load_toml_config, ConfigResolver, ConfigSource, BACKEND_URL_ENV, BIND_ADDR_ENV,
    DEFAULT_BACKEND_URL, LEGACY_BACKEND_URL_ENV, STATUS_POLL_INTERVAL,
};
use collector_common::Error;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::NamedTempFile;

fn clear_env() {
    env::remove_var(BACKEND_URL_ENV);
    env::remove_var(LEGACY_BACKEND_URL_ENV);
    env::remove_var(BIND_ADDR_ENV);
}

fn write_toml(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
#[serial]
fn test_defaults_when_nothing_configured() {
    clear_env();

    let config = ConfigResolver::new()
        .with_config_file(None)
        .resolve()
        .unwrap();

    assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(config.backend_url_source, ConfigSource::CompiledDefault);
    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
    assert_eq!(config.poll_interval, Duration::from_secs(5));
    assert_eq!(config.poll_interval, STATUS_POLL_INTERVAL);
}

#[test]
#[serial]
fn test_cli_beats_environment() {
    clear_env();
    env::set_var(BACKEND_URL_ENV, "http://from-env:9000");

    let config = ConfigResolver::new()
        .with_config_file(None)
        .with_cli_backend_url(Some("http://from-cli:7000/".to_string()))
        .resolve()
        .unwrap();

    assert_eq!(config.backend_url, "http://from-cli:7000");
    assert_eq!(config.backend_url_source, ConfigSource::CommandLine);

    clear_env();
}

#[test]
#[serial]
fn test_environment_beats_toml() {
    clear_env();
    env::set_var(BACKEND_URL_ENV, "http://from-env:9000");
    let file = write_toml("backend_url = \"http://from-toml:8500\"\n");

    let config = ConfigResolver::new()
        .with_config_file(Some(file.path().to_path_buf()))
        .resolve()
        .unwrap();

    assert_eq!(config.backend_url, "http://from-env:9000");
    assert_eq!(
        config.backend_url_source,
        ConfigSource::Environment(BACKEND_URL_ENV)
    );

    clear_env();
}

#[test]
#[serial]
fn test_legacy_variable_used_when_primary_unset() {
    clear_env();
    env::set_var(LEGACY_BACKEND_URL_ENV, "http://python-api:8000");

    let config = ConfigResolver::new()
        .with_config_file(None)
        .resolve()
        .unwrap();

    assert_eq!(config.backend_url, "http://python-api:8000");
    assert_eq!(
        config.backend_url_source,
        ConfigSource::Environment(LEGACY_BACKEND_URL_ENV)
    );

    clear_env();
}

#[test]
#[serial]
fn test_empty_environment_value_is_ignored() {
    clear_env();
    env::set_var(BACKEND_URL_ENV, "   ");

    let config = ConfigResolver::new()
        .with_config_file(None)
        .resolve()
        .unwrap();

    assert_eq!(config.backend_url_source, ConfigSource::CompiledDefault);

    clear_env();
}

#[test]
#[serial]
fn test_toml_tier() {
    clear_env();
    let file = write_toml(
        "backend_url = \"https://collector.internal/api/\"\nbind_addr = \"0.0.0.0:8080\"\n",
    );

    let config = ConfigResolver::new()
        .with_config_file(Some(file.path().to_path_buf()))
        .resolve()
        .unwrap();

    assert_eq!(config.backend_url, "https://collector.internal/api");
    assert_eq!(
        config.backend_url_source,
        ConfigSource::TomlFile(file.path().to_path_buf())
    );
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
}

#[test]
#[serial]
fn test_malformed_toml_falls_back_to_defaults() {
    clear_env();
    let file = write_toml("backend_url = [not valid toml");

    let config = ConfigResolver::new()
        .with_config_file(Some(file.path().to_path_buf()))
        .resolve()
        .unwrap();

    assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
#[serial]
fn test_invalid_backend_url_is_rejected() {
    clear_env();

    let result = ConfigResolver::new()
        .with_config_file(None)
        .with_cli_backend_url(Some("ftp://backend".to_string()))
        .resolve();

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_malformed_backend_url_from_environment_is_rejected() {
    clear_env();
    env::set_var(BACKEND_URL_ENV, "http://host:notaport");

    let result = ConfigResolver::new().with_config_file(None).resolve();
    clear_env();

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_invalid_bind_address_is_rejected() {
    clear_env();
    env::set_var(BIND_ADDR_ENV, "not-an-address");

    let result = ConfigResolver::new().with_config_file(None).resolve();
    assert!(matches!(result, Err(Error::Config(_))));

    clear_env();
}

#[test]
fn test_missing_config_file_is_not_an_error() {
    let path = PathBuf::from("/nonexistent/artists-collector/config.toml");
    assert!(load_toml_config(&path).unwrap().is_none());
}

#[test]
fn test_unknown_toml_keys_are_ignored() {
    let file = write_toml("backend_url = \"http://a:1\"\ntheme = \"dark\"\n");
    let config = load_toml_config(file.path()).unwrap().unwrap();
    assert_eq!(config.backend_url.as_deref(), Some("http://a:1"));
    assert!(config.bind_addr.is_none());
}
