mod common;

use common::temp_config;
use gamedeck::config::{Config, ConfigError};

/// Test that Config::default() points at the local catalog service.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://localhost:5062");
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert!(config.api.request_timeout_seconds.is_none());
    assert_eq!(config.ui.tick_rate_ms, 250);
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("gamedeck/config.toml"));
}

#[test]
fn test_load_full_file() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "https://catalog.example.com"
connect_timeout_seconds = 2
request_timeout_seconds = 30

[ui]
tick_rate_ms = 100
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.api.base_url, "https://catalog.example.com");
    assert_eq!(config.api.connect_timeout_seconds, 2);
    assert_eq!(config.api.request_timeout_seconds, Some(30));
    assert_eq!(config.ui.tick_rate_ms, 100);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"http://10.0.0.5:8080\"\n");

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.api.base_url, "http://10.0.0.5:8080");
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_parse_error_names_the_file() {
    let (_dir, path) = temp_config("[api\nbase_url = ");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_non_http_base_url_is_rejected() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"ftp://catalog\"\n");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_api_url_override_is_validated() {
    let config = Config::default()
        .with_base_url(Some("http://127.0.0.1:9000".to_string()))
        .unwrap();
    assert_eq!(config.api.base_url, "http://127.0.0.1:9000");

    let err = Config::default()
        .with_base_url(Some("localhost:9000".to_string()))
        .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
