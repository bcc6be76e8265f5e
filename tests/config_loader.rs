mod common;

use common::temp_config;
use std::path::PathBuf;
use std::time::Duration;
use vota_informado::config::{ApiConfig, Config, ConfigError};

/// Test that Config::default() points at a local backend.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api/");
    assert_eq!(config.api.connect_timeout_seconds, 30);
    assert_eq!(config.api.timeout_seconds, 30);
    assert!(config.session.token_path.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("vota-informado/config.toml"));
}

#[test]
fn test_default_token_path_is_in_data_dir() {
    let config = Config::default();
    assert!(config
        .session
        .resolved_token_path()
        .ends_with("vota-informado/session.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_full_file() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "https://vota.example.pe/api"
connect_timeout_seconds = 5
timeout_seconds = 20

[session]
token_path = "/tmp/vota/session.toml"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://vota.example.pe/api");
    assert_eq!(config.api.connect_timeout(), Duration::from_secs(5));
    assert_eq!(config.api.timeout(), Duration::from_secs(20));
    assert_eq!(
        config.api.base().unwrap().as_str(),
        "https://vota.example.pe/api/"
    );
    assert_eq!(
        config.session.resolved_token_path(),
        PathBuf::from("/tmp/vota/session.toml")
    );
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config("[api]\ntimeout_seconds = 3\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.timeout_seconds, 3);
    assert_eq!(config.api.base_url, ApiConfig::default().base_url);
    assert_eq!(config.api.connect_timeout_seconds, 30);
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = temp_config("[api\nbase_url = ");

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_zero_timeout_fails_validation() {
    let (_dir, path) = temp_config("[api]\nconnect_timeout_seconds = 0\n");
    let config = Config::load_from(&path).unwrap();

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("Timeouts"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_invalid_base_url_fails_validation() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"not a url\"\n");

    let config = Config::load_from(&path).unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::ValidationError { .. })));
}

#[test]
fn test_api_url_override_replaces_invalid_file_url() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"not a url\"\n");

    let config = Config::load_from(&path)
        .unwrap()
        .with_api_url(Some("http://ok.example/api/".to_string()));

    assert!(config.validate().is_ok());
    assert_eq!(config.api.base().unwrap().as_str(), "http://ok.example/api/");
}
