//! Layered configuration loading: global file, explicit file, environment

use clinview::config::{ConfigLoader, API_URL_ENV};
use clinview::error::ApiError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::integration::with_xdg_env;

fn write_global_config(test_dir: &TempDir, content: &str) -> PathBuf {
    let dir = test_dir.path().join("config").join("clinview");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_defaults_without_any_config() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.output, "stderr");
    });
}

#[test]
fn test_global_config_file_is_read_from_xdg_config_home() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let path = write_global_config(
            &test_dir,
            r#"
[api]
base_url = "https://docs.example.org"
connect_timeout_secs = 3

[logging]
format = "json"
"#,
        );
        assert_eq!(ConfigLoader::global_config_path(), Some(path));

        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.api.base_url, "https://docs.example.org");
        assert_eq!(config.api.connect_timeout_secs, 3);
        assert_eq!(config.api.request_timeout_secs, 120);
        assert_eq!(config.logging.format, "json");
    });
}

#[test]
fn test_environment_overrides_global_file() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        write_global_config(
            &test_dir,
            "[api]\nbase_url = \"https://docs.example.org\"\nrequest_timeout_secs = 60\n",
        );
        std::env::set_var("CLINVIEW_API__REQUEST_TIMEOUT_SECS", "15");

        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.api.request_timeout_secs, 15);
        assert_eq!(config.api.base_url, "https://docs.example.org");

        std::env::set_var(API_URL_ENV, "http://10.0.0.5:8000");
        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5:8000");
    });
}

#[test]
fn test_explicit_file_replaces_global_file() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        write_global_config(
            &test_dir,
            "[api]\nbase_url = \"https://global.example.org\"\nconnect_timeout_secs = 4\n",
        );
        let explicit = test_dir.path().join("explicit.toml");
        fs::write(&explicit, "[api]\nbase_url = \"https://explicit.example.org\"\n").unwrap();

        let config = ConfigLoader::load_from_file(&explicit).unwrap();
        assert_eq!(config.api.base_url, "https://explicit.example.org");
        assert_eq!(config.api.connect_timeout_secs, 10);
    });
}

#[test]
fn test_malformed_global_file_is_a_config_error() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        write_global_config(&test_dir, "[api\nbase_url = ");
        let result = ConfigLoader::load();
        assert!(matches!(result, Err(ApiError::ConfigError(_))));
    });
}

#[test]
fn test_invalid_log_output_fails_validation() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        write_global_config(&test_dir, "[logging]\noutput = \"syslog\"\n");
        let result = ConfigLoader::load();
        assert!(matches!(result, Err(ApiError::ConfigError(_))));
    });
}
