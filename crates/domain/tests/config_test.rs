use catchall_domain::config::{DatabaseConfig, StoreConfig};
use catchall_domain::{CliOverrides, Config, ConfigError, StorageBackend};
use std::str::FromStr;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.web_port, 8000);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.database.backend, StorageBackend::Sqlite);
    assert_eq!(config.database.path, "./catchall.db");
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.database.busy_timeout_secs, 30);
    assert_eq!(config.store.operation_timeout_ms, 10_000);
    assert_eq!(config.store.max_update_attempts, 32);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_partial_toml_uses_defaults() {
    let config = Config::from_toml(
        r#"
        [server]
        web_port = 9000

        [database]
        backend = "memory"
        "#,
    )
    .unwrap();

    assert_eq!(config.server.web_port, 9000);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.database.backend, StorageBackend::Memory);
    assert_eq!(config.database.path, "./catchall.db");
    assert_eq!(config.store.max_update_attempts, 32);
}

#[test]
fn test_config_empty_toml_is_default() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config.server.web_port, 8000);
}

#[test]
fn test_config_invalid_toml() {
    let result = Config::from_toml("[server\nweb_port = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_invalid_backend() {
    let result = Config::from_toml("[database]\nbackend = \"redis\"");
    assert!(result.is_err());
}

#[test]
fn test_cli_overrides_applied() {
    let mut config = Config::default();
    config.apply_cli_overrides(CliOverrides {
        web_port: Some(8081),
        bind_address: Some("127.0.0.1".to_string()),
        database_path: Some("/tmp/x.db".to_string()),
        backend: Some(StorageBackend::Memory),
        log_level: Some("debug".to_string()),
    });

    assert_eq!(config.server.web_port, 8081);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.database.path, "/tmp/x.db");
    assert_eq!(config.database.backend, StorageBackend::Memory);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_cli_overrides_none_keeps_values() {
    let mut config = Config::default();
    config.apply_cli_overrides(CliOverrides::default());
    assert_eq!(config.server.web_port, 8000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_validate_zero_port() {
    let mut config = Config::default();
    config.server.web_port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_empty_sqlite_path() {
    let mut config = Config::default();
    config.database.path = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_empty_path_allowed_for_memory() {
    let mut config = Config::default();
    config.database = DatabaseConfig {
        backend: StorageBackend::Memory,
        path: String::new(),
        ..DatabaseConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_store_bounds() {
    let mut config = Config::default();
    config.store = StoreConfig {
        operation_timeout_ms: 0,
        ..StoreConfig::default()
    };
    assert!(config.validate().is_err());

    config.store = StoreConfig {
        max_update_attempts: 0,
        ..StoreConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_storage_backend_parse() {
    assert_eq!(StorageBackend::from_str("sqlite"), Ok(StorageBackend::Sqlite));
    assert_eq!(StorageBackend::from_str("MEMORY"), Ok(StorageBackend::Memory));
    assert!(StorageBackend::from_str("redis").is_err());
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catchall.toml");
    let path = path.to_str().unwrap();

    let mut config = Config::default();
    config.server.web_port = 8123;
    config.database.backend = StorageBackend::Memory;
    config.save(path).unwrap();

    let loaded = Config::load(Some(path), CliOverrides::default()).unwrap();
    assert_eq!(loaded.server.web_port, 8123);
    assert_eq!(loaded.database.backend, StorageBackend::Memory);
}

#[test]
fn test_load_missing_file() {
    let result = Config::load(Some("/nonexistent/catchall.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_example_config_file_parses() {
    let config = Config::from_toml(include_str!("../../../catchall.example.toml")).unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(config.server.web_port, 8000);
    assert_eq!(config.store.max_update_attempts, 32);
}
