use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use compendium_config::models::sources::EnvConfig;
use compendium_config::{ConfigLoadError, ConfigLoader};
use tempfile::TempDir;

fn env(vars: &[(&str, &str)]) -> EnvConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    EnvConfig::from_lookup(|name| vars.get(name).cloned())
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("compendium.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn file_values_override_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "catalog.internal:9000/"
timeout = "5s"

[list]
page_limit = 20

[logging]
filter = "debug"
"#,
    );

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .expect("config loads");

    let config = load.config;
    assert_eq!(config.api.base_url, "http://catalog.internal:9000");
    assert_eq!(config.api.timeout, Duration::from_secs(5));
    assert_eq!(config.list.page_limit, 20);
    assert_eq!(config.logging.filter, "debug");
    assert_eq!(config.metadata.config_path.as_deref(), Some(path.as_path()));
    assert!(load.warnings.is_empty());
}

#[test]
fn environment_wins_over_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "http://from-file:8000"
token = "file-token"

[list]
page_limit = 20
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(env(&[
            ("COMPENDIUM_API_BASE_URL", "https://from-env"),
            ("COMPENDIUM_PAGE_LIMIT", "10"),
            ("COMPENDIUM_API_TOKEN", "   "),
            ("RUST_LOG", "warn"),
        ]))
        .expect("config loads")
        .config;

    assert_eq!(config.api.base_url, "https://from-env");
    assert_eq!(config.list.page_limit, 10);
    // Blank variables count as unset.
    assert_eq!(config.api.token.as_deref(), Some("file-token"));
    assert_eq!(config.logging.filter, "warn");
    assert_eq!(config.api.timeout, Duration::from_secs(30));
}

#[test]
fn compendium_log_takes_precedence_over_rust_log() {
    let env = env(&[("COMPENDIUM_LOG", "trace"), ("RUST_LOG", "warn")]);
    assert_eq!(env.log_filter.as_deref(), Some("trace"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("absent.toml");

    let err = ConfigLoader::new()
        .with_config_path(&missing)
        .load_with_env(EnvConfig::default())
        .expect_err("missing file");

    assert!(matches!(err, ConfigLoadError::MissingConfig { path } if path == missing));
}

#[test]
fn config_path_can_come_from_environment() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[list]\npage_limit = 7\n");

    let config = ConfigLoader::new()
        .load_with_env(env(&[(
            "COMPENDIUM_CONFIG_PATH",
            path.to_str().expect("utf-8 path"),
        )]))
        .expect("config loads")
        .config;

    assert_eq!(config.list.page_limit, 7);
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[api]\nbase_url = \"x\"\nretries = 3\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .expect_err("unknown key");

    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}

#[test]
fn invalid_values_name_their_key() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[api]\ntimeout = \"eventually\"\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .expect_err("bad duration");
    assert!(matches!(
        err,
        ConfigLoadError::InvalidDuration { key: "COMPENDIUM_API_TIMEOUT", .. }
    ));

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(env(&[
            ("COMPENDIUM_API_TIMEOUT", "10s"),
            ("COMPENDIUM_PAGE_LIMIT", "0"),
        ]))
        .expect_err("zero page limit");
    assert!(matches!(
        err,
        ConfigLoadError::InvalidValue { key: "COMPENDIUM_PAGE_LIMIT", .. }
    ));
}

#[test]
fn corpus_paths_resolve_only_existing_files() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("monsters.json"), "[]").expect("write corpus");
    let path = write_config(
        &dir,
        &format!("[corpus]\ndir = {:?}\n", dir.path().display().to_string()),
    );

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .expect("config loads")
        .config;

    use compendium_core::model::RecordKind;
    assert_eq!(
        config.corpus.path_for(RecordKind::Monsters),
        Some(dir.path().join("monsters.json"))
    );
    assert_eq!(config.corpus.path_for(RecordKind::Items), None);
}
