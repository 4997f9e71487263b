//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables hold ENV_MUTEX to avoid
//! interference between tests.

use relay_confgen::config::{load_config, load_from_env, GeneratorConfig};
use relay_confgen::core::transform::FilterLists;
use relay_confgen::domain::ConfgenError;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("RELAY_CONFGEN_CONFIG");
    std::env::remove_var("RELAY_CONFGEN_LOG_LEVEL");
    std::env::remove_var("RELAY_CONFGEN_LOG_JSON");
    std::env::remove_var("TEST_EXTRA_BLOCK");
}

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_EXTRA_BLOCK", "METRICS_PROMETHEUS");

    let temp_file = write_config(
        r#"
# Generator settings, ${NOT_SUBSTITUTED} in comments
[logging]
level = "warn"
json = true

[filters]
preserve = ["INPUT_TYPE", "OUTPUT_TYPE"]
block = ["READ_UNTIL", "${TEST_EXTRA_BLOCK}"]
aliases = [
    ["INPUT_BROKER_INPUTS", "INPUT"],
    ["OUTPUT_BROKER_OUTPUTS", "OUTPUT"],
]
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.logging.level, "warn");
    assert!(config.logging.json);
    assert_eq!(
        config.filters.block,
        vec!["READ_UNTIL".to_string(), "METRICS_PROMETHEUS".to_string()]
    );
    assert_eq!(config.filters.aliases.len(), 2);

    cleanup_env_vars();
}

#[test]
fn test_env_overrides_apply_to_file() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("RELAY_CONFGEN_LOG_LEVEL", "trace");
    std::env::set_var("RELAY_CONFGEN_LOG_JSON", "true");

    let temp_file = write_config("[logging]\nlevel = \"info\"\n");
    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.logging.level, "trace");
    assert!(config.logging.json);

    cleanup_env_vars();
}

#[test]
fn test_invalid_json_override_rejected() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("RELAY_CONFGEN_LOG_JSON", "yes");

    let result = load_from_env();
    assert!(matches!(result, Err(ConfgenError::Configuration(_))));

    cleanup_env_vars();
}

#[test]
fn test_load_from_env_without_file_uses_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let config = load_from_env().unwrap();
    assert_eq!(config, GeneratorConfig::default());
    assert_eq!(config.filters.to_filter_lists(), FilterLists::standard());
}

#[test]
fn test_load_from_env_reads_named_file() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[logging]\nlevel = \"debug\"\n");
    std::env::set_var("RELAY_CONFGEN_CONFIG", temp_file.path());

    let config = load_from_env().unwrap();
    assert_eq!(config.logging.level, "debug");

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[filters]\nblock = [\"${TEST_EXTRA_BLOCK}\"]\n");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_EXTRA_BLOCK"));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_overlapping_aliases_rejected() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        "[filters]\naliases = [[\"INPUT_BROKER\", \"A\"], [\"INPUT_BROKER_INPUTS\", \"B\"]]\n",
    );
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("overlap"));
}

#[test]
fn test_unknown_level_rejected() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[logging]\nlevel = \"chatty\"\n");
    assert!(load_config(temp_file.path()).is_err());
}
