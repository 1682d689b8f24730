//! Tests for loading `noughts.toml` from disk.

use std::fs;
use tempfile::TempDir;

use noughts::AppConfig;
use noughts_engine::{Difficulty, Mark};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config =
        AppConfig::load_or_default(dir.path().join("noughts.toml")).expect("Load failed");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_file_values_loaded() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("noughts.toml");
    fs::write(
        &path,
        r#"human_mark = "o"
difficulty = "normal"
seed = 12
log_filter = "noughts=trace"
"#,
    )
    .expect("Failed to write TOML");

    let config = AppConfig::load_or_default(&path).expect("Load failed");
    assert_eq!(*config.session().human_mark(), Mark::Second);
    assert_eq!(*config.session().difficulty(), Difficulty::Heuristic);
    assert_eq!(*config.session().seed(), Some(12));
    assert_eq!(config.log_filter(), "noughts=trace");
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("noughts.toml");
    fs::write(&path, "difficulty = \"search\"\n").expect("Failed to write TOML");

    let config = AppConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.session().human_mark(), Mark::First);
    assert_eq!(*config.session().difficulty(), Difficulty::Search);
    assert_eq!(*config.session().seed(), None);
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("noughts.toml");
    fs::write(&path, "human_mark = 3\n").expect("Failed to write TOML");

    let err = AppConfig::load_or_default(&path).expect_err("Malformed config accepted");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_from_file_reports_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = AppConfig::from_file(dir.path().join("absent.toml")).expect_err("Read succeeded");
    assert!(err.message.contains("Failed to read config file"));
}
