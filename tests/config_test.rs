//! Tests for settings loading from files

use std::fs;

use tempfile::TempDir;

use geotime::application::{ApplicationError, Difficulty};
use geotime::config::Settings;

#[test]
fn given_config_file_when_loading_then_values_override_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("geotime.toml");
    fs::write(&path, "seed = 42\ndifficulty = \"hard\"\n").unwrap();

    // Act
    let settings = Settings::load_file(&path).unwrap();

    // Assert
    assert_eq!(settings.seed, Some(42));
    assert_eq!(settings.difficulty, Difficulty::Hard);
    assert_eq!(settings.sample_count, 5);
}

#[test]
fn given_empty_config_file_when_loading_then_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("geotime.toml");
    fs::write(&path, "").unwrap();

    let settings = Settings::load_file(&path).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_unknown_difficulty_when_loading_then_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("geotime.toml");
    fs::write(&path, "difficulty = \"impossible\"\n").unwrap();

    let result = Settings::load_file(&path);

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_missing_file_when_loading_explicitly_then_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    assert!(matches!(
        Settings::load_file(&path),
        Err(ApplicationError::Config { .. })
    ));
    assert!(matches!(
        Settings::load(Some(path.as_path())),
        Err(ApplicationError::Config { .. })
    ));
}

#[test]
fn given_settings_when_rendering_toml_then_round_trips_through_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("geotime.toml");
    let settings = Settings {
        seed: Some(7),
        difficulty: Difficulty::Medium,
        sample_count: 9,
    };
    fs::write(&path, settings.to_toml().unwrap()).unwrap();

    let loaded = Settings::load_file(&path).unwrap();

    assert_eq!(loaded, settings);
}
