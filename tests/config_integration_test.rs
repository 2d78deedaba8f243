// Integration tests for settings persistence through Config

use optiblink_ui::config::{AppPaths, Config, Settings, ThemePreference};
use tempfile::TempDir;

fn temp_paths(temp_dir: &TempDir) -> AppPaths {
    AppPaths::from_dirs(temp_dir.path().join("config"), temp_dir.path().join("cache"))
        .expect("Failed to create app paths")
}

#[test]
fn test_first_run_uses_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::with_paths(temp_paths(&temp_dir)).expect("Failed to create config");

    assert_eq!(config.settings(), &Settings::default());
    assert!(!config.paths().settings_file.exists());
}

#[test]
fn test_update_settings_persists() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::with_paths(temp_paths(&temp_dir)).expect("Failed to create config");

    config
        .update_settings(|s| {
            s.splash_duration_secs = 1.5;
            s.theme = ThemePreference::Dark;
        })
        .expect("Failed to update settings");

    let reloaded = Config::with_paths(temp_paths(&temp_dir)).expect("Failed to reload config");
    assert_eq!(reloaded.settings().splash_duration_secs, 1.5);
    assert_eq!(reloaded.settings().theme, ThemePreference::Dark);
}

#[test]
fn test_invalid_update_is_rejected_and_not_saved() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::with_paths(temp_paths(&temp_dir)).expect("Failed to create config");

    let result = config.update_settings(|s| s.splash_duration_secs = -3.0);

    assert!(result.is_err());
    assert_eq!(config.settings().splash_duration_secs, 3.0);
    assert!(!config.paths().settings_file.exists());
}

#[test]
fn test_invalid_file_fails_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let paths = temp_paths(&temp_dir);
    std::fs::write(&paths.settings_file, r#"{ "splash_duration_secs": -1.0 }"#).unwrap();

    assert!(Config::with_paths(paths).is_err());
}
