//! Settings persistence round-trips through the TOML file.

use codeshrine_core::{ConfigError, Settings};

#[test]
fn save_then_load_preserves_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut settings = Settings::default();
    settings.onboarding_completed = true;
    settings.rewards.periodic_probability = 0.5;
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert!(loaded.onboarding_completed);
    assert_eq!(loaded.rewards.periodic_probability, 0.5);
    assert_eq!(loaded.rewards.start_probability, 0.9);
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("nope.toml")).unwrap();
    assert!(!settings.onboarding_completed);
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    Settings::default().save_to(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn garbage_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "not = [valid").unwrap();
    match Settings::load_from(&path) {
        Err(ConfigError::ParseFailed(_)) => {}
        other => panic!("expected ParseFailed, got {other:?}"),
    }
}
