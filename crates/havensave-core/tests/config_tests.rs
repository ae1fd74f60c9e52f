#![allow(clippy::unwrap_used, clippy::expect_used)]

use havensave_core::config::{BackupMode, Settings};
use havensave_core::HavenError;
use std::path::PathBuf;

#[test]
fn test_save_then_load_preserves_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("havensave.toml");
    let settings = Settings {
        backup_folder: dir.path().join("backups"),
        backup_count: 7,
        auto_backup: BackupMode::Auto,
        last_used_folder: Some(PathBuf::from("/saves/slot1")),
        catalog_path: None,
        compare_depth: 4,
    };

    assert!(Settings::is_first_run(&path));
    settings.save_to_file(&path).unwrap();
    assert!(!Settings::is_first_run(&path));

    assert_eq!(Settings::load_from_file(&path).unwrap(), settings);
}

#[test]
fn test_explicit_path_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("explicit.toml");
    std::fs::write(&path, "backup_count = 9\n").unwrap();

    let settings = Settings::resolve(Some(&path)).unwrap();

    assert_eq!(settings.backup_count, 9);
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "backup_count = 0\n").unwrap();

    let err = Settings::load_from_file(&path).unwrap_err();

    assert!(matches!(err, HavenError::InvalidConfig { .. }));
}

#[test]
fn test_unknown_mode_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mode.toml");
    std::fs::write(&path, "auto_backup = \"sometimes\"\n").unwrap();

    let err = Settings::load_from_file(&path).unwrap_err();

    assert!(matches!(err, HavenError::InvalidConfig { .. }));
}

#[test]
fn test_missing_explicit_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::resolve(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, HavenError::Io { .. }));
}
