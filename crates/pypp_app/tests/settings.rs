use std::fs;

use pretty_assertions::assert_eq;
use pypp_app::{load_settings, parse_settings, read_settings, ReportSettings, SettingsError};
use tempfile::TempDir;

#[test]
fn partial_settings_fill_in_defaults() {
    let settings = parse_settings("(delimiter: ',', top: 3)").unwrap();
    assert_eq!(
        settings,
        ReportSettings {
            delimiter: ',',
            top: 3,
            ..ReportSettings::default()
        }
    );
}

#[test]
fn invalid_settings_are_a_parse_error() {
    let err = parse_settings("(delimiter: 42)").unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)), "got {err:?}");
}

#[test]
fn missing_file_is_an_io_error_and_loads_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.ron");
    assert!(matches!(read_settings(&path), Err(SettingsError::Io(_))));
    assert_eq!(load_settings(Some(&path)), ReportSettings::default());
}

#[test]
fn loads_settings_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("report.ron");
    fs::write(&path, "(lowercase: true, skip_empty: false, at_most: 2)").unwrap();

    let settings = load_settings(Some(&path));
    assert!(settings.lowercase);
    assert!(!settings.skip_empty);
    assert_eq!(settings.at_most, 2);
    assert_eq!(settings.delimiter, ' ');
}

#[test]
fn no_path_means_defaults() {
    assert_eq!(load_settings(None), ReportSettings::default());
}
