//! Configuration tests
//!
//! Tests:
//! - Missing TOML files fall back to defaults
//! - Malformed TOML files are reported
//! - Priority order for config file and scan directory resolution
//!
//! Tests touching NEKO_FEEDER_* environment variables are marked #[serial]
//! so they never run in parallel.

use neko_common::config::{
    config_file_path, load_or_default, load_toml_config, resolve_scan_directory, LoggingConfig,
    SubdirectoryNames, TomlConfig, ENV_CONFIG_FILE, ENV_SCAN_DIRECTORY,
};
use neko_common::Error;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_load_full_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
directory = "/srv/karaoke"
output = "songs.json"

[logging]
level = "debug"

[subdirectories]
cartoon = "Cartoons"
other = "Misc"
"#,
    )
    .unwrap();

    let config = load_toml_config(&path).unwrap();

    assert_eq!(
        config,
        TomlConfig {
            directory: Some(PathBuf::from("/srv/karaoke")),
            output: Some(PathBuf::from("songs.json")),
            logging: LoggingConfig {
                level: "debug".to_string()
            },
            subdirectories: SubdirectoryNames {
                cartoon: "Cartoons".to_string(),
                other: "Misc".to_string(),
                ..SubdirectoryNames::default()
            },
        }
    );
}

#[test]
fn test_malformed_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "directory = [unclosed").unwrap();

    match load_or_default(Some(&path)) {
        Err(Error::Config(message)) => assert!(message.contains("Parse")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_missing_config_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = load_or_default(Some(&temp_dir.path().join("absent.toml"))).unwrap();
    assert_eq!(config, TomlConfig::default());

    assert_eq!(load_or_default(None).unwrap(), TomlConfig::default());
}

#[test]
#[serial]
fn test_config_path_from_environment() {
    env::set_var(ENV_CONFIG_FILE, "/tmp/neko-env.toml");
    assert_eq!(config_file_path(None), Some(PathBuf::from("/tmp/neko-env.toml")));

    // Command line still wins
    assert_eq!(
        config_file_path(Some(Path::new("/tmp/neko-cli.toml"))),
        Some(PathBuf::from("/tmp/neko-cli.toml"))
    );
    env::remove_var(ENV_CONFIG_FILE);
}

#[test]
#[serial]
fn test_config_path_default_location() {
    env::remove_var(ENV_CONFIG_FILE);
    if let Some(path) = config_file_path(None) {
        assert!(path.ends_with("neko-feeder/config.toml"));
    }
}

#[test]
#[serial]
fn test_scan_directory_priority() {
    let config = TomlConfig {
        directory: Some(PathBuf::from("/from/toml")),
        ..TomlConfig::default()
    };

    env::set_var(ENV_SCAN_DIRECTORY, "/from/env");
    assert_eq!(
        resolve_scan_directory(Some(Path::new("/from/cli")), ENV_SCAN_DIRECTORY, &config),
        PathBuf::from("/from/cli")
    );
    assert_eq!(
        resolve_scan_directory(None, ENV_SCAN_DIRECTORY, &config),
        PathBuf::from("/from/env")
    );

    env::remove_var(ENV_SCAN_DIRECTORY);
    assert_eq!(
        resolve_scan_directory(None, ENV_SCAN_DIRECTORY, &config),
        PathBuf::from("/from/toml")
    );
    assert_eq!(
        resolve_scan_directory(None, ENV_SCAN_DIRECTORY, &TomlConfig::default()),
        PathBuf::from(".")
    );
}
