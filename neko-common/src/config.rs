//! Configuration loading and scan directory resolution
//!
//! The feeder reads an optional TOML file. A missing file is never fatal:
//! the feeder logs a warning and continues with compiled defaults.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming the TOML config file
pub const ENV_CONFIG_FILE: &str = "NEKO_FEEDER_CONFIG";

/// Environment variable naming the directory to scan
pub const ENV_SCAN_DIRECTORY: &str = "NEKO_FEEDER_DIRECTORY";

/// Contents of the feeder TOML file
///
/// ```toml
/// directory = "/srv/karaoke"
/// output = "songs.json"
///
/// [logging]
/// level = "debug"
///
/// [subdirectories]
/// game = "Games"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Directory to scan for karaoke files
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// File receiving the JSON representations (stdout when unset)
    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Names of the routing subdirectories
    #[serde(default)]
    pub subdirectories: SubdirectoryNames,
}

/// Logging section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level: trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Directory name for each routing category
///
/// Only the first path segment under the scan root is compared against
/// these names, case-sensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubdirectoryNames {
    pub cjk_music: String,
    pub western_music: String,
    pub anime: String,
    pub live_action: String,
    pub game: String,
    pub cartoon: String,
    pub other: String,
}

impl Default for SubdirectoryNames {
    fn default() -> Self {
        Self {
            cjk_music: "CJKmusic".to_string(),
            western_music: "Wmusic".to_string(),
            anime: "Anime".to_string(),
            live_action: "Live action".to_string(),
            game: "Jeu".to_string(),
            cartoon: "Dessin animé".to_string(),
            other: "Autre".to_string(),
        }
    }
}

/// Locate the TOML config file
///
/// Priority order:
/// 1. Command-line argument
/// 2. `NEKO_FEEDER_CONFIG` environment variable
/// 3. `<user config dir>/neko-feeder/config.toml`
///
/// Returns `None` only when no user config directory can be determined.
pub fn config_file_path(cli_arg: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(ENV_CONFIG_FILE) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::config_dir().map(|d| d.join("neko-feeder").join("config.toml"))
}

/// Read and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
}

/// Load the config file, falling back to defaults when it does not exist
///
/// A file that exists but cannot be parsed is an error: silently ignoring
/// it would scan with the wrong routing table.
pub fn load_or_default(path: Option<&Path>) -> Result<TomlConfig> {
    let Some(path) = path else {
        warn!("No config directory available, using default configuration");
        return Ok(TomlConfig::default());
    };

    if !path.exists() {
        warn!(path = %path.display(), "Config file not found, using default configuration");
        return Ok(TomlConfig::default());
    }

    let config = load_toml_config(path)?;
    info!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Resolve the directory to scan
///
/// Priority order:
/// 1. Command-line argument
/// 2. Environment variable
/// 3. TOML `directory` key
/// 4. Current directory
pub fn resolve_scan_directory(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    config: &TomlConfig,
) -> PathBuf {
    if let Some(path) = cli_arg {
        debug!(source = "command line", path = %path.display(), "Scan directory resolved");
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            debug!(source = "environment", path = %path, "Scan directory resolved");
            return PathBuf::from(path);
        }
    }

    if let Some(path) = &config.directory {
        debug!(source = "TOML", path = %path.display(), "Scan directory resolved");
        return path.clone();
    }

    PathBuf::from(".")
}
