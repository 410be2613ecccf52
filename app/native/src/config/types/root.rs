//! Root configuration types and loading functions.
//!
//! Contains the main `UibotConfig` struct and configuration file loading utilities.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::wait::{ExpandConfig, WaitConfig};
use crate::core::constants::UI_THREAD_NAME;
use crate::core::constants::config::{
    CONFIG_ENV_VAR, CONFIG_FILE, CONFIG_FILE_ALT, CONFIG_FILES_LEGACY,
};

/// Root configuration structure for uibot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UibotConfig {
    /// Default timeout and poll interval of waits.
    pub wait: WaitConfig,

    /// Expand behaviour.
    pub expand: ExpandConfig,

    /// Name given to the toolkit's UI thread.
    /// Default: "uibot-ui"
    pub ui_thread_name: String,
}

impl Default for UibotConfig {
    fn default() -> Self {
        Self {
            wait: WaitConfig::default(),
            expand: ExpandConfig::default(),
            ui_thread_name: UI_THREAD_NAME.to_string(),
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error(
        "No configuration file found. Expected at $UIBOT_CONFIG, ~/.config/uibot/config.jsonc, \
        or ~/.uibot.jsonc"
    )]
    NotFound,

    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl From<ConfigError> for crate::core::Error {
    fn from(err: ConfigError) -> Self { Self::config(err.to_string()) }
}

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations (both `.jsonc` and `.json` variants):
/// 1. The file named by `$UIBOT_CONFIG`, if set
/// 2. `$XDG_CONFIG_HOME/uibot/config.jsonc` or `config.json`, if set
/// 3. `~/.config/uibot/config.jsonc` or `config.json`
/// 4. The platform configuration directory (`dirs::config_dir`)
/// 5. `~/.uibot.jsonc` or `~/.uibot.json` (legacy/simple location)
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    config_paths_from(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

fn config_paths_from(explicit: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut push = |path: PathBuf| {
        if !paths.contains(&path) {
            paths.push(path);
        }
    };

    if let Some(path) = explicit {
        push(path);
    }

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let uibot_dir = PathBuf::from(xdg_config).join("uibot");
        push(uibot_dir.join(CONFIG_FILE));
        push(uibot_dir.join(CONFIG_FILE_ALT));
    }

    if let Some(home) = dirs::home_dir() {
        let uibot_dir = home.join(".config").join("uibot");
        push(uibot_dir.join(CONFIG_FILE));
        push(uibot_dir.join(CONFIG_FILE_ALT));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let uibot_dir = config_dir.join("uibot");
        push(uibot_dir.join(CONFIG_FILE));
        push(uibot_dir.join(CONFIG_FILE_ALT));
    }

    if let Some(home) = dirs::home_dir() {
        for filename in CONFIG_FILES_LEGACY {
            push(home.join(filename));
        }
    }

    paths
}

/// Loads the configuration from a specific file path.
///
/// The configuration file supports JSONC format (JSON with comments).
/// Both single-line (`//`) and multi-line (`/* */`) comments are stripped
/// before parsing. Missing fields take their default values.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the configuration file does not exist.
/// Returns `ConfigError::IoError` if the configuration file could not be read.
/// Returns `ConfigError::ParseError` if the configuration file contains invalid JSON.
pub fn load_config_from_path(path: &Path) -> Result<(UibotConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: UibotConfig = serde_json::from_reader(reader)?;
    Ok((config, path.to_path_buf()))
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of the expected
/// locations.
/// Returns `ConfigError::IoError` if a configuration file exists but could not be read.
/// Returns `ConfigError::ParseError` if the configuration file contains invalid JSON.
pub fn load_config() -> Result<(UibotConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), |path| load_config_from_path(&path))
}

/// Loads the configuration, falling back to defaults when no file exists.
///
/// Returns the path the configuration was read from, if any.
///
/// # Errors
///
/// Returns an error if a configuration file exists but cannot be read or parsed.
pub fn load_or_default() -> Result<(UibotConfig, Option<PathBuf>), ConfigError> {
    match load_config() {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "configuration loaded");
            Ok((config, Some(path)))
        }
        Err(ConfigError::NotFound) => {
            tracing::debug!("no configuration file found, using defaults");
            Ok((UibotConfig::default(), None))
        }
        Err(err) => Err(err),
    }
}

/// Generates the JSON Schema of the configuration file.
#[must_use]
pub fn generate_schema() -> schemars::Schema { schemars::schema_for!(UibotConfig) }

/// Generates the JSON Schema of the configuration file as pretty-printed JSON.
#[must_use]
pub fn generate_schema_json() -> String {
    serde_json::to_string_pretty(&generate_schema()).unwrap_or_default()
}
