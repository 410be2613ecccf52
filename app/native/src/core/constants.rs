//! Application constants for uibot.
//!
//! This module contains global constants used throughout the crate, including
//! the application name and the default timing values used when no
//! configuration overrides them.

/// The application name.
pub const APP_NAME: &str = "uibot";

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default name of the toolkit's UI thread.
pub const UI_THREAD_NAME: &str = "uibot-ui";

/// Default timing values for waits.
pub mod wait {
    /// Default wait timeout in milliseconds.
    pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

    /// Default delay between two polls of a wait condition, in milliseconds.
    pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;
}

/// Default configuration file names.
pub mod config {
    /// Environment variable that points at an explicit config file.
    pub const CONFIG_ENV_VAR: &str = "UIBOT_CONFIG";

    /// Primary config file name.
    pub const CONFIG_FILE: &str = "config.jsonc";

    /// Alternative config file name (JSON without comments).
    pub const CONFIG_FILE_ALT: &str = "config.json";

    /// Legacy config file names in the home directory.
    pub const CONFIG_FILES_LEGACY: &[&str] = &[".uibot.jsonc", ".uibot.json"];
}
