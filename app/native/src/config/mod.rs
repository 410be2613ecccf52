//! Configuration for uibot.
//!
//! Settings are read from a JSONC file. Every field is optional; a missing file
//! or a missing field falls back to the defaults, so the framework works with
//! no configuration at all.

mod types;

pub use types::root::{
    ConfigError, UibotConfig, config_paths, generate_schema, generate_schema_json, load_config,
    load_config_from_path, load_or_default,
};
pub use types::wait::{ExpandConfig, WaitConfig};
