//! Configuration file loading for lobby-settings
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LOBBY_*` environment variables (`LOBBY_LOBBY__MAX_PLAYERS=6`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./lobby.toml` or `./.lobby.toml`
//! 4. Global config: `$XDG_CONFIG_HOME/lobby-settings/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLobbyConfig, FileScriptConfig, FileSettingsConfig,
};
pub use loader::ConfigLoader;
