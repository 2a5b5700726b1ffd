//! Infrastructure layer for lobby-settings
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the builtin addon catalog, the in-memory
//! settings store, the Lua settings script host and configuration loading.

pub mod catalog;
pub mod config;
pub mod scripting;
pub mod store;

// Re-export commonly used types
pub use catalog::BuiltinAddonCatalog;
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLobbyConfig, FileScriptConfig,
    FileSettingsConfig,
};
pub use scripting::LuaSettingsScript;
pub use store::InMemorySettingsStore;
