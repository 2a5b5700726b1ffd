//! Application layer for lobby-settings
//!
//! This crate contains the port definitions for the external collaborators
//! (settings store, addon catalog, lobby script) and the settings bridge use
//! case that validates and commits changes. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    addon_catalog::AddonCatalogPort,
    settings_script::{NoSettingsScript, ScriptError, SettingsScriptPort},
    settings_store::SettingsStorePort,
};
pub use use_cases::settings_bridge::SettingsBridge;
