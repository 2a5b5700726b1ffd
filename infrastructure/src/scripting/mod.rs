//! Lua scripting host for lobby settings scripts
//!
//! Provides the `LuaSettingsScript` that implements `SettingsScriptPort`
//! from the application layer, backed by mlua (Lua 5.4).
//!
//! # Modules
//!
//! - `sandbox`: strips file, process and C module access
//! - `handles`: `AddonId` and player handle userdata
//! - `settings_api`: the `rttr` object, `ADDON_*` and option constants
//! - `policy`: decoding of `getAllowedChanges` / `getAllowedAddons` / `onSettingsReady`
//! - `lua_engine`: Main engine struct tying everything together

mod handles;
mod lua_engine;
mod policy;
mod sandbox;
mod settings_api;

pub use lua_engine::LuaSettingsScript;
