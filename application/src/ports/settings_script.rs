//! Lobby settings script port: interface for the embedded script host.
//!
//! This port abstracts the scripting engine so that:
//! - The application layer and the driver don't depend on mlua
//! - A no-op implementation (`NoSettingsScript`) is always available
//!
//! The driver calls these queries before letting a human change a setting,
//! and fires the ready hook once the lobby settings are final.

use lobby_domain::{AddonId, AllowedChanges, ChangeCategory};
use std::path::Path;
use thiserror::Error;

/// Error from a scripting engine operation.
#[derive(Debug, Clone, Error)]
#[error("script error: {message}")]
pub struct ScriptError {
    pub message: String,
}

impl ScriptError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Port for the lobby settings script.
///
/// None of the permission queries can fail: a missing or malformed script
/// callback resolves to a safe default.
pub trait SettingsScriptPort: Send + Sync {
    /// Load and execute a Lua script file.
    fn load_script(&self, path: &Path) -> Result<(), ScriptError>;

    /// Load and execute an in-memory chunk under the given name.
    fn load_source(&self, name: &str, source: &str) -> Result<(), ScriptError>;

    /// Whether the engine is actually available (i.e. not `NoSettingsScript`).
    fn is_available(&self) -> bool;

    /// Ask the script's `getAllowedChanges()` callback, re-evaluated on every call.
    fn allowed_changes(&self) -> AllowedChanges;

    /// Whether a change in `category` is permitted, `default` when the
    /// script does not say.
    fn is_change_allowed(&self, category: &str, default: bool) -> bool {
        self.allowed_changes().is_change_allowed(category, default)
    }

    /// [`SettingsScriptPort::is_change_allowed`] for a known category.
    fn is_category_allowed(&self, category: ChangeCategory, default: bool) -> bool {
        self.is_change_allowed(category.as_str(), default)
    }

    /// Addons the script explicitly allows. Empty when undeclared or malformed.
    fn allowed_addons(&self) -> Vec<AddonId>;

    /// Invoke the script's `onSettingsReady()` hook if it defines one.
    ///
    /// A missing hook is not an error. A hook that raises is reported as
    /// `ScriptError` for the driver to handle.
    fn event_settings_ready(&self) -> Result<(), ScriptError>;
}

/// No-op script used when the lobby has no settings script.
///
/// Every permission query returns its default, no addon is explicitly
/// allowed, and the ready hook does nothing.
pub struct NoSettingsScript;

impl SettingsScriptPort for NoSettingsScript {
    fn load_script(&self, _path: &Path) -> Result<(), ScriptError> {
        Ok(())
    }

    fn load_source(&self, _name: &str, _source: &str) -> Result<(), ScriptError> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        false
    }

    fn allowed_changes(&self) -> AllowedChanges {
        AllowedChanges::Undeclared
    }

    fn allowed_addons(&self) -> Vec<AddonId> {
        Vec::new()
    }

    fn event_settings_ready(&self) -> Result<(), ScriptError> {
        Ok(())
    }
}
