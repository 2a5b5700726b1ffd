//! Main Lua scripting engine: ties together Sandbox, the `rttr` API and the
//! permission callbacks.
//!
//! `LuaSettingsScript` implements `SettingsScriptPort` from the application layer,
//! providing the concrete Lua 5.4 runtime backed by mlua.

use lobby_application::{ScriptError, SettingsBridge, SettingsScriptPort};
use lobby_domain::{AddonId, AllowedChanges};
use mlua::prelude::*;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info, warn};

use super::policy::{fire_settings_ready, query_allowed_addons, query_allowed_changes};
use super::sandbox::apply_sandbox;
use super::settings_api::register_settings_api;

/// Lua 5.4 settings script host implementing `SettingsScriptPort`.
///
/// Owns the Lua VM. Thread-safe via internal `Mutex` wrapping of the Lua
/// state; calls are expected to arrive from a single game-loop thread.
pub struct LuaSettingsScript {
    lua: Mutex<Lua>,
}

impl LuaSettingsScript {
    /// Create a new VM with the sandbox applied and the settings API
    /// (`rttr`, `ADDON_*`, option constants) registered over `bridge`.
    pub fn new(bridge: SettingsBridge) -> Result<Self, ScriptError> {
        let lua = Lua::new();

        apply_sandbox(&lua)
            .map_err(|e| ScriptError::new(format!("sandbox setup failed: {}", e)))?;

        register_settings_api(&lua, bridge).map_err(lua_to_script_error)?;

        Ok(Self {
            lua: Mutex::new(lua),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Lua>, ScriptError> {
        self.lua
            .lock()
            .map_err(|e| ScriptError::new(format!("lua lock poisoned: {}", e)))
    }
}

impl SettingsScriptPort for LuaSettingsScript {
    fn load_script(&self, path: &Path) -> Result<(), ScriptError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScriptError::new(format!("failed to read {}: {}", path.display(), e))
        })?;
        // `@` marks the chunk name as a file path in Lua error messages
        self.load_source(&format!("@{}", path.display()), &content)?;
        info!(path = %path.display(), "Loaded lobby settings script");
        Ok(())
    }

    fn load_source(&self, name: &str, source: &str) -> Result<(), ScriptError> {
        let lua = self.lock()?;
        lua.load(source)
            .set_name(name)
            .exec()
            .map_err(lua_to_script_error)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn allowed_changes(&self) -> AllowedChanges {
        match self.lock() {
            Ok(lua) => query_allowed_changes(&lua),
            Err(e) => {
                warn!(error = %e, "Cannot query allowed changes");
                AllowedChanges::Undeclared
            }
        }
    }

    fn allowed_addons(&self) -> Vec<AddonId> {
        match self.lock() {
            Ok(lua) => query_allowed_addons(&lua),
            Err(e) => {
                warn!(error = %e, "Cannot query allowed addons");
                Vec::new()
            }
        }
    }

    fn event_settings_ready(&self) -> Result<(), ScriptError> {
        let lua = self.lock()?;
        match fire_settings_ready(&lua) {
            Ok(ran) => {
                debug!(ran, "Settings ready hook");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "onSettingsReady failed");
                Err(lua_to_script_error(e))
            }
        }
    }
}

/// Convert an mlua error to a ScriptError.
fn lua_to_script_error(e: LuaError) -> ScriptError {
    ScriptError::new(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BuiltinAddonCatalog;
    use crate::store::InMemorySettingsStore;
    use lobby_application::SettingsStorePort;
    use lobby_domain::{ChangeCategory, GameSpeed};
    use std::sync::Arc;

    fn make_engine() -> (LuaSettingsScript, Arc<InMemorySettingsStore>) {
        let catalog = Arc::new(BuiltinAddonCatalog::builtin());
        let store = Arc::new(InMemorySettingsStore::with_catalog_defaults(
            4,
            catalog.clone(),
        ));
        let bridge = SettingsBridge::new(store.clone(), catalog);
        (LuaSettingsScript::new(bridge).unwrap(), store)
    }

    #[test]
    fn test_engine_is_available() {
        let (engine, _) = make_engine();
        assert!(engine.is_available());
    }

    #[test]
    fn test_engine_load_script_applies_settings() {
        let (engine, store) = make_engine();

        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("lobby.lua");
        std::fs::write(
            &script_path,
            r#"
            rttr:SetGameSettings({ speed = GS_VERYFAST, teamView = false })
            rttr:SetAddon(ADDON_TRADE, true)
        "#,
        )
        .unwrap();

        engine.load_script(&script_path).unwrap();

        let ggs = store.global_settings().unwrap();
        assert_eq!(ggs.game_speed, GameSpeed::VeryFast);
        assert!(!ggs.team_view);
        assert_eq!(ggs.selection(AddonId::Trade), Some(1));
    }

    #[test]
    fn test_engine_load_nonexistent_script() {
        let (engine, _) = make_engine();
        let result = engine.load_script(Path::new("/nonexistent/lobby.lua"));
        assert!(result.is_err());
    }

    #[test]
    fn test_engine_script_syntax_error_names_chunk() {
        let (engine, _) = make_engine();

        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("bad.lua");
        std::fs::write(&script_path, "this is not valid lua {{{{").unwrap();

        let result = engine.load_script(&script_path);
        assert!(result.unwrap_err().message.contains("bad.lua"));
    }

    #[test]
    fn test_engine_validation_error_reaches_driver_not_store() {
        let (engine, store) = make_engine();
        let err = engine
            .load_source("inline", "rttr:SetGameSettings({ speed = 99 })")
            .unwrap_err();
        assert!(err.message.contains("speed is invalid"), "{}", err.message);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_engine_sandbox_active() {
        let (engine, _) = make_engine();
        let lua = engine.lua.lock().unwrap();
        let io: LuaValue = lua.globals().get("io").unwrap();
        assert_eq!(io, LuaValue::Nil);
    }

    #[test]
    fn test_is_change_allowed_without_callback_returns_default() {
        let (engine, _) = make_engine();
        assert!(!engine.is_change_allowed("speed", false));
        assert!(engine.is_change_allowed("speed", true));
    }

    #[test]
    fn test_is_change_allowed_with_callback() {
        let (engine, _) = make_engine();
        engine
            .load_source(
                "perm",
                r#"
                function getAllowedChanges()
                    return { speed = true, swapping = false, ownColor = 1 }
                end
            "#,
            )
            .unwrap();

        assert!(engine.is_change_allowed("speed", false));
        assert!(!engine.is_category_allowed(ChangeCategory::Swapping, true));
        assert!(engine.is_category_allowed(ChangeCategory::OwnColor, true));
        assert!(!engine.is_category_allowed(ChangeCategory::OwnColor, false));
        assert!(engine.is_category_allowed(ChangeCategory::AiTeam, true));
    }

    #[test]
    fn test_permission_callback_may_read_settings_api() {
        let (engine, _) = make_engine();
        engine
            .load_source(
                "perm",
                r#"
                function getAllowedChanges()
                    return { playerState = rttr:GetPlayerCount() > 2 }
                end
            "#,
            )
            .unwrap();
        assert!(engine.is_category_allowed(ChangeCategory::PlayerState, false));
    }

    #[test]
    fn test_allowed_addons_roundtrip_through_engine() {
        let (engine, _) = make_engine();
        assert!(engine.allowed_addons().is_empty());

        engine
            .load_source(
                "addons",
                "function getAllowedAddons() return { ADDON_LIMIT_CATAPULTS } end",
            )
            .unwrap();
        assert_eq!(engine.allowed_addons(), vec![AddonId::LimitCatapults]);

        engine
            .load_source("addons", "function getAllowedAddons() return 'all' end")
            .unwrap();
        assert!(engine.allowed_addons().is_empty());
    }

    #[test]
    fn test_settings_ready_without_hook() {
        let (engine, _) = make_engine();
        assert!(engine.event_settings_ready().is_ok());
    }

    #[test]
    fn test_settings_ready_hook_changes_settings() {
        let (engine, store) = make_engine();
        engine
            .load_source(
                "ready",
                r#"
                function onSettingsReady()
                    rttr:SetGameSettings({ lockedTeams = true })
                    rttr:ResetAddons()
                end
            "#,
            )
            .unwrap();

        engine.event_settings_ready().unwrap();

        assert!(store.global_settings().unwrap().lock_teams);
    }

    #[test]
    fn test_settings_ready_hook_failure_is_reported() {
        let (engine, store) = make_engine();
        engine
            .load_source(
                "ready",
                "function onSettingsReady() rttr:SetGameSettings({ fow = 12 }) end",
            )
            .unwrap();

        let err = engine.event_settings_ready().unwrap_err();
        assert!(err.message.contains("fow is invalid"), "{}", err.message);
        assert_eq!(store.revision(), 0);
    }
}
