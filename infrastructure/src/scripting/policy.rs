//! Permission callbacks defined by the lobby script.
//!
//! The script may define three optional globals:
//!
//! ```lua
//! function getAllowedChanges()
//!     return { general = false, addonsSome = true, ownTeam = true }
//! end
//!
//! function getAllowedAddons()
//!     return { ADDON_CHARBURNER, ADDON_TRADE }
//! end
//!
//! function onSettingsReady()
//!     rttr:SetGameSettings({ lockedTeams = true })
//! end
//! ```
//!
//! The callbacks are looked up and called again on every query. Each decode
//! below is total: missing or malformed answers resolve to a fallback value.

use lobby_domain::{AddonId, AllowedChanges, PermissionTable};
use mlua::prelude::*;
use tracing::warn;

use super::handles::addon_id_of;

pub const ALLOWED_CHANGES_FN: &str = "getAllowedChanges";
pub const ALLOWED_ADDONS_FN: &str = "getAllowedAddons";
pub const SETTINGS_READY_FN: &str = "onSettingsReady";

/// Look up a global function. `None` when absent, not a function, or the
/// lookup itself raised.
fn script_callback(lua: &Lua, name: &str) -> Option<LuaFunction> {
    match lua.globals().get::<LuaValue>(name) {
        Ok(LuaValue::Function(callback)) => Some(callback),
        _ => None,
    }
}

/// Call `getAllowedChanges()` and decode its table.
pub fn query_allowed_changes(lua: &Lua) -> AllowedChanges {
    let Some(callback) = script_callback(lua, ALLOWED_CHANGES_FN) else {
        return AllowedChanges::Undeclared;
    };
    match callback.call::<LuaValue>(()) {
        Ok(LuaValue::Table(table)) => AllowedChanges::Declared(decode_permission_table(table)),
        Ok(_) => AllowedChanges::Undeclared,
        Err(e) => {
            warn!(callback = ALLOWED_CHANGES_FN, error = %e, "Permission callback failed");
            AllowedChanges::Undeclared
        }
    }
}

/// String keys only; non-boolean values are kept as untyped entries.
fn decode_permission_table(table: LuaTable) -> PermissionTable {
    table
        .pairs::<LuaValue, LuaValue>()
        .filter_map(|pair| pair.ok())
        .filter_map(|(key, value)| {
            let LuaValue::String(key) = key else {
                return None;
            };
            let name = key.to_str().ok()?.to_string();
            let flag = match value {
                LuaValue::Boolean(b) => Some(b),
                _ => None,
            };
            Some((name, flag))
        })
        .collect()
}

/// Call `getAllowedAddons()` and decode its sequence of addon ids.
pub fn query_allowed_addons(lua: &Lua) -> Vec<AddonId> {
    let Some(callback) = script_callback(lua, ALLOWED_ADDONS_FN) else {
        return Vec::new();
    };
    let value = match callback.call::<LuaValue>(()) {
        Ok(value) => value,
        Err(e) => {
            warn!(callback = ALLOWED_ADDONS_FN, error = %e, "Permission callback failed");
            return Vec::new();
        }
    };
    decode_addon_list(value).unwrap_or_else(|| {
        warn!("Invalid type returned by {}", ALLOWED_ADDONS_FN);
        Vec::new()
    })
}

/// A table whose entries are exactly `1..=n`, each an `ADDON_*` value.
fn decode_addon_list(value: LuaValue) -> Option<Vec<AddonId>> {
    let LuaValue::Table(table) = value else {
        return None;
    };
    let len = table.raw_len();
    let mut entries = 0usize;
    for pair in table.clone().pairs::<LuaValue, LuaValue>() {
        pair.ok()?;
        entries += 1;
    }
    if entries != len {
        return None;
    }
    (1..=len)
        .map(|i| {
            table
                .raw_get::<LuaValue>(i)
                .ok()
                .and_then(|value| addon_id_of(&value))
        })
        .collect()
}

/// Call `onSettingsReady()` if defined, discarding its return values.
///
/// Returns whether a hook ran.
pub fn fire_settings_ready(lua: &Lua) -> LuaResult<bool> {
    let Some(callback) = script_callback(lua, SETTINGS_READY_FN) else {
        return Ok(false);
    };
    callback.call::<()>(())?;
    Ok(true)
}
