//! `rttr` Lua API: the settings surface exposed to lobby scripts.
//!
//! ```lua
//! local n = rttr:GetPlayerCount()
//! local host = rttr:GetPlayer(0)
//! rttr:SetAddon(ADDON_LIMIT_CATAPULTS, 3)
//! rttr:SetAddon(ADDON_CHARBURNER, true)
//! rttr:ResetAddons()
//! rttr:SetGameSettings({ speed = GS_FAST, fow = EXP_CLASSIC, lockedTeams = true })
//! ```
//!
//! Every method forwards to [`SettingsBridge`]. Validation errors are raised
//! into Lua as external errors carrying the [`SettingsError`] message.

use lobby_application::SettingsBridge;
use lobby_domain::{
    AddonId, BoundedOption, Exploration, GameObjective, GameSettingsUpdate, GameSpeed,
    SettingsError, StartWares,
};
use mlua::UserDataRef;
use mlua::prelude::*;

use super::handles::{LuaAddonId, LuaPlayer};

/// Global name of the settings object.
pub const SETTINGS_GLOBAL: &str = "rttr";

/// The `rttr` userdata. Methods are registered once, here, by name.
pub struct SettingsApi {
    bridge: SettingsBridge,
}

impl LuaUserData for SettingsApi {
    fn add_methods<M: LuaUserDataMethods<Self>>(methods: &mut M) {
        methods.add_method("GetPlayerCount", |_, this, ()| {
            Ok(this.bridge.player_count())
        });

        methods.add_method("GetPlayer", |lua, this, index: u32| {
            let player = this.bridge.player(index).map_err(LuaError::external)?;
            lua.create_userdata(LuaPlayer(player))
        });

        methods.add_method(
            "SetAddon",
            |_, this, (id, value): (UserDataRef<LuaAddonId>, LuaValue)| {
                let id = id.0;
                let result = match value {
                    LuaValue::Boolean(selected) => this.bridge.set_bool_addon(id, selected),
                    other => addon_status(id, &other)
                        .and_then(|status| this.bridge.set_addon(id, status)),
                };
                result.map_err(LuaError::external)
            },
        );

        methods.add_method("ResetAddons", |_, this, ()| {
            this.bridge.reset_addons().map_err(LuaError::external)
        });

        methods.add_method("SetGameSettings", |_, this, settings: LuaTable| {
            let update = decode_settings_update(&settings)?;
            this.bridge
                .set_game_settings(&update)
                .map_err(LuaError::external)
        });
    }
}

/// Install `rttr`, the `ADDON_*` constants and the option constants
/// (`GS_*`, `GO_*`, `SWR_*`, `EXP_*`) as globals.
pub fn register_settings_api(lua: &Lua, bridge: SettingsBridge) -> LuaResult<()> {
    let globals = lua.globals();

    globals.set(SETTINGS_GLOBAL, lua.create_userdata(SettingsApi { bridge })?)?;

    for id in AddonId::ALL {
        globals.set(id.constant_name(), lua.create_userdata(LuaAddonId(id))?)?;
    }

    register_option_constants::<GameSpeed>(&globals)?;
    register_option_constants::<GameObjective>(&globals)?;
    register_option_constants::<StartWares>(&globals)?;
    register_option_constants::<Exploration>(&globals)?;

    Ok(())
}

fn register_option_constants<T: BoundedOption>(globals: &LuaTable) -> LuaResult<()> {
    for value in T::ALL {
        globals.set(value.constant_name(), value.ordinal())?;
    }
    Ok(())
}

/// Decode the sparse table passed to `SetGameSettings`.
///
/// `nil` fields are absent. Enumerated fields must be integers (range is
/// checked by the bridge); boolean fields follow Lua truthiness.
pub(crate) fn decode_settings_update(table: &LuaTable) -> LuaResult<GameSettingsUpdate> {
    let update = GameSettingsUpdate {
        speed: ordinal_field(table, GameSpeed::FIELD)?,
        objective: ordinal_field(table, GameObjective::FIELD)?,
        start_wares: ordinal_field(table, StartWares::FIELD)?,
        fow: ordinal_field(table, Exploration::FIELD)?,
        locked_teams: flag_field(table, "lockedTeams")?,
        team_view: flag_field(table, "teamView")?,
        random_start_position: flag_field(table, "randomStartPosition")?,
    };
    Ok(update)
}

fn ordinal_field(table: &LuaTable, field: &str) -> LuaResult<Option<i64>> {
    match table.get::<LuaValue>(field)? {
        LuaValue::Nil => Ok(None),
        value => integer_value(field, &value)
            .map(Some)
            .map_err(LuaError::external),
    }
}

fn flag_field(table: &LuaTable, field: &str) -> LuaResult<Option<bool>> {
    match table.get::<LuaValue>(field)? {
        LuaValue::Nil => Ok(None),
        LuaValue::Boolean(b) => Ok(Some(b)),
        _ => Ok(Some(true)),
    }
}

fn integer_value(field: &str, value: &LuaValue) -> Result<i64, SettingsError> {
    match value {
        LuaValue::Integer(n) => Ok(*n),
        LuaValue::Number(n) if n.fract() == 0.0 && n.is_finite() => Ok(*n as i64),
        other => Err(SettingsError::WrongType {
            field: field.to_string(),
            expected: "integer",
            actual: other.type_name().to_string(),
        }),
    }
}

fn addon_status(id: AddonId, value: &LuaValue) -> Result<u32, SettingsError> {
    let field = id.constant_name();
    let n = integer_value(&field, value)?;
    u32::try_from(n).map_err(|_| SettingsError::OutOfRange {
        field: "addon value",
        value: n,
        max: u32::MAX,
    })
}
