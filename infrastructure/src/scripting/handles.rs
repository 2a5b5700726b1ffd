//! Script-visible handle types.
//!
//! `ADDON_*` constants are `LuaAddonId` userdata rather than plain integers,
//! so an allowed-addons list can be type-checked. Player handles only expose
//! their slot index.

use lobby_domain::{AddonId, PlayerRef};
use mlua::prelude::*;

/// Userdata wrapper for [`AddonId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuaAddonId(pub AddonId);

impl LuaUserData for LuaAddonId {
    fn add_methods<M: LuaUserDataMethods<Self>>(methods: &mut M) {
        methods.add_method("GetName", |_, this, ()| Ok(this.0.as_str()));

        methods.add_meta_method(LuaMetaMethod::Eq, |_, this, other: LuaValue| {
            Ok(addon_id_of(&other) == Some(this.0))
        });
        methods.add_meta_method(LuaMetaMethod::Lt, |_, this, other: LuaValue| {
            Ok(addon_id_of(&other).is_some_and(|other| this.0 < other))
        });
        methods.add_meta_method(LuaMetaMethod::Le, |_, this, other: LuaValue| {
            Ok(addon_id_of(&other).is_some_and(|other| this.0 <= other))
        });
        methods.add_meta_method(LuaMetaMethod::ToString, |_, this, ()| {
            Ok(this.0.constant_name())
        });
    }
}

/// Userdata wrapper for [`PlayerRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuaPlayer(pub PlayerRef);

impl LuaUserData for LuaPlayer {
    fn add_methods<M: LuaUserDataMethods<Self>>(methods: &mut M) {
        methods.add_method("GetIndex", |_, this, ()| Ok(this.0.index()));

        methods.add_meta_method(LuaMetaMethod::Eq, |_, this, other: LuaValue| {
            let same = match other {
                LuaValue::UserData(ud) => ud.borrow::<LuaPlayer>().is_ok_and(|p| p.0 == this.0),
                _ => false,
            };
            Ok(same)
        });
        methods.add_meta_method(LuaMetaMethod::ToString, |_, this, ()| Ok(this.0.to_string()));
    }
}

/// Extract an [`AddonId`] from a Lua value, if it is a `LuaAddonId`.
pub fn addon_id_of(value: &LuaValue) -> Option<AddonId> {
    match value {
        LuaValue::UserData(ud) => ud.borrow::<LuaAddonId>().ok().map(|id| id.0),
        _ => None,
    }
}
