//! Settings bridge use case
//!
//! Validates externally supplied values (from the lobby script or the
//! driver) and commits them to the authoritative store. Every mutation
//! follows the same transaction: snapshot the settings, change the local
//! working copy, then replace the store's copy in one call. A validation
//! error returns before the replace, so the store never sees a partial
//! update.

use crate::ports::addon_catalog::AddonCatalogPort;
use crate::ports::settings_store::SettingsStorePort;
use lobby_domain::{AddonId, GameSettingsUpdate, GlobalGameSettings, PlayerRef, SettingsError};
use std::sync::Arc;
use tracing::debug;

/// Mediator between script-facing operations and the settings store.
///
/// Holds no copy of the settings; every operation reads a fresh snapshot.
#[derive(Clone)]
pub struct SettingsBridge {
    store: Arc<dyn SettingsStorePort>,
    catalog: Arc<dyn AddonCatalogPort>,
}

impl SettingsBridge {
    pub fn new(store: Arc<dyn SettingsStorePort>, catalog: Arc<dyn AddonCatalogPort>) -> Self {
        Self { store, catalog }
    }

    pub fn catalog(&self) -> &Arc<dyn AddonCatalogPort> {
        &self.catalog
    }

    /// Number of player slots in the lobby.
    pub fn player_count(&self) -> u32 {
        self.store.max_player_count()
    }

    /// Handle for the player in slot `index`.
    pub fn player(&self, index: u32) -> Result<PlayerRef, SettingsError> {
        let count = self.player_count();
        if index >= count {
            return Err(SettingsError::InvalidPlayerIndex { index, count });
        }
        Ok(PlayerRef::new(index))
    }

    /// Snapshot of the current settings.
    pub fn settings(&self) -> Result<GlobalGameSettings, SettingsError> {
        self.store.global_settings()
    }

    /// Select variant `value` for an addon.
    ///
    /// The value is not range-checked here; the store clamps it.
    pub fn set_addon(&self, id: AddonId, value: u32) -> Result<(), SettingsError> {
        let mut ggs = self.store.global_settings()?;
        ggs.set_selection(id, value);
        self.commit(ggs, "SetAddon")
    }

    /// Boolean form of [`SettingsBridge::set_addon`]: `true` selects variant 1,
    /// `false` variant 0.
    pub fn set_bool_addon(&self, id: AddonId, value: bool) -> Result<(), SettingsError> {
        self.set_addon(id, u32::from(value))
    }

    /// Put every addon present in the settings back to its catalog default.
    ///
    /// Present addons unknown to the catalog keep their selection.
    pub fn reset_addons(&self) -> Result<(), SettingsError> {
        let mut ggs = self.store.global_settings()?;
        for index in 0..ggs.addon_count() {
            let Some((id, _)) = ggs.addon_at(index) else {
                continue;
            };
            let Some(addon) = self.catalog.addon(id) else {
                debug!(addon = %id, "Skipping addon missing from catalog");
                continue;
            };
            ggs.set_selection(addon.id(), addon.default_status());
        }
        self.commit(ggs, "ResetAddons")
    }

    /// Apply a sparse settings update.
    ///
    /// The first out-of-range field aborts the call and nothing is committed.
    pub fn set_game_settings(&self, update: &GameSettingsUpdate) -> Result<(), SettingsError> {
        let mut ggs = self.store.global_settings()?;
        ggs.apply(update)?;
        self.commit(ggs, "SetGameSettings")
    }

    fn commit(&self, ggs: GlobalGameSettings, operation: &'static str) -> Result<(), SettingsError> {
        debug!(operation, "Replacing global game settings");
        self.store.change_global_settings(ggs)
    }
}
