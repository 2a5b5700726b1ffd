//! The authoritative lobby-wide game configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::options::{BoundedOption, Exploration, GameObjective, GameSpeed, StartWares};
use super::update::GameSettingsUpdate;
use crate::addon::{Addon, AddonId};
use crate::core::error::SettingsError;

/// Global game settings of a lobby.
///
/// A plain value type: callers take a copy, change it and hand the whole
/// object back to the store. The addon selection table only contains the
/// addons currently present in this lobby, which may be a subset of the
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalGameSettings {
    pub game_speed: GameSpeed,
    pub game_objective: GameObjective,
    pub start_wares: StartWares,
    pub exploration: Exploration,
    pub lock_teams: bool,
    pub team_view: bool,
    pub random_location: bool,
    selections: BTreeMap<AddonId, u32>,
}

impl Default for GlobalGameSettings {
    fn default() -> Self {
        Self {
            game_speed: GameSpeed::default(),
            game_objective: GameObjective::default(),
            start_wares: StartWares::default(),
            exploration: Exploration::default(),
            lock_teams: false,
            team_view: true,
            random_location: false,
            selections: BTreeMap::new(),
        }
    }
}

impl GlobalGameSettings {
    /// Default settings with every given addon present at its default status.
    pub fn with_addons<'a>(addons: impl IntoIterator<Item = &'a Addon>) -> Self {
        let mut settings = Self::default();
        for addon in addons {
            settings.set_selection(addon.id(), addon.default_status());
        }
        settings
    }

    /// Selected variant of an addon, if it is present.
    pub fn selection(&self, id: AddonId) -> Option<u32> {
        self.selections.get(&id).copied()
    }

    /// Select a variant for an addon, adding it to the table if absent.
    ///
    /// No range check happens here; the store clamps against the catalog
    /// when the settings are committed.
    pub fn set_selection(&mut self, id: AddonId, status: u32) {
        self.selections.insert(id, status);
    }

    /// Drop an addon from the selection table.
    pub fn remove_selection(&mut self, id: AddonId) -> Option<u32> {
        self.selections.remove(&id)
    }

    /// Number of addon slots currently present.
    pub fn addon_count(&self) -> usize {
        self.selections.len()
    }

    /// Addon in the given slot, in `AddonId` order.
    pub fn addon_at(&self, index: usize) -> Option<(AddonId, u32)> {
        self.selections
            .iter()
            .nth(index)
            .map(|(id, status)| (*id, *status))
    }

    /// Iterate `(id, status)` over the present addon slots.
    pub fn selections(&self) -> impl Iterator<Item = (AddonId, u32)> + '_ {
        self.selections.iter().map(|(id, status)| (*id, *status))
    }

    /// Apply a sparse update.
    ///
    /// Every present enumerated field is validated before anything is
    /// assigned, so on error `self` is unchanged.
    pub fn apply(&mut self, update: &GameSettingsUpdate) -> Result<(), SettingsError> {
        let speed = update.speed.map(GameSpeed::from_ordinal).transpose()?;
        let objective = update
            .objective
            .map(GameObjective::from_ordinal)
            .transpose()?;
        let start_wares = update
            .start_wares
            .map(StartWares::from_ordinal)
            .transpose()?;
        let exploration = update.fow.map(Exploration::from_ordinal).transpose()?;

        if let Some(speed) = speed {
            self.game_speed = speed;
        }
        if let Some(objective) = objective {
            self.game_objective = objective;
        }
        if let Some(start_wares) = start_wares {
            self.start_wares = start_wares;
        }
        if let Some(exploration) = exploration {
            self.exploration = exploration;
        }
        if let Some(locked) = update.locked_teams {
            self.lock_teams = locked;
        }
        if let Some(team_view) = update.team_view {
            self.team_view = team_view;
        }
        if let Some(random) = update.random_start_position {
            self.random_location = random;
        }
        Ok(())
    }
}
