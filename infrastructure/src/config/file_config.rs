//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use lobby_application::AddonCatalogPort;
use lobby_domain::{AddonId, Exploration, GameObjective, GameSpeed, GlobalGameSettings, StartWares};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("max_players cannot be 0")]
    NoPlayerSlots,

    #[error("unknown addon in [settings.addons]: '{0}'")]
    UnknownAddon(String),

    #[error("addon '{0}' is not available in this build")]
    AddonNotInCatalog(String),
}

/// Raw lobby configuration from TOML (`[lobby]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLobbyConfig {
    /// Number of player slots
    pub max_players: u32,
}

impl Default for FileLobbyConfig {
    fn default() -> Self {
        Self { max_players: 8 }
    }
}

/// Raw initial game settings from TOML (`[settings]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettingsConfig {
    pub speed: GameSpeed,
    pub objective: GameObjective,
    pub start_wares: StartWares,
    pub fow: Exploration,
    pub locked_teams: bool,
    pub team_view: bool,
    pub random_start_position: bool,
    /// Addon name → selected variant, overriding catalog defaults
    pub addons: BTreeMap<String, u32>,
}

impl Default for FileSettingsConfig {
    fn default() -> Self {
        let defaults = GlobalGameSettings::default();
        Self {
            speed: defaults.game_speed,
            objective: defaults.game_objective,
            start_wares: defaults.start_wares,
            fow: defaults.exploration,
            locked_teams: defaults.lock_teams,
            team_view: defaults.team_view,
            random_start_position: defaults.random_location,
            addons: BTreeMap::new(),
        }
    }
}

/// Raw script configuration from TOML (`[script]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScriptConfig {
    /// Lobby settings script to load
    pub path: Option<PathBuf>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub lobby: FileLobbyConfig,
    pub settings: FileSettingsConfig,
    pub script: FileScriptConfig,
}

impl FileConfig {
    /// Validate values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.lobby.max_players == 0 {
            return Err(ConfigValidationError::NoPlayerSlots);
        }
        for name in self.settings.addons.keys() {
            name.parse::<AddonId>()
                .map_err(|_| ConfigValidationError::UnknownAddon(name.clone()))?;
        }
        Ok(())
    }

    /// Build the initial lobby settings: catalog defaults, then the
    /// configured overrides.
    pub fn to_global_settings(
        &self,
        catalog: &dyn AddonCatalogPort,
    ) -> Result<GlobalGameSettings, ConfigValidationError> {
        self.validate()?;

        let mut ggs = GlobalGameSettings::with_addons(&catalog.addons());
        ggs.game_speed = self.settings.speed;
        ggs.game_objective = self.settings.objective;
        ggs.start_wares = self.settings.start_wares;
        ggs.exploration = self.settings.fow;
        ggs.lock_teams = self.settings.locked_teams;
        ggs.team_view = self.settings.team_view;
        ggs.random_location = self.settings.random_start_position;

        for (name, status) in &self.settings.addons {
            let id = name
                .parse::<AddonId>()
                .map_err(|_| ConfigValidationError::UnknownAddon(name.clone()))?;
            if catalog.addon(id).is_none() {
                return Err(ConfigValidationError::AddonNotInCatalog(name.clone()));
            }
            ggs.set_selection(id, *status);
        }
        Ok(ggs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BuiltinAddonCatalog;

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.lobby.max_players, 8);
        assert!(config.script.path.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
[lobby]
max_players = 4

[settings]
speed = "very_fast"
objective = "total_domination"
start_wares = "plenty"
fow = "fog_of_war_explored"
locked_teams = true

[settings.addons]
LIMIT_CATAPULTS = 3
ADDON_TRADE = 1

[script]
path = "maps/duel.lua"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.lobby.max_players, 4);
        assert_eq!(config.settings.speed, GameSpeed::VeryFast);
        assert_eq!(config.settings.objective, GameObjective::TotalDomination);
        assert_eq!(config.settings.start_wares, StartWares::Plenty);
        assert_eq!(config.settings.fow, Exploration::FogOfWarExplored);
        assert!(config.settings.locked_teams);
        assert!(config.settings.team_view);
        assert_eq!(config.settings.addons.get("LIMIT_CATAPULTS"), Some(&3));
        assert_eq!(config.script.path, Some(PathBuf::from("maps/duel.lua")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config: FileConfig = toml::from_str("[settings]\nteam_view = false\n").unwrap();
        assert_eq!(config.lobby.max_players, 8);
        assert_eq!(config.settings.speed, GameSpeed::Normal);
        assert!(!config.settings.team_view);
    }

    #[test]
    fn test_zero_players_rejected() {
        let mut config = FileConfig::default();
        config.lobby.max_players = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::NoPlayerSlots));
    }

    #[test]
    fn test_unknown_addon_rejected() {
        let mut config = FileConfig::default();
        config.settings.addons.insert("NOT_AN_ADDON".into(), 1);
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::UnknownAddon("NOT_AN_ADDON".into()))
        );
    }

    #[test]
    fn test_to_global_settings_applies_overrides() {
        let mut config = FileConfig::default();
        config.settings.speed = GameSpeed::Fast;
        config.settings.team_view = false;
        config.settings.addons.insert("charburner".into(), 1);

        let ggs = config
            .to_global_settings(&BuiltinAddonCatalog::builtin())
            .unwrap();

        assert_eq!(ggs.game_speed, GameSpeed::Fast);
        assert!(!ggs.team_view);
        assert_eq!(ggs.selection(AddonId::Charburner), Some(1));
        assert_eq!(ggs.selection(AddonId::Trade), Some(0));
    }

    #[test]
    fn test_to_global_settings_rejects_addon_missing_from_catalog() {
        let mut config = FileConfig::default();
        config.settings.addons.insert("TRADE".into(), 1);
        let catalog = BuiltinAddonCatalog::without(&[AddonId::Trade]);
        assert_eq!(
            config.to_global_settings(&catalog),
            Err(ConfigValidationError::AddonNotInCatalog("TRADE".into()))
        );
    }
}
