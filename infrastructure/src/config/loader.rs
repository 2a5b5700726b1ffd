//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["lobby.toml", ".lobby.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `LOBBY_`-prefixed environment variables, `__` separating sections
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./lobby.toml` or `./.lobby.toml`
    /// 4. Global config: `$XDG_CONFIG_HOME/lobby-settings/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("LOBBY_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load defaults overlaid with a TOML document.
    pub fn load_str(toml: &str) -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::string(toml))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("lobby-settings").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lobby_domain::{Exploration, GameSpeed};

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.lobby.max_players, 8);
        assert!(config.settings.addons.is_empty());
    }

    #[test]
    fn test_load_str_overlays_defaults() {
        let config = ConfigLoader::load_str(
            r#"
            [lobby]
            max_players = 4

            [settings]
            speed = "very_fast"
            locked_teams = true

            [settings.addons]
            CHARBURNER = 1
        "#,
        )
        .unwrap();

        assert_eq!(config.lobby.max_players, 4);
        assert_eq!(config.settings.speed, GameSpeed::VeryFast);
        assert!(config.settings.locked_teams);
        assert_eq!(config.settings.fow, Exploration::FogOfWar);
        assert_eq!(config.settings.addons.get("CHARBURNER"), Some(&1));
    }

    #[test]
    fn test_load_str_rejects_unknown_enum_value() {
        let result = ConfigLoader::load_str(
            r#"
            [settings]
            speed = "ludicrous"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lobby.toml");
        std::fs::write(
            &path,
            r#"
            [script]
            path = "maps/duel.lua"
        "#,
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.script.path, Some(PathBuf::from("maps/duel.lua")));
    }

    #[test]
    fn test_global_config_path_names_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("lobby-settings"));
        }
    }
}
