//! CLI entrypoint for lobby-settings
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod args;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use lobby_application::{
    AddonCatalogPort, NoSettingsScript, SettingsBridge, SettingsScriptPort, SettingsStorePort,
};
use lobby_domain::ChangeCategory;
use lobby_infrastructure::{
    BuiltinAddonCatalog, ConfigLoader, InMemorySettingsStore, LuaSettingsScript,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting lobby-settings");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?
    };

    // === Dependency Injection ===
    let catalog: Arc<dyn AddonCatalogPort> = Arc::new(BuiltinAddonCatalog::builtin());
    let initial = config
        .to_global_settings(catalog.as_ref())
        .context("invalid configuration")?;
    let store = Arc::new(InMemorySettingsStore::new(
        config.lobby.max_players,
        initial,
        Arc::clone(&catalog),
    ));
    let bridge = SettingsBridge::new(store.clone(), Arc::clone(&catalog));

    let script_path = cli.script.or(config.script.path);
    let script: Box<dyn SettingsScriptPort> = match &script_path {
        Some(path) => {
            let engine = LuaSettingsScript::new(bridge.clone())?;
            engine.load_script(path)?;
            Box::new(engine)
        }
        None => {
            info!("No settings script configured");
            Box::new(NoSettingsScript)
        }
    };

    if let Err(e) = script.event_settings_ready() {
        warn!(error = %e, "Settings ready hook failed");
    }

    let permissions: serde_json::Map<String, serde_json::Value> = ChangeCategory::ALL
        .iter()
        .map(|category| {
            let allowed = script.is_category_allowed(*category, cli.allow_by_default);
            (category.as_str().to_string(), json!(allowed))
        })
        .collect();

    let report = json!({
        "players": bridge.player_count(),
        "revision": store.revision(),
        "settings": store.global_settings()?,
        "allowedChanges": permissions,
        "allowedAddons": script.allowed_addons(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
