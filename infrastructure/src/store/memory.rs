//! In-memory authoritative settings store.

use lobby_application::{AddonCatalogPort, SettingsStorePort};
use lobby_domain::{GlobalGameSettings, SettingsError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Settings store backed by a mutex-guarded value.
///
/// `change_global_settings` clamps every addon selection to the variant range
/// declared by the catalog and swaps the whole object under the lock.
/// Each successful replace bumps the revision counter.
pub struct InMemorySettingsStore {
    max_players: u32,
    settings: Mutex<GlobalGameSettings>,
    catalog: Arc<dyn AddonCatalogPort>,
    revision: AtomicU64,
}

impl InMemorySettingsStore {
    pub fn new(
        max_players: u32,
        settings: GlobalGameSettings,
        catalog: Arc<dyn AddonCatalogPort>,
    ) -> Self {
        let settings = clamp_selections(settings, catalog.as_ref());
        Self {
            max_players,
            settings: Mutex::new(settings),
            catalog,
            revision: AtomicU64::new(0),
        }
    }

    /// Store whose settings have every catalog addon at its default.
    pub fn with_catalog_defaults(max_players: u32, catalog: Arc<dyn AddonCatalogPort>) -> Self {
        let settings = GlobalGameSettings::with_addons(&catalog.addons());
        Self::new(max_players, settings, catalog)
    }

    /// Number of successful replaces since creation.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }
}

impl SettingsStorePort for InMemorySettingsStore {
    fn max_player_count(&self) -> u32 {
        self.max_players
    }

    fn global_settings(&self) -> Result<GlobalGameSettings, SettingsError> {
        let guard = self
            .settings
            .lock()
            .map_err(|e| SettingsError::StoreUnavailable(format!("settings lock poisoned: {}", e)))?;
        Ok(guard.clone())
    }

    fn change_global_settings(&self, settings: GlobalGameSettings) -> Result<(), SettingsError> {
        let settings = clamp_selections(settings, self.catalog.as_ref());
        let mut guard = self
            .settings
            .lock()
            .map_err(|e| SettingsError::StoreUnavailable(format!("settings lock poisoned: {}", e)))?;
        *guard = settings;
        let revision = self.revision.fetch_add(1, Ordering::SeqCst) + 1;
        info!(revision, "Global game settings changed");
        Ok(())
    }
}

fn clamp_selections(
    mut settings: GlobalGameSettings,
    catalog: &dyn AddonCatalogPort,
) -> GlobalGameSettings {
    let clamped: Vec<_> = settings
        .selections()
        .filter_map(|(id, status)| {
            let addon = catalog.addon(id)?;
            let valid = addon.clamp_status(status);
            (valid != status).then_some((id, status, valid))
        })
        .collect();
    for (id, requested, valid) in clamped {
        debug!(addon = %id, requested, valid, "Clamping addon selection");
        settings.set_selection(id, valid);
    }
    settings
}
