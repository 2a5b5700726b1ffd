//! Authoritative settings store port.

use lobby_domain::{GlobalGameSettings, SettingsError};

/// Single source of truth for a lobby's global game settings.
///
/// Reads hand out a copy; writes replace the whole object. Implementors must
/// make the replace all-or-nothing for any observer.
pub trait SettingsStorePort: Send + Sync {
    /// Configured number of player slots.
    fn max_player_count(&self) -> u32;

    /// Snapshot of the current settings.
    fn global_settings(&self) -> Result<GlobalGameSettings, SettingsError>;

    /// Replace the current settings with `settings`.
    ///
    /// The store is responsible for clamping addon selections to each
    /// addon's valid variant range.
    fn change_global_settings(&self, settings: GlobalGameSettings) -> Result<(), SettingsError>;
}
