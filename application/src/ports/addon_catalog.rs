//! Addon catalog port.

use lobby_domain::{Addon, AddonId};

/// Enumerates the addons known to the game build.
pub trait AddonCatalogPort: Send + Sync {
    /// Look up an addon by identifier.
    fn addon(&self, id: AddonId) -> Option<Addon>;

    /// Every catalog entry, in `AddonId` order.
    fn addons(&self) -> Vec<Addon>;

    fn addon_count(&self) -> usize {
        self.addons().len()
    }

    fn addon_at(&self, index: usize) -> Option<Addon> {
        self.addons().get(index).copied()
    }
}
