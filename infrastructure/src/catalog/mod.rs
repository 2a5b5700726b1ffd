//! Builtin addon catalog
//!
//! The addons shipped with the game, with their default selection and number
//! of selectable variants.

use lobby_application::AddonCatalogPort;
use lobby_domain::{Addon, AddonId};

/// `(id, default status, number of options)` for every builtin addon.
const BUILTIN_ADDONS: [(AddonId, u32, u32); AddonId::COUNT] = [
    (AddonId::LimitCatapults, 0, 7),
    (AddonId::InexhaustibleMines, 0, 2),
    (AddonId::RefundMaterials, 0, 5),
    (AddonId::ExhaustibleWater, 0, 2),
    (AddonId::RefundOnEmergency, 0, 2),
    (AddonId::ManualRoadEnlargement, 0, 2),
    (AddonId::CatapultGraphics, 0, 2),
    (AddonId::MetalworksBehaviorOnZero, 0, 2),
    (AddonId::DemolitionProhibition, 0, 3),
    (AddonId::Charburner, 0, 2),
    (AddonId::Trade, 0, 2),
    (AddonId::PeacefulMode, 0, 2),
    (AddonId::MaxWaterwayLength, 0, 6),
    (AddonId::NoCoinsDefault, 0, 2),
    (AddonId::AdjustMilitaryStrength, 1, 3),
    (AddonId::ToolOrdering, 0, 2),
];

/// Static, read-only addon catalog.
#[derive(Debug, Clone)]
pub struct BuiltinAddonCatalog {
    addons: Vec<Addon>,
}

impl BuiltinAddonCatalog {
    /// Catalog containing every builtin addon.
    pub fn builtin() -> Self {
        Self::from_addons(
            BUILTIN_ADDONS
                .iter()
                .map(|(id, default, options)| Addon::new(*id, *default, *options)),
        )
    }

    /// Catalog with an explicit set of entries. Later duplicates replace
    /// earlier ones.
    pub fn from_addons(addons: impl IntoIterator<Item = Addon>) -> Self {
        let mut entries: Vec<Addon> = Vec::new();
        for addon in addons {
            entries.retain(|a| a.id() != addon.id());
            entries.push(addon);
        }
        entries.sort_by_key(|a| a.id());
        Self { addons: entries }
    }

    /// The builtin catalog minus the given addons.
    pub fn without(removed: &[AddonId]) -> Self {
        let mut catalog = Self::builtin();
        catalog.addons.retain(|a| !removed.contains(&a.id()));
        catalog
    }
}

impl Default for BuiltinAddonCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AddonCatalogPort for BuiltinAddonCatalog {
    fn addon(&self, id: AddonId) -> Option<Addon> {
        self.addons.iter().find(|a| a.id() == id).copied()
    }

    fn addons(&self) -> Vec<Addon> {
        self.addons.clone()
    }

    fn addon_count(&self) -> usize {
        self.addons.len()
    }

    fn addon_at(&self, index: usize) -> Option<Addon> {
        self.addons.get(index).copied()
    }
}
