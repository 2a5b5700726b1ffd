//! Optional rule modules ("addons")
//!
//! [`AddonId`] is the fixed, ordered identifier set of every addon the game
//! knows about. [`Addon`] is the catalog entry the settings layer needs:
//! identity, default selection and number of selectable variants.

use serde::{Deserialize, Serialize};

/// Identifier of an optional rule module.
///
/// The declaration order is the stable total order used for iteration and
/// for the addon selection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddonId {
    LimitCatapults,
    InexhaustibleMines,
    RefundMaterials,
    ExhaustibleWater,
    RefundOnEmergency,
    ManualRoadEnlargement,
    CatapultGraphics,
    MetalworksBehaviorOnZero,
    DemolitionProhibition,
    Charburner,
    Trade,
    PeacefulMode,
    MaxWaterwayLength,
    NoCoinsDefault,
    AdjustMilitaryStrength,
    ToolOrdering,
}

impl AddonId {
    /// Every addon identifier, in stable order.
    pub const ALL: [AddonId; 16] = [
        AddonId::LimitCatapults,
        AddonId::InexhaustibleMines,
        AddonId::RefundMaterials,
        AddonId::ExhaustibleWater,
        AddonId::RefundOnEmergency,
        AddonId::ManualRoadEnlargement,
        AddonId::CatapultGraphics,
        AddonId::MetalworksBehaviorOnZero,
        AddonId::DemolitionProhibition,
        AddonId::Charburner,
        AddonId::Trade,
        AddonId::PeacefulMode,
        AddonId::MaxWaterwayLength,
        AddonId::NoCoinsDefault,
        AddonId::AdjustMilitaryStrength,
        AddonId::ToolOrdering,
    ];

    /// Number of distinct addon identifiers.
    pub const COUNT: usize = Self::ALL.len();

    /// Name used for script constants (`ADDON_<name>`) and config keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LimitCatapults => "LIMIT_CATAPULTS",
            Self::InexhaustibleMines => "INEXHAUSTIBLE_MINES",
            Self::RefundMaterials => "REFUND_MATERIALS",
            Self::ExhaustibleWater => "EXHAUSTIBLE_WATER",
            Self::RefundOnEmergency => "REFUND_ON_EMERGENCY",
            Self::ManualRoadEnlargement => "MANUAL_ROAD_ENLARGEMENT",
            Self::CatapultGraphics => "CATAPULT_GRAPHICS",
            Self::MetalworksBehaviorOnZero => "METALWORKSBEHAVIORONZERO",
            Self::DemolitionProhibition => "DEMOLITION_PROHIBITION",
            Self::Charburner => "CHARBURNER",
            Self::Trade => "TRADE",
            Self::PeacefulMode => "PEACEFULMODE",
            Self::MaxWaterwayLength => "MAX_WATERWAYLENGTH",
            Self::NoCoinsDefault => "NO_COINS_DEFAULT",
            Self::AdjustMilitaryStrength => "ADJUST_MILITARY_STRENGTH",
            Self::ToolOrdering => "TOOL_ORDERING",
        }
    }

    /// Script-visible global name, e.g. `ADDON_CHARBURNER`.
    pub fn constant_name(&self) -> String {
        format!("ADDON_{}", self.as_str())
    }
}

impl std::str::FromStr for AddonId {
    type Err = String;

    /// Parses an addon name, case-insensitively, with or without the
    /// `ADDON_` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        let name = upper.strip_prefix("ADDON_").unwrap_or(&upper);
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == name)
            .ok_or_else(|| format!("unknown addon: '{}'", s))
    }
}

impl std::fmt::Display for AddonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Catalog entry for an addon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addon {
    id: AddonId,
    default_status: u32,
    num_options: u32,
}

impl Addon {
    /// Create a catalog entry. `num_options` is clamped to at least one
    /// variant and `default_status` to the last valid variant.
    pub fn new(id: AddonId, default_status: u32, num_options: u32) -> Self {
        let num_options = num_options.max(1);
        Self {
            id,
            default_status: default_status.min(num_options - 1),
            num_options,
        }
    }

    pub fn id(&self) -> AddonId {
        self.id
    }

    pub fn default_status(&self) -> u32 {
        self.default_status
    }

    pub fn num_options(&self) -> u32 {
        self.num_options
    }

    /// Highest selectable variant.
    pub fn max_status(&self) -> u32 {
        self.num_options - 1
    }

    /// Clamp a requested variant into this addon's valid range.
    pub fn clamp_status(&self, status: u32) -> u32 {
        status.min(self.max_status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_sorted_and_unique() {
        let mut sorted = AddonId::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, AddonId::ALL.to_vec());
        assert_eq!(AddonId::COUNT, 16);
    }

    #[test]
    fn test_addon_id_name_parses_back() {
        for id in AddonId::ALL {
            assert_eq!(id.as_str().parse::<AddonId>().unwrap(), id);
        }
    }

    #[test]
    fn test_addon_id_parse_accepts_prefix_and_lowercase() {
        assert_eq!("ADDON_TRADE".parse::<AddonId>().unwrap(), AddonId::Trade);
        assert_eq!("charburner".parse::<AddonId>().unwrap(), AddonId::Charburner);
        assert!("ADDON_DOES_NOT_EXIST".parse::<AddonId>().is_err());
    }

    #[test]
    fn test_constant_name() {
        assert_eq!(
            AddonId::LimitCatapults.constant_name(),
            "ADDON_LIMIT_CATAPULTS"
        );
    }

    #[test]
    fn test_addon_clamps_default_and_status() {
        let addon = Addon::new(AddonId::DemolitionProhibition, 9, 3);
        assert_eq!(addon.default_status(), 2);
        assert_eq!(addon.max_status(), 2);
        assert_eq!(addon.clamp_status(1), 1);
        assert_eq!(addon.clamp_status(40), 2);
    }

    #[test]
    fn test_addon_with_zero_options_has_single_variant() {
        let addon = Addon::new(AddonId::Trade, 0, 0);
        assert_eq!(addon.num_options(), 1);
        assert_eq!(addon.max_status(), 0);
    }
}
