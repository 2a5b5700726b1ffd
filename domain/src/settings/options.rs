//! Enumerated game settings.
//!
//! Each option is an ordinal in `0..=MAX`. Scripts and config files supply
//! raw ordinals; [`BoundedOption::from_ordinal`] is the only way in.

use serde::{Deserialize, Serialize};

use crate::core::error::SettingsError;

/// An enumerated setting with a fixed, ordered value set.
pub trait BoundedOption: Sized + Copy + 'static {
    /// Script-visible field name, used in validation errors.
    const FIELD: &'static str;

    /// Every value, indexed by ordinal.
    const ALL: &'static [Self];

    fn ordinal(self) -> u32;

    /// Script constant name for this value (e.g. `GS_FAST`).
    fn constant_name(self) -> &'static str;

    /// Highest valid ordinal.
    fn max_ordinal() -> u32 {
        (Self::ALL.len() - 1) as u32
    }

    /// Convert a raw ordinal, rejecting anything outside `0..=max_ordinal()`.
    fn from_ordinal(value: i64) -> Result<Self, SettingsError> {
        let max = Self::max_ordinal();
        if value < 0 || value > i64::from(max) {
            return Err(SettingsError::OutOfRange {
                field: Self::FIELD,
                value,
                max,
            });
        }
        Ok(Self::ALL[value as usize])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameSpeed {
    VerySlow,
    Slow,
    #[default]
    Normal,
    Fast,
    VeryFast,
}

impl BoundedOption for GameSpeed {
    const FIELD: &'static str = "speed";
    const ALL: &'static [Self] = &[
        Self::VerySlow,
        Self::Slow,
        Self::Normal,
        Self::Fast,
        Self::VeryFast,
    ];

    fn ordinal(self) -> u32 {
        self as u32
    }

    fn constant_name(self) -> &'static str {
        match self {
            Self::VerySlow => "GS_VERYSLOW",
            Self::Slow => "GS_SLOW",
            Self::Normal => "GS_NORMAL",
            Self::Fast => "GS_FAST",
            Self::VeryFast => "GS_VERYFAST",
        }
    }
}

/// Win condition of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameObjective {
    #[default]
    NoObjective,
    ConquerThreeQuarters,
    TotalDomination,
}

impl BoundedOption for GameObjective {
    const FIELD: &'static str = "objective";
    const ALL: &'static [Self] = &[
        Self::NoObjective,
        Self::ConquerThreeQuarters,
        Self::TotalDomination,
    ];

    fn ordinal(self) -> u32 {
        self as u32
    }

    fn constant_name(self) -> &'static str {
        match self {
            Self::NoObjective => "GO_NONE",
            Self::ConquerThreeQuarters => "GO_CONQUER3_4",
            Self::TotalDomination => "GO_TOTALDOMINATION",
        }
    }
}

/// Amount of wares each player starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartWares {
    VeryLow,
    Low,
    #[default]
    Normal,
    Plenty,
}

impl BoundedOption for StartWares {
    const FIELD: &'static str = "startWares";
    const ALL: &'static [Self] = &[Self::VeryLow, Self::Low, Self::Normal, Self::Plenty];

    fn ordinal(self) -> u32 {
        self as u32
    }

    fn constant_name(self) -> &'static str {
        match self {
            Self::VeryLow => "SWR_VLOW",
            Self::Low => "SWR_LOW",
            Self::Normal => "SWR_NORMAL",
            Self::Plenty => "SWR_ALOT",
        }
    }
}

/// Fog-of-war / exploration mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exploration {
    Disabled,
    Classic,
    #[default]
    FogOfWar,
    FogOfWarExplored,
}

impl BoundedOption for Exploration {
    const FIELD: &'static str = "fow";
    const ALL: &'static [Self] = &[
        Self::Disabled,
        Self::Classic,
        Self::FogOfWar,
        Self::FogOfWarExplored,
    ];

    fn ordinal(self) -> u32 {
        self as u32
    }

    fn constant_name(self) -> &'static str {
        match self {
            Self::Disabled => "EXP_DISABLED",
            Self::Classic => "EXP_CLASSIC",
            Self::FogOfWar => "EXP_FOGOFWAR",
            Self::FogOfWarExplored => "EXP_FOGOFWAR_EXPLORED",
        }
    }
}
