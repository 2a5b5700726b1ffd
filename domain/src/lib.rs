//! Domain layer for lobby-settings
//!
//! This crate contains the authoritative game configuration types of a
//! multiplayer lobby and the value objects exchanged with lobby scripts.
//! It has no dependencies on scripting, storage or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Global game settings
//!
//! [`GlobalGameSettings`] is the lobby-wide configuration: speed, objective,
//! start wares, exploration mode, the team flags and the addon selection
//! table. Every enumerated field is a [`BoundedOption`] whose ordinal can
//! never exceed its declared maximum.
//!
//! ## Addons
//!
//! Optional rule modules are identified by [`AddonId`]. The domain only knows
//! their identity, default selection and number of variants ([`Addon`]).
//!
//! ## Permissions
//!
//! Lobby scripts may declare which setting categories a human may change
//! ([`AllowedChanges`]) and which addons are explicitly allowed.

pub mod addon;
pub mod core;
pub mod lobby;
pub mod permission;
pub mod settings;

// Re-export commonly used types
pub use addon::{Addon, AddonId};
pub use core::error::SettingsError;
pub use lobby::PlayerRef;
pub use permission::{AllowedChanges, ChangeCategory, PermissionTable};
pub use settings::{
    game_settings::GlobalGameSettings,
    options::{BoundedOption, Exploration, GameObjective, GameSpeed, StartWares},
    update::GameSettingsUpdate,
};
