//! Global game settings and their bounded option types.
//!
//! - [`options`]: the four enumerated settings with declared maximum ordinals
//! - [`game_settings::GlobalGameSettings`]: the authoritative aggregate
//! - [`update::GameSettingsUpdate`]: a sparse set of field changes

pub mod game_settings;
pub mod options;
pub mod update;
