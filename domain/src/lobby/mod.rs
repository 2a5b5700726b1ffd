//! Lobby roster handles

use serde::{Deserialize, Serialize};

/// Handle to a player slot in the lobby roster.
///
/// Handed out by value. It carries only the slot index, never a reference
/// into roster state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerRef(u32);

impl PlayerRef {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player #{}", self.0)
    }
}
