//! First-class move records.

use crate::{Player, Slot};
use serde::{Deserialize, Serialize};

/// A player placing their mark on a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The slot marked.
    pub slot: Slot,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, slot: Slot) -> Self {
        Self { player, slot }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> square {}", self.player, self.slot)
    }
}
