//! Public melds on the table.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::validator::MeldType;
use crate::core::card::Card;
use crate::core::player::PlayerId;

/// Meld identifier, unique for the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MeldId(pub u32);

impl MeldId {
    /// Create a new meld ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MeldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Meld({})", self.0)
    }
}

/// A BOOK or RUN laid down by a player.
///
/// Visible to everyone. Only ever grows, by lay-off, and always holds at
/// least three cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    pub id: MeldId,
    pub owner: PlayerId,
    pub kind: MeldType,
    pub cards: Vector<Card>,
    /// Round the meld was laid down in.
    pub round: u8,
}

impl Meld {
    /// Number of cards in the meld.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for melds built by the engine.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards as a contiguous vector, for validation.
    #[must_use]
    pub fn card_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}
