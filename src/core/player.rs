//! Player identification and per-player round data.
//!
//! ## PlayerId
//!
//! Seat identifier, 0-based, stable for the whole game.
//!
//! ## Player
//!
//! Display name, the current hand, and the running score. Hands are
//! `im::Vector`s so that cloning a `GameState` for the next snapshot stays
//! cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};

/// Player identifier (seat index).
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use crowns_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(u8::MAX as usize) as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Cards in hand. Order is what the player sees; rules ignore it.
    pub hand: Vector<Card>,
    /// Cumulative penalty points across completed rounds.
    pub score: u32,
}

impl Player {
    /// Create a player with an empty hand and zero score.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vector::new(),
            score: 0,
        }
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Check whether a specific card is in this player's hand.
    #[must_use]
    pub fn holds(&self, card: CardId) -> bool {
        self.hand.iter().any(|c| c.id == card)
    }

    /// Find a card in hand by ID.
    #[must_use]
    pub fn find_card(&self, card: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == card)
    }
}
