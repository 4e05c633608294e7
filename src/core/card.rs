//! Cards: suits, ranks, and the immutable `Card` value record.
//!
//! ## Ranks
//!
//! Ranks are plain integers. `0` is a Joker, `3..=13` is face value with
//! `11`/`12`/`13` standing for J/Q/K. Whether a card is wild depends on the
//! active round, so `Card` only knows about Jokers; see
//! [`RoundRule::is_wild`](crate::rules::RoundRule::is_wild).
//!
//! ## Identity
//!
//! Two cards with the same suit and rank can exist (one per deck copy).
//! Identity is the `CardId`, assigned in deck construction order.

use serde::{Deserialize, Serialize};

/// Rank value used for Jokers.
pub const JOKER_RANK: u8 = 0;

/// Lowest non-joker rank.
pub const MIN_RANK: u8 = 3;

/// Highest non-joker rank (King).
pub const MAX_RANK: u8 = 13;

/// Card identifier, unique within a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The five suits, plus the sentinel carried by Jokers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Stars,
    Hearts,
    Clubs,
    Spades,
    Diamonds,
    /// No suit. Only Jokers carry it.
    Joker,
}

impl Suit {
    /// The five real suits in deck construction order.
    pub const ALL: [Suit; 5] = [
        Suit::Stars,
        Suit::Hearts,
        Suit::Clubs,
        Suit::Spades,
        Suit::Diamonds,
    ];

    /// Single-letter code used in card labels.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Stars => '*',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Joker => 'J',
        }
    }
}

/// A physical card.
///
/// Cards are immutable value records; a card moves between zones but never
/// changes. Equality compares all fields, so two copies of the "same" card
/// from different decks are distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,
    /// Suit (`Suit::Joker` for Jokers).
    pub suit: Suit,
    /// `0` for Jokers, otherwise `3..=13`.
    pub rank: u8,
    /// Which physical deck copy the card came from.
    pub deck_index: u8,
}

impl Card {
    /// Create a suited card.
    #[must_use]
    pub const fn new(id: CardId, suit: Suit, rank: u8, deck_index: u8) -> Self {
        Self {
            id,
            suit,
            rank,
            deck_index,
        }
    }

    /// Create a Joker.
    #[must_use]
    pub const fn joker(id: CardId, deck_index: u8) -> Self {
        Self {
            id,
            suit: Suit::Joker,
            rank: JOKER_RANK,
            deck_index,
        }
    }

    /// Check if this card is a Joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank == JOKER_RANK
    }

    /// Short label like `H5`, `*13` or `JK`.
    #[must_use]
    pub fn label(&self) -> String {
        if self.is_joker() {
            return "JK".to_string();
        }
        let face = match self.rank {
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            r => r.to_string(),
        };
        format!("{}{}", self.suit.code(), face)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.label(), self.id)
    }
}
