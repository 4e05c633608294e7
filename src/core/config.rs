//! Game configuration types.
//!
//! Games configure the engine at startup by providing:
//! - `DeckConfig`: suits, ranks, copies and jokers that make up the deck
//! - `ScoringConfig`: penalty values for Jokers and round wilds
//! - `MeldPolicy`: house-rule switches for meld validation
//! - `GameConfig`: combines all configuration plus round count and seed
//!
//! The defaults describe the standard game: 5 suits, ranks 3..=13, two
//! decks with three Jokers each (116 cards), eleven rounds.

use serde::{Deserialize, Serialize};

use super::card::{Suit, MAX_RANK, MIN_RANK};
use super::error::EngineError;
use crate::rules::round::MAX_ROUNDS;

/// Composition of the deck built at the start of every round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Suits, in construction order. Must not contain `Suit::Joker`.
    pub suits: Vec<Suit>,
    /// Non-joker ranks, in construction order.
    pub ranks: Vec<u8>,
    /// Number of physical deck copies.
    pub copies: u8,
    /// Jokers appended to each copy.
    pub jokers_per_deck: u8,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            suits: Suit::ALL.to_vec(),
            ranks: (MIN_RANK..=MAX_RANK).collect(),
            copies: 2,
            jokers_per_deck: 3,
        }
    }
}

impl DeckConfig {
    /// Total number of cards this configuration produces.
    ///
    /// ```
    /// use crowns_engine::core::DeckConfig;
    ///
    /// assert_eq!(DeckConfig::default().total_cards(), 116);
    /// ```
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let per_copy = self.suits.len() * self.ranks.len() + self.jokers_per_deck as usize;
        per_copy * self.copies as usize
    }

    /// Set the number of deck copies.
    #[must_use]
    pub fn with_copies(mut self, copies: u8) -> Self {
        self.copies = copies;
        self
    }

    /// Set the jokers per copy.
    #[must_use]
    pub fn with_jokers(mut self, jokers_per_deck: u8) -> Self {
        self.jokers_per_deck = jokers_per_deck;
        self
    }

    /// Check that the configuration describes a buildable deck.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.suits.is_empty() || self.ranks.is_empty() {
            return Err(EngineError::InvalidConfig(
                "deck needs at least one suit and one rank".into(),
            ));
        }
        if self.copies == 0 {
            return Err(EngineError::InvalidConfig("deck needs at least one copy".into()));
        }
        if self.suits.contains(&Suit::Joker) {
            return Err(EngineError::InvalidConfig(
                "the joker sentinel is not a playable suit".into(),
            ));
        }
        if let Some(r) = self.ranks.iter().find(|r| !(MIN_RANK..=MAX_RANK).contains(*r)) {
            return Err(EngineError::InvalidConfig(format!(
                "rank {r} is outside {MIN_RANK}..={MAX_RANK}"
            )));
        }
        let mut suits = self.suits.clone();
        suits.sort_unstable();
        suits.dedup();
        let mut ranks = self.ranks.clone();
        ranks.sort_unstable();
        ranks.dedup();
        if suits.len() != self.suits.len() || ranks.len() != self.ranks.len() {
            return Err(EngineError::InvalidConfig("duplicate suit or rank".into()));
        }
        if self.total_cards() > u16::MAX as usize {
            return Err(EngineError::InvalidConfig("deck too large".into()));
        }
        Ok(())
    }
}

/// Penalty points for cards left in hand when a round ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub joker_penalty: u32,
    pub wild_penalty: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            joker_penalty: 50,
            wild_penalty: 20,
        }
    }
}

/// House-rule switches for meld validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeldPolicy {
    /// Accept a meld made only of wild cards as either a BOOK or a RUN.
    pub allow_all_wild: bool,
}

impl Default for MeldPolicy {
    fn default() -> Self {
        Self {
            allow_all_wild: true,
        }
    }
}

/// Complete game configuration.
///
/// Stored inside the game state so that round transitions rebuild the deck
/// the same way the first round did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub deck: DeckConfig,

    /// Number of rounds before the game ends (1..=11).
    pub total_rounds: u8,

    /// Turn the first undealt card face up to start the discard pile.
    pub start_discard: bool,

    /// Shuffle seed. `None` draws one from OS entropy at game creation.
    pub seed: Option<u32>,

    pub scoring: ScoringConfig,

    pub meld_policy: MeldPolicy,

    /// Rotate the opening player each round instead of always seat 0.
    pub rotate_first_player: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            deck: DeckConfig::default(),
            total_rounds: MAX_ROUNDS,
            start_discard: true,
            seed: None,
            scoring: ScoringConfig::default(),
            meld_policy: MeldPolicy::default(),
            rotate_first_player: false,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set whether dealing seeds the discard pile.
    #[must_use]
    pub fn with_start_discard(mut self, start_discard: bool) -> Self {
        self.start_discard = start_discard;
        self
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_total_rounds(mut self, rounds: u8) -> Self {
        self.total_rounds = rounds;
        self
    }

    /// Replace the deck composition.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckConfig) -> Self {
        self.deck = deck;
        self
    }

    /// Replace the scoring penalties.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Replace the meld policy.
    #[must_use]
    pub fn with_meld_policy(mut self, policy: MeldPolicy) -> Self {
        self.meld_policy = policy;
        self
    }

    /// Rotate the opening player each round.
    #[must_use]
    pub fn with_rotating_first_player(mut self) -> Self {
        self.rotate_first_player = true;
        self
    }

    /// Check the whole configuration.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(1..=MAX_ROUNDS).contains(&self.total_rounds) {
            return Err(EngineError::InvalidConfig(format!(
                "total_rounds must be in 1..={MAX_ROUNDS}, got {}",
                self.total_rounds
            )));
        }
        self.deck.validate()
    }
}
