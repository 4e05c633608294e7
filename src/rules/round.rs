//! Round rule table.
//!
//! Round `r` deals `r + 2` cards and makes the rank equal to the hand size
//! wild: round 1 deals 3 with threes wild, round 11 deals 13 with kings wild.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, JOKER_RANK};
use crate::core::error::EngineError;

/// Number of rounds in a full game.
pub const MAX_ROUNDS: u8 = 11;

/// Rules in force for one round. Always derived from the round number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundRule {
    pub round: u8,
    pub hand_size: u8,
    /// The round's wild rank, `3..=13`. Never `0`.
    pub wild_rank: u8,
}

impl RoundRule {
    /// Check if a card is wild this round (a Joker or the round's wild rank).
    #[must_use]
    pub const fn is_wild(&self, card: &Card) -> bool {
        card.rank == JOKER_RANK || card.rank == self.wild_rank
    }
}

/// Look up the rule for `round` (1..=11).
///
/// ```
/// use crowns_engine::rules::round_rule;
///
/// let rule = round_rule(1).unwrap();
/// assert_eq!((rule.hand_size, rule.wild_rank), (3, 3));
/// assert!(round_rule(12).is_err());
/// ```
pub fn round_rule(round: u8) -> Result<RoundRule, EngineError> {
    if !(1..=MAX_ROUNDS).contains(&round) {
        return Err(EngineError::RoundOutOfRange(round));
    }
    let hand_size = round + 2;
    Ok(RoundRule {
        round,
        hand_size,
        wild_rank: hand_size,
    })
}
