//! Wild-aware meld and lay-off validation.
//!
//! A card is wild when it is a Joker or carries the round's wild rank.
//! Wild cards stand in for whatever the meld needs.
//!
//! - **BOOK**: every non-wild card shares one rank; suits are free.
//! - **RUN**: every non-wild card shares one suit, non-wild ranks are
//!   distinct, and the gaps between them (sorted) add up to no more than
//!   the number of wilds available to fill them.
//!
//! Validators are pure predicates per meld type. Picking a type for a
//! selection (BOOK first, then RUN) is the state machine's job.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::card::{Card, Suit};
use crate::core::config::MeldPolicy;
use crate::rules::RoundRule;

/// Minimum number of cards in a meld.
pub const MIN_MELD_SIZE: usize = 3;

/// Meld kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldType {
    Book,
    Run,
}

impl std::fmt::Display for MeldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeldType::Book => write!(f, "book"),
            MeldType::Run => write!(f, "run"),
        }
    }
}

/// Why a set of cards is not a legal meld.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeldError {
    #[error("a meld needs at least {MIN_MELD_SIZE} cards, got {0}")]
    TooFewCards(usize),

    #[error("no cards added")]
    NothingAdded,

    #[error("cards must share one rank")]
    MixedRanks,

    #[error("cards must share one suit")]
    MixedSuits,

    #[error("rank {0} appears more than once")]
    DuplicateRank(u8),

    #[error("{gaps} missing ranks but only {wilds} wild cards")]
    GapsExceedWilds { gaps: usize, wilds: usize },

    #[error("all-wild melds are not allowed")]
    AllWild,
}

/// Validate `cards` as a meld of `kind` under the default policy.
pub fn validate_meld(cards: &[Card], kind: MeldType, rule: &RoundRule) -> Result<(), MeldError> {
    validate_meld_with(cards, kind, rule, &MeldPolicy::default())
}

/// Validate `cards` as a meld of `kind` under an explicit policy.
pub fn validate_meld_with(
    cards: &[Card],
    kind: MeldType,
    rule: &RoundRule,
    policy: &MeldPolicy,
) -> Result<(), MeldError> {
    if cards.len() < MIN_MELD_SIZE {
        return Err(MeldError::TooFewCards(cards.len()));
    }

    let (wilds, naturals): (SmallVec<[&Card; 16]>, SmallVec<[&Card; 16]>) =
        cards.iter().partition(|c| rule.is_wild(c));

    if naturals.is_empty() {
        return if policy.allow_all_wild {
            Ok(())
        } else {
            Err(MeldError::AllWild)
        };
    }

    match kind {
        MeldType::Book => check_book(&naturals),
        MeldType::Run => check_run(&naturals, wilds.len()),
    }
}

fn check_book(naturals: &[&Card]) -> Result<(), MeldError> {
    let rank = naturals[0].rank;
    if naturals.iter().all(|c| c.rank == rank) {
        Ok(())
    } else {
        Err(MeldError::MixedRanks)
    }
}

fn check_run(naturals: &[&Card], wilds: usize) -> Result<(), MeldError> {
    let suit: Suit = naturals[0].suit;
    if naturals.iter().any(|c| c.suit != suit) {
        return Err(MeldError::MixedSuits);
    }

    let mut ranks: SmallVec<[u8; 16]> = naturals.iter().map(|c| c.rank).collect();
    ranks.sort_unstable();

    let mut gaps = 0usize;
    for pair in ranks.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if next <= prev {
            return Err(MeldError::DuplicateRank(next));
        }
        gaps += usize::from(next - prev - 1);
    }

    if gaps > wilds {
        return Err(MeldError::GapsExceedWilds { gaps, wilds });
    }
    Ok(())
}

/// Validate adding `added` to an existing meld.
///
/// The enlarged meld is re-validated from scratch, so every meld on the
/// table stays legal after any lay-off.
pub fn validate_layoff(
    meld_type: MeldType,
    meld_cards: &[Card],
    added: &[Card],
    rule: &RoundRule,
) -> Result<(), MeldError> {
    validate_layoff_with(meld_type, meld_cards, added, rule, &MeldPolicy::default())
}

/// [`validate_layoff`] under an explicit policy.
pub fn validate_layoff_with(
    meld_type: MeldType,
    meld_cards: &[Card],
    added: &[Card],
    rule: &RoundRule,
    policy: &MeldPolicy,
) -> Result<(), MeldError> {
    if added.is_empty() {
        return Err(MeldError::NothingAdded);
    }
    let combined: Vec<Card> = meld_cards.iter().chain(added).copied().collect();
    validate_meld_with(&combined, meld_type, rule, policy)
}
