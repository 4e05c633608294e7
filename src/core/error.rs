//! Error types.
//!
//! Two classes:
//!
//! - [`RuleViolation`]: an expected, data-driven rejection (wrong phase,
//!   illegal meld, card not in hand). The state is left unchanged and the
//!   `Display` text is the reason to surface to the player.
//! - [`EngineError`]: a caller bug (bad round number, too few players,
//!   both piles exhausted). The attempted operation fails outright.
//!
//! Actions return [`ActionError`], which is one or the other.

use thiserror::Error;

use super::card::CardId;
use super::player::PlayerId;
use super::state::{GameStatus, TurnPhase};
use crate::melds::{MeldError, MeldId};

/// Programmer or environment errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("round {0} is outside 1..=11")]
    RoundOutOfRange(u8),

    #[error("a game needs at least 2 players, got {0}")]
    TooFewPlayers(usize),

    #[error("draw pile is empty")]
    EmptyDrawPile,

    #[error("discard pile is empty")]
    EmptyDiscardPile,

    #[error("draw pile is empty and the discard pile cannot be recycled")]
    PilesExhausted,

    #[error("deck of {available} cards cannot deal {needed}")]
    DeckTooSmall { needed: usize, available: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown player index {0}")]
    UnknownPlayerIndex(usize),

    #[error("card conservation violated: {0}")]
    Conservation(String),
}

/// Expected rule violations. Rejections, never crashes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("game is not in play (status {0:?})")]
    NotPlaying(GameStatus),

    #[error("action needs phase {expected:?}, current phase is {actual:?}")]
    WrongPhase {
        expected: TurnPhase,
        actual: TurnPhase,
    },

    #[error("the discard pile is empty")]
    DiscardPileEmpty,

    #[error("no cards selected")]
    EmptySelection,

    #[error("select exactly one card to discard, got {0}")]
    DiscardCount(usize),

    #[error("card {0} selected more than once")]
    DuplicateSelection(CardId),

    #[error("card {0} is not in your hand")]
    CardNotInHand(CardId),

    #[error("you must keep at least one card to discard")]
    WouldEmptyHand,

    #[error("meld {0} does not exist")]
    UnknownMeld(MeldId),

    #[error("selection is neither a valid book ({book}) nor run ({run})")]
    NotAMeld { book: MeldError, run: MeldError },

    #[error("cannot lay off: {0}")]
    InvalidLayoff(MeldError),

    #[error("round is still in progress")]
    RoundNotOver,

    #[error("the game is over")]
    GameAlreadyOver,

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
}

/// Failure of a state machine action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Rule(#[from] RuleViolation),

    #[error(transparent)]
    Fatal(#[from] EngineError),
}

impl ActionError {
    /// True for ordinary rule rejections, false for caller bugs.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, ActionError::Rule(_))
    }

    /// Human-readable reason.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// The rule violation, if this is a rejection.
    #[must_use]
    pub fn violation(&self) -> Option<&RuleViolation> {
        match self {
            ActionError::Rule(v) => Some(v),
            ActionError::Fatal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_flag() {
        let rule: ActionError = RuleViolation::EmptySelection.into();
        let fatal: ActionError = EngineError::PilesExhausted.into();

        assert!(rule.is_rejection());
        assert!(!fatal.is_rejection());
        assert_eq!(rule.violation(), Some(&RuleViolation::EmptySelection));
        assert_eq!(fatal.violation(), None);
    }

    #[test]
    fn test_reasons_are_readable() {
        let err: ActionError = RuleViolation::DiscardCount(2).into();
        assert_eq!(err.reason(), "select exactly one card to discard, got 2");

        let err: ActionError = EngineError::RoundOutOfRange(12).into();
        assert_eq!(err.reason(), "round 12 is outside 1..=11");
    }

    #[test]
    fn test_meld_reason_nested() {
        let err = RuleViolation::InvalidLayoff(MeldError::MixedSuits);
        assert!(err.to_string().starts_with("cannot lay off: "));
    }
}
