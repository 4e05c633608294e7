//! Action representation: a verb plus the selected cards.
//!
//! The presentation layer builds an `Action` from the player's current
//! selection and hands it to [`apply_action`](crate::rules::apply_action).
//! The engine checks the selection against the active player's hand; it
//! never trusts the caller's view of what is legal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::CardId;
use crate::melds::MeldId;

/// Selected card IDs.
/// SmallVec covers typical selections (1-4 cards) without heap allocation.
pub type Selection = SmallVec<[CardId; 4]>;

/// A complete player action.
///
/// ## Example
///
/// ```
/// use crowns_engine::core::{Action, ActionKind, CardId};
///
/// let discard = Action::discard(CardId::new(17));
/// assert_eq!(discard.kind(), ActionKind::Discard);
/// assert_eq!(discard.selection(), &[CardId::new(17)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Take the top card of the draw pile.
    DrawFromDeck,
    /// Take the top card of the discard pile.
    DrawFromDiscard,
    /// Lay the selected cards down as a new meld.
    SubmitMeld { cards: Selection },
    /// Add the selected cards to an existing meld.
    LayOff { meld: MeldId, cards: Selection },
    /// Discard the selected card (exactly one) and end the turn.
    Discard { cards: Selection },
}

/// Action verb without arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    DrawFromDeck,
    DrawFromDiscard,
    SubmitMeld,
    LayOff,
    Discard,
}

impl Action {
    /// Build a meld submission from a selection.
    #[must_use]
    pub fn submit_meld(cards: &[CardId]) -> Self {
        Action::SubmitMeld {
            cards: SmallVec::from_slice(cards),
        }
    }

    /// Build a lay-off onto `meld`.
    #[must_use]
    pub fn lay_off(meld: MeldId, cards: &[CardId]) -> Self {
        Action::LayOff {
            meld,
            cards: SmallVec::from_slice(cards),
        }
    }

    /// Build a single-card discard.
    #[must_use]
    pub fn discard(card: CardId) -> Self {
        let mut cards = Selection::new();
        cards.push(card);
        Action::Discard { cards }
    }

    /// The verb of this action.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::DrawFromDeck => ActionKind::DrawFromDeck,
            Action::DrawFromDiscard => ActionKind::DrawFromDiscard,
            Action::SubmitMeld { .. } => ActionKind::SubmitMeld,
            Action::LayOff { .. } => ActionKind::LayOff,
            Action::Discard { .. } => ActionKind::Discard,
        }
    }

    /// Selected cards (empty for draws).
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        match self {
            Action::DrawFromDeck | Action::DrawFromDiscard => &[],
            Action::SubmitMeld { cards } | Action::LayOff { cards, .. } | Action::Discard { cards } => {
                cards.as_slice()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_actions_have_no_selection() {
        assert!(Action::DrawFromDeck.selection().is_empty());
        assert!(Action::DrawFromDiscard.selection().is_empty());
        assert_eq!(Action::DrawFromDiscard.kind(), ActionKind::DrawFromDiscard);
    }

    #[test]
    fn test_selection_actions() {
        let meld = Action::submit_meld(&[CardId::new(1), CardId::new(2), CardId::new(3)]);
        assert_eq!(meld.kind(), ActionKind::SubmitMeld);
        assert_eq!(meld.selection().len(), 3);

        let layoff = Action::lay_off(MeldId::new(4), &[CardId::new(9)]);
        assert_eq!(layoff.kind(), ActionKind::LayOff);
        assert_eq!(layoff.selection(), &[CardId::new(9)]);
    }

    #[test]
    fn test_action_equality() {
        let a1 = Action::discard(CardId::new(5));
        let a2 = Action::discard(CardId::new(5));
        let a3 = Action::discard(CardId::new(6));

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::lay_off(MeldId::new(2), &[CardId::new(5), CardId::new(10)]);
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }
}
