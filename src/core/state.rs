//! Game state: the aggregate root and its public projection.
//!
//! ## GameState
//!
//! Complete state of a game, including every hand and the RNG. Plain data:
//! it serializes verbatim and every action maps one `GameState` to the
//! next. Uses `im` persistent vectors so that producing the next snapshot
//! is O(1) to clone.
//!
//! ## PublicView
//!
//! What every player at the table can see: hand sizes, scores, melds, the
//! discard top, the draw pile count. No hidden hands.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use super::config::GameConfig;
use super::error::EngineError;
use super::player::{Player, PlayerId};
use super::rng::Mulberry32;
use crate::melds::{Meld, MeldId};
use crate::rules::RoundRule;

/// Where the active player is within their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Must draw from the deck or the discard pile.
    NeedDraw,
    /// May meld and lay off, must discard to finish.
    NeedDiscard,
}

/// Lifecycle status of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    /// Round scored, waiting for `next_round`.
    RoundEnd,
    /// Terminal.
    GameOver,
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Configuration the game was created with.
    pub config: GameConfig,

    /// Seed the game's RNG started from.
    pub seed: u32,

    /// Current round (1-based).
    pub round: u8,

    /// Rule for `round`.
    pub rule: RoundRule,

    /// Players in seat order.
    pub players: Vector<Player>,

    /// Index into `players` of the player whose turn it is.
    pub current_player_index: usize,

    /// Draw pile, top is index 0.
    pub draw_pile: Vector<Card>,

    /// Discard pile, top is the last element.
    pub discard_pile: Vector<Card>,

    /// Melds on the table this round.
    pub melds: Vector<Meld>,

    pub turn_phase: TurnPhase,

    pub status: GameStatus,

    /// First player to go out this round. Write-once per round.
    pub out_triggered_by: Option<PlayerId>,

    /// Final turns left after the go-out. Only ever decreases.
    pub turns_remaining_after_out: Option<u8>,

    /// RNG used for recycling discards and dealing later rounds.
    pub rng: Mulberry32,

    /// Next meld ID to allocate.
    pub(crate) next_meld_id: u32,
}

impl GameState {
    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Look up a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Look up a meld by ID.
    #[must_use]
    pub fn meld(&self, id: MeldId) -> Option<&Meld> {
        self.melds.iter().find(|m| m.id == id)
    }

    /// Top card of the discard pile.
    #[must_use]
    pub fn discard_top(&self) -> Option<&Card> {
        self.discard_pile.back()
    }

    /// True once the game has reached `GAME_OVER`.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Allocate a new meld ID.
    pub(crate) fn alloc_meld_id(&mut self) -> MeldId {
        let id = MeldId::new(self.next_meld_id);
        self.next_meld_id += 1;
        id
    }

    // === Card Conservation ===

    /// Count the cards in each zone.
    #[must_use]
    pub fn card_census(&self) -> CardCensus {
        CardCensus {
            hands: self.players.iter().map(|p| p.hand.len()).sum(),
            draw_pile: self.draw_pile.len(),
            discard_pile: self.discard_pile.len(),
            melds: self.melds.iter().map(|m| m.cards.len()).sum(),
        }
    }

    /// Check that every card is in exactly one zone and none is missing.
    pub fn verify_conservation(&self) -> Result<(), EngineError> {
        let census = self.card_census();
        let expected = self.config.deck.total_cards();
        if census.total() != expected {
            return Err(EngineError::Conservation(format!(
                "card count {} does not match deck size {expected}",
                census.total()
            )));
        }

        let mut seen: FxHashSet<CardId> = FxHashSet::default();
        let all = self
            .players
            .iter()
            .flat_map(|p| p.hand.iter())
            .chain(self.draw_pile.iter())
            .chain(self.discard_pile.iter())
            .chain(self.melds.iter().flat_map(|m| m.cards.iter()));
        for card in all {
            if !seen.insert(card.id) {
                return Err(EngineError::Conservation(format!(
                    "card {} is in more than one zone",
                    card.id
                )));
            }
        }
        Ok(())
    }

    // === Public Projection ===

    /// Project the state onto what every player can see.
    #[must_use]
    pub fn public_view(&self) -> PublicView {
        PublicView {
            round: self.round,
            total_rounds: self.config.total_rounds,
            wild_rank: self.rule.wild_rank,
            current_player: self.current_player().map(|p| p.id),
            turn_phase: self.turn_phase,
            status: self.status,
            players: self
                .players
                .iter()
                .map(|p| PublicPlayer {
                    id: p.id,
                    name: p.name.clone(),
                    hand_size: p.hand.len(),
                    score: p.score,
                })
                .collect(),
            draw_pile_size: self.draw_pile.len(),
            discard_top: self.discard_top().copied(),
            melds: self.melds.iter().cloned().collect(),
            out_triggered_by: self.out_triggered_by,
            turns_remaining_after_out: self.turns_remaining_after_out,
        }
    }
}

/// Card counts per zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCensus {
    pub hands: usize,
    pub draw_pile: usize,
    pub discard_pile: usize,
    pub melds: usize,
}

impl CardCensus {
    /// Cards across all zones.
    #[must_use]
    pub fn total(&self) -> usize {
        self.hands + self.draw_pile + self.discard_pile + self.melds
    }
}

/// A player as seen by everyone else.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicPlayer {
    pub id: PlayerId,
    pub name: String,
    pub hand_size: usize,
    pub score: u32,
}

/// The public portion of a `GameState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicView {
    pub round: u8,
    pub total_rounds: u8,
    pub wild_rank: u8,
    pub current_player: Option<PlayerId>,
    pub turn_phase: TurnPhase,
    pub status: GameStatus,
    pub players: Vec<PublicPlayer>,
    pub draw_pile_size: usize,
    pub discard_top: Option<Card>,
    pub melds: Vec<Meld>,
    pub out_triggered_by: Option<PlayerId>,
    pub turns_remaining_after_out: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::new_game;

    fn game() -> GameState {
        new_game(&["Ada", "Grace", "Linus"], Some(42), true).unwrap()
    }

    #[test]
    fn test_accessors() {
        let state = game();

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.current_player().map(|p| p.id), Some(PlayerId::new(0)));
        assert_eq!(state.player(PlayerId::new(2)).map(|p| p.name.as_str()), Some("Linus"));
        assert!(state.player(PlayerId::new(9)).is_none());
        assert!(state.meld(MeldId::new(0)).is_none());
        assert_eq!(state.discard_top(), state.discard_pile.get(state.discard_pile.len() - 1));
        assert!(!state.is_over());
    }

    #[test]
    fn test_census_after_deal() {
        let state = game();
        let census = state.card_census();

        assert_eq!(census.hands, 9);
        assert_eq!(census.discard_pile, 1);
        assert_eq!(census.melds, 0);
        assert_eq!(census.total(), 116);
        assert!(state.verify_conservation().is_ok());
    }

    #[test]
    fn test_conservation_detects_duplicates() {
        let mut state = game();
        let dup = state.draw_pile[0];
        state.discard_pile.push_back(dup);
        state.draw_pile.pop_back();

        assert!(state.verify_conservation().is_err());
    }

    #[test]
    fn test_conservation_detects_loss() {
        let mut state = game();
        state.draw_pile.pop_front();

        assert!(state.verify_conservation().is_err());
    }

    #[test]
    fn test_public_view_hides_hands() {
        let state = game();
        let view = state.public_view();

        assert_eq!(view.round, 1);
        assert_eq!(view.wild_rank, 3);
        assert_eq!(view.players.len(), 3);
        assert!(view.players.iter().all(|p| p.hand_size == 3 && p.score == 0));
        assert_eq!(view.draw_pile_size, state.draw_pile.len());
        assert_eq!(view.discard_top, state.discard_top().copied());
        assert_eq!(view.turn_phase, TurnPhase::NeedDraw);
        assert_eq!(view.status, GameStatus::Playing);
    }

    #[test]
    fn test_alloc_meld_id() {
        let mut state = game();
        let a = state.alloc_meld_id();
        let b = state.alloc_meld_id();
        assert_eq!(a, MeldId::new(0));
        assert_eq!(b, MeldId::new(1));
    }
}
