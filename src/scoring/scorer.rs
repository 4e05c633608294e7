//! Hand penalties, round scoring and winner determination.
//!
//! Scores are penalty points: lowest cumulative total wins.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::card::Card;
use crate::core::config::ScoringConfig;
use crate::core::player::{Player, PlayerId};
use crate::core::state::{GameState, GameStatus};
use crate::rules::RoundRule;

/// Joker penalty under the default scoring.
pub const JOKER_PENALTY: u32 = 50;

/// Round-wild penalty under the default scoring.
pub const WILD_PENALTY: u32 = 20;

/// Penalty for the cards left in `hand` under the default scoring.
///
/// Jokers cost 50, the round's wild rank costs 20, everything else its face
/// value (J/Q/K count 11/12/13).
pub fn score_hand<'a, I>(hand: I, rule: &RoundRule) -> u32
where
    I: IntoIterator<Item = &'a Card>,
{
    score_hand_with(hand, rule, &ScoringConfig::default())
}

/// Penalty for `hand` under explicit penalty values.
pub fn score_hand_with<'a, I>(hand: I, rule: &RoundRule, scoring: &ScoringConfig) -> u32
where
    I: IntoIterator<Item = &'a Card>,
{
    hand.into_iter()
        .map(|card| {
            if card.is_joker() {
                scoring.joker_penalty
            } else if card.rank == rule.wild_rank {
                scoring.wild_penalty
            } else {
                u32::from(card.rank)
            }
        })
        .sum()
}

/// Score every hand, add it to the running totals, and close the round.
///
/// Status becomes `GameOver` on the final round, `RoundEnd` otherwise. The
/// out-trigger fields are cleared. Hands and melds stay in place so the
/// table can still be shown until the next deal.
pub fn apply_round_scoring(state: &mut GameState) {
    let rule = state.rule;
    let scoring = state.config.scoring;

    for player in state.players.iter_mut() {
        let penalty = score_hand_with(player.hand.iter(), &rule, &scoring);
        player.score += penalty;
        info!(
            round = state.round,
            player = %player.id,
            penalty,
            total = player.score,
            "round scored"
        );
    }

    state.out_triggered_by = None;
    state.turns_remaining_after_out = None;
    state.status = if state.round >= state.config.total_rounds {
        GameStatus::GameOver
    } else {
        GameStatus::RoundEnd
    };

    if state.status == GameStatus::GameOver {
        info!(winners = ?winners(state.players.iter()), "game over");
    }
}

/// Players tied for the lowest cumulative score, in seat order.
pub fn winners<'a, I>(players: I) -> Vec<PlayerId>
where
    I: IntoIterator<Item = &'a Player>,
{
    let players: Vec<&Player> = players.into_iter().collect();
    let Some(best) = players.iter().map(|p| p.score).min() else {
        return Vec::new();
    };
    players
        .iter()
        .filter(|p| p.score == best)
        .map(|p| p.id)
        .collect()
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players share the lowest score.
    Tied(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won (alone or in a tie).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Tied(ps) => ps.contains(&player),
        }
    }

    /// All winning players.
    #[must_use]
    pub fn players(&self) -> Vec<PlayerId> {
        match self {
            GameResult::Winner(p) => vec![*p],
            GameResult::Tied(ps) => ps.clone(),
        }
    }
}

/// The game's result, once it is over.
#[must_use]
pub fn game_result(state: &GameState) -> Option<GameResult> {
    if state.status != GameStatus::GameOver {
        return None;
    }
    let mut best = winners(state.players.iter());
    match best.len() {
        0 => None,
        1 => best.pop().map(GameResult::Winner),
        _ => Some(GameResult::Tied(best)),
    }
}
