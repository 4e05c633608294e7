//! Turn state machine and round lifecycle.
//!
//! Every action takes the current [`GameState`] by reference and returns
//! the next one, or an [`ActionError`] with the input left untouched.
//! Persistent vectors keep the working copy cheap.
//!
//! ## Turn
//!
//! ```text
//! NeedDraw --draw--> NeedDiscard --meld / lay off (any number)--> NeedDiscard
//!                    NeedDiscard --discard--> next player's NeedDraw
//! ```
//!
//! ## Going out
//!
//! The first discard that empties a hand records the player in
//! `out_triggered_by` (write-once until the round ends) and grants every
//! other player one final turn. Each final-turn discard decrements
//! `turns_remaining_after_out`; at zero the round is scored immediately.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::round::round_rule;
use crate::core::action::{Action, ActionKind};
use crate::core::card::{Card, CardId};
use crate::core::config::GameConfig;
use crate::core::error::{ActionError, EngineError, RuleViolation};
use crate::core::player::{Player, PlayerId};
use crate::core::rng::Mulberry32;
use crate::core::state::{GameState, GameStatus, TurnPhase};
use crate::melds::{validate_layoff_with, validate_meld_with, Meld, MeldId, MeldType, MIN_MELD_SIZE};
use crate::scoring::apply_round_scoring;
use crate::zones::deck::{self, create_deck, shuffle};

/// Outcome of a state machine action.
pub type ActionResult = Result<GameState, ActionError>;

// === Construction ===

/// Start a game with the default configuration.
///
/// ```
/// use crowns_engine::rules::new_game;
///
/// let state = new_game(&["Ada", "Grace"], Some(7), true).unwrap();
/// assert_eq!(state.round, 1);
/// assert!(state.players.iter().all(|p| p.hand.len() == 3));
/// ```
pub fn new_game<I, S>(names: I, seed: Option<u32>, start_discard: bool) -> Result<GameState, EngineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut config = GameConfig::new().with_start_discard(start_discard);
    config.seed = seed;
    new_game_with_config(names, config)
}

/// Start a game with an explicit configuration.
pub fn new_game_with_config<I, S>(names: I, config: GameConfig) -> Result<GameState, EngineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    config.validate()?;

    let names: Vec<String> = names.into_iter().map(|n| n.as_ref().to_owned()).collect();
    if names.len() < 2 {
        return Err(EngineError::TooFewPlayers(names.len()));
    }
    if names.len() > usize::from(u8::MAX) {
        return Err(EngineError::InvalidConfig(format!(
            "at most {} players are supported, got {}",
            u8::MAX,
            names.len()
        )));
    }

    // The last round deals the largest hands.
    let largest_hand = usize::from(config.total_rounds) + 2;
    let needed = names.len() * largest_hand + usize::from(config.start_discard);
    let available = config.deck.total_cards();
    if needed > available {
        return Err(EngineError::DeckTooSmall { needed, available });
    }

    let seed = config.seed.unwrap_or_else(rand::random::<u32>);
    let players = names
        .into_iter()
        .enumerate()
        .map(|(i, name)| Player::new(PlayerId::new(i as u8), name))
        .collect();

    let start_discard = config.start_discard;
    let mut state = GameState {
        config,
        seed,
        round: 1,
        rule: round_rule(1)?,
        players,
        current_player_index: 0,
        draw_pile: im::Vector::new(),
        discard_pile: im::Vector::new(),
        melds: im::Vector::new(),
        turn_phase: TurnPhase::NeedDraw,
        status: GameStatus::Playing,
        out_triggered_by: None,
        turns_remaining_after_out: None,
        rng: Mulberry32::new(seed),
        next_meld_id: 0,
    };
    deal_round(&mut state, 1, start_discard)?;
    Ok(state)
}

/// Shuffle a fresh deck and deal `round` into `state`.
///
/// Scores and player identities carry over; everything round-scoped is reset.
fn deal_round(state: &mut GameState, round: u8, start_discard: bool) -> Result<(), EngineError> {
    let rule = round_rule(round)?;
    let mut cards = create_deck(&state.config.deck);
    shuffle(&mut cards, &mut state.rng);
    let dealt = deck::deal(
        cards,
        state.players.len(),
        usize::from(rule.hand_size),
        start_discard,
    )?;

    for (player, hand) in state.players.iter_mut().zip(dealt.hands) {
        player.hand = hand;
    }
    state.round = round;
    state.rule = rule;
    state.draw_pile = dealt.draw_pile;
    state.discard_pile = dealt.discard_pile;
    state.melds = im::Vector::new();
    state.turn_phase = TurnPhase::NeedDraw;
    state.status = GameStatus::Playing;
    state.out_triggered_by = None;
    state.turns_remaining_after_out = None;
    state.current_player_index = if state.config.rotate_first_player {
        usize::from(round - 1) % state.players.len()
    } else {
        0
    };

    info!(
        round,
        hand_size = rule.hand_size,
        wild_rank = rule.wild_rank,
        first = state.current_player_index,
        "round started"
    );
    Ok(())
}

// === Guards ===

fn ensure_turn(state: &GameState, phase: TurnPhase) -> Result<(), RuleViolation> {
    if state.status != GameStatus::Playing {
        return Err(RuleViolation::NotPlaying(state.status));
    }
    if state.turn_phase != phase {
        return Err(RuleViolation::WrongPhase {
            expected: phase,
            actual: state.turn_phase,
        });
    }
    Ok(())
}

fn active(state: &GameState) -> Result<&Player, EngineError> {
    state
        .players
        .get(state.current_player_index)
        .ok_or(EngineError::UnknownPlayerIndex(state.current_player_index))
}

fn active_mut(state: &mut GameState) -> Result<&mut Player, EngineError> {
    let index = state.current_player_index;
    state
        .players
        .get_mut(index)
        .ok_or(EngineError::UnknownPlayerIndex(index))
}

/// Resolve selected IDs against a hand, in selection order.
fn resolve_selection(player: &Player, selection: &[CardId]) -> Result<Vec<Card>, RuleViolation> {
    if selection.is_empty() {
        return Err(RuleViolation::EmptySelection);
    }
    let mut seen: FxHashSet<CardId> = FxHashSet::default();
    let mut cards = Vec::with_capacity(selection.len());
    for &id in selection {
        if !seen.insert(id) {
            return Err(RuleViolation::DuplicateSelection(id));
        }
        let card = player.find_card(id).ok_or(RuleViolation::CardNotInHand(id))?;
        cards.push(*card);
    }
    Ok(cards)
}

fn remove_from_hand(player: &mut Player, cards: &[Card]) {
    let ids: FxHashSet<CardId> = cards.iter().map(|c| c.id).collect();
    player.hand.retain(|c| !ids.contains(&c.id));
}

/// Log the outcome of an action and pass it through.
fn logged(kind: ActionKind, before: &GameState, result: ActionResult) -> ActionResult {
    let player = before.current_player_index;
    match &result {
        Ok(next) => debug!(
            action = ?kind,
            player,
            round = before.round,
            phase = ?next.turn_phase,
            status = ?next.status,
            "action applied"
        ),
        Err(err) => debug!(action = ?kind, player, round = before.round, reason = %err, "action rejected"),
    }
    result
}

// === Draw ===

/// Take the top of the draw pile, recycling the discards first if it is empty.
pub fn draw_from_deck(state: &GameState) -> ActionResult {
    logged(ActionKind::DrawFromDeck, state, draw_deck_inner(state))
}

fn draw_deck_inner(state: &GameState) -> ActionResult {
    ensure_turn(state, TurnPhase::NeedDraw)?;

    let mut next = state.clone();
    deck::recycle_discard_into_draw(&mut next.draw_pile, &mut next.discard_pile, &mut next.rng);
    let card = deck::draw_one(&mut next.draw_pile).map_err(|_| EngineError::PilesExhausted)?;
    active_mut(&mut next)?.hand.push_back(card);
    next.turn_phase = TurnPhase::NeedDiscard;
    Ok(next)
}

/// Take the top of the discard pile.
pub fn draw_from_discard(state: &GameState) -> ActionResult {
    logged(ActionKind::DrawFromDiscard, state, draw_discard_inner(state))
}

fn draw_discard_inner(state: &GameState) -> ActionResult {
    ensure_turn(state, TurnPhase::NeedDraw)?;
    if state.discard_pile.is_empty() {
        return Err(RuleViolation::DiscardPileEmpty.into());
    }

    let mut next = state.clone();
    let card = deck::take_discard_top(&mut next.discard_pile)?;
    active_mut(&mut next)?.hand.push_back(card);
    next.turn_phase = TurnPhase::NeedDiscard;
    Ok(next)
}

// === Melds ===

/// Lay the selected cards down as a new meld, BOOK if possible, else RUN.
pub fn submit_meld(state: &GameState, selection: &[CardId]) -> ActionResult {
    logged(ActionKind::SubmitMeld, state, submit_meld_inner(state, selection))
}

fn submit_meld_inner(state: &GameState, selection: &[CardId]) -> ActionResult {
    ensure_turn(state, TurnPhase::NeedDiscard)?;
    let player = active(state)?;
    let cards = resolve_selection(player, selection)?;
    if cards.len() >= player.hand.len() {
        return Err(RuleViolation::WouldEmptyHand.into());
    }

    let rule = state.rule;
    let policy = state.config.meld_policy;
    let kind = match validate_meld_with(&cards, MeldType::Book, &rule, &policy) {
        Ok(()) => MeldType::Book,
        Err(book) => match validate_meld_with(&cards, MeldType::Run, &rule, &policy) {
            Ok(()) => MeldType::Run,
            Err(run) => return Err(RuleViolation::NotAMeld { book, run }.into()),
        },
    };

    let mut next = state.clone();
    let owner = player.id;
    remove_from_hand(active_mut(&mut next)?, &cards);
    let id = next.alloc_meld_id();
    next.melds.push_back(Meld {
        id,
        owner,
        kind,
        cards: cards.into_iter().collect(),
        round: next.round,
    });
    debug!(meld = %id, kind = %kind, player = %owner, "meld laid down");
    Ok(next)
}

/// Add the selected cards to the end of an existing meld.
pub fn lay_off(state: &GameState, meld: MeldId, selection: &[CardId]) -> ActionResult {
    logged(ActionKind::LayOff, state, lay_off_inner(state, meld, selection))
}

fn lay_off_inner(state: &GameState, meld_id: MeldId, selection: &[CardId]) -> ActionResult {
    ensure_turn(state, TurnPhase::NeedDiscard)?;
    let player = active(state)?;
    let cards = resolve_selection(player, selection)?;
    if cards.len() >= player.hand.len() {
        return Err(RuleViolation::WouldEmptyHand.into());
    }

    let position = state
        .melds
        .iter()
        .position(|m| m.id == meld_id)
        .ok_or(RuleViolation::UnknownMeld(meld_id))?;
    let target = &state.melds[position];
    validate_layoff_with(
        target.kind,
        &target.card_vec(),
        &cards,
        &state.rule,
        &state.config.meld_policy,
    )
    .map_err(RuleViolation::InvalidLayoff)?;

    let mut next = state.clone();
    remove_from_hand(active_mut(&mut next)?, &cards);
    if let Some(meld) = next.melds.get_mut(position) {
        meld.cards.extend(cards);
    }
    Ok(next)
}

// === Discard ===

/// Discard exactly one card and end the turn.
pub fn discard(state: &GameState, selection: &[CardId]) -> ActionResult {
    logged(ActionKind::Discard, state, discard_inner(state, selection))
}

fn discard_inner(state: &GameState, selection: &[CardId]) -> ActionResult {
    ensure_turn(state, TurnPhase::NeedDiscard)?;
    if selection.len() != 1 {
        return Err(RuleViolation::DiscardCount(selection.len()).into());
    }
    let cards = resolve_selection(active(state)?, selection)?;

    let mut next = state.clone();
    let player = active_mut(&mut next)?;
    remove_from_hand(player, &cards);
    let (player_id, remaining) = (player.id, player.hand.len());
    for card in cards {
        deck::discard_one(&mut next.discard_pile, card);
    }

    match (next.out_triggered_by, next.turns_remaining_after_out) {
        (None, _) if remaining == 0 => {
            let turns = (next.players.len() - 1) as u8;
            next.out_triggered_by = Some(player_id);
            next.turns_remaining_after_out = Some(turns);
            info!(player = %player_id, round = next.round, final_turns = turns, "player went out");
        }
        (Some(out), turns) if out != player_id => {
            let left = turns.unwrap_or(0).saturating_sub(1);
            next.turns_remaining_after_out = Some(left);
            if left == 0 {
                apply_round_scoring(&mut next);
                return Ok(next);
            }
        }
        _ => {}
    }

    next.current_player_index = (next.current_player_index + 1) % next.players.len();
    next.turn_phase = TurnPhase::NeedDraw;
    Ok(next)
}

// === Round Lifecycle ===

/// Overrides for the next deal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOptions {
    /// Seed the discard pile. Defaults to the game's configuration.
    pub start_discard: Option<bool>,
    /// Reseed the game's RNG before shuffling.
    pub seed: Option<u32>,
}

/// Deal the next round with the game's configured options.
pub fn next_round(state: &GameState) -> ActionResult {
    next_round_with(state, RoundOptions::default())
}

/// Deal the next round, or end the game if the final round was just scored.
pub fn next_round_with(state: &GameState, options: RoundOptions) -> ActionResult {
    match state.status {
        GameStatus::Playing => return Err(RuleViolation::RoundNotOver.into()),
        GameStatus::GameOver => return Err(RuleViolation::GameAlreadyOver.into()),
        GameStatus::RoundEnd => {}
    }

    let mut next = state.clone();
    if next.round >= next.config.total_rounds {
        next.status = GameStatus::GameOver;
        info!(round = next.round, "final round complete");
        return Ok(next);
    }

    if let Some(seed) = options.seed {
        next.seed = seed;
        next.rng = Mulberry32::new(seed);
    }
    let start_discard = options.start_discard.unwrap_or(next.config.start_discard);
    deal_round(&mut next, state.round + 1, start_discard)?;
    Ok(next)
}

// === Dispatch ===

/// Apply any [`Action`] for the active player.
pub fn apply_action(state: &GameState, action: &Action) -> ActionResult {
    match action {
        Action::DrawFromDeck => draw_from_deck(state),
        Action::DrawFromDiscard => draw_from_discard(state),
        Action::SubmitMeld { cards } => submit_meld(state, cards),
        Action::LayOff { meld, cards } => lay_off(state, *meld, cards),
        Action::Discard { cards } => discard(state, cards),
    }
}

/// Action kinds the active player could attempt right now.
///
/// Derived from status, phase, pile sizes and hand size. A listed meld or
/// lay-off still has to pass validation for the cards actually chosen.
#[must_use]
pub fn available_actions(state: &GameState) -> Vec<ActionKind> {
    let mut kinds = Vec::new();
    if state.status != GameStatus::Playing {
        return kinds;
    }
    let hand = state.current_player().map_or(0, Player::hand_size);

    match state.turn_phase {
        TurnPhase::NeedDraw => {
            if !state.draw_pile.is_empty() || state.discard_pile.len() > 1 {
                kinds.push(ActionKind::DrawFromDeck);
            }
            if !state.discard_pile.is_empty() {
                kinds.push(ActionKind::DrawFromDiscard);
            }
        }
        TurnPhase::NeedDiscard => {
            if hand > MIN_MELD_SIZE {
                kinds.push(ActionKind::SubmitMeld);
            }
            if hand > 1 && !state.melds.is_empty() {
                kinds.push(ActionKind::LayOff);
            }
            if hand > 0 {
                kinds.push(ActionKind::Discard);
            }
        }
    }
    kinds
}

// === Hand Order ===

/// Display order for a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandOrder {
    /// Group by suit, ascending rank within a suit.
    BySuit,
    /// Ascending rank, suits breaking ties.
    ByRank,
}

/// Reorder a player's hand. Wild cards go last, Jokers after round wilds.
///
/// Allowed for any player in any phase until the game is over. Only the
/// order changes.
pub fn sort_hand(state: &GameState, player: PlayerId, order: HandOrder) -> ActionResult {
    if state.status == GameStatus::GameOver {
        return Err(RuleViolation::GameAlreadyOver.into());
    }
    let index = state
        .players
        .iter()
        .position(|p| p.id == player)
        .ok_or(RuleViolation::UnknownPlayer(player))?;

    let rule = state.rule;
    let mut cards: Vec<Card> = state.players[index].hand.iter().copied().collect();
    cards.sort_by_key(|c| {
        let wild = rule.is_wild(c);
        let (major, minor) = match order {
            HandOrder::BySuit => (c.suit as u8, c.rank),
            HandOrder::ByRank => (c.rank, c.suit as u8),
        };
        (wild, c.is_joker(), major, minor, c.id)
    });

    let mut next = state.clone();
    if let Some(p) = next.players.get_mut(index) {
        p.hand = cards.into_iter().collect();
    }
    Ok(next)
}
