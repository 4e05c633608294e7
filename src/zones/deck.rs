//! Deck construction, shuffling, dealing and pile movement.
//!
//! ## Pile orientation
//!
//! - Draw pile: top is index 0.
//! - Discard pile: top is the last element.
//!
//! Every function here moves cards between sequences; none creates or
//! drops a card, so the zone invariant holds across any sequence of calls.

use im::Vector;
use tracing::debug;

use crate::core::card::{Card, CardId};
use crate::core::config::DeckConfig;
use crate::core::error::EngineError;
use crate::core::rng::RandomSource;

/// Build the deck described by `config`.
///
/// Order is copy-major, then suit, then rank, with each copy's Jokers last.
/// IDs are assigned sequentially in that order.
#[must_use]
pub fn create_deck(config: &DeckConfig) -> Vec<Card> {
    let mut deck = Vec::with_capacity(config.total_cards());
    let mut next_id: u16 = 0;
    let mut alloc = || {
        let id = CardId::new(next_id);
        next_id = next_id.wrapping_add(1);
        id
    };

    for copy in 0..config.copies {
        for &suit in &config.suits {
            for &rank in &config.ranks {
                deck.push(Card::new(alloc(), suit, rank, copy));
            }
        }
        for _ in 0..config.jokers_per_deck {
            deck.push(Card::joker(alloc(), copy));
        }
    }
    deck
}

/// Fisher-Yates shuffle, last index down to 1, `j = floor(rng() * (i + 1))`.
///
/// The same source sequence and input order always give the same output.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Result of dealing a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    /// One hand per player, in seat order.
    pub hands: Vec<Vector<Card>>,
    pub draw_pile: Vector<Card>,
    pub discard_pile: Vector<Card>,
}

/// Deal `hand_size` cards to each of `player_count` players, one at a time
/// round-robin, from the front of `deck`.
///
/// Whatever remains becomes the draw pile. With `start_discard`, the first
/// remaining card seeds the discard pile.
pub fn deal(
    deck: Vec<Card>,
    player_count: usize,
    hand_size: usize,
    start_discard: bool,
) -> Result<Deal, EngineError> {
    let needed = player_count * hand_size;
    if needed > deck.len() {
        return Err(EngineError::DeckTooSmall {
            needed,
            available: deck.len(),
        });
    }

    let mut hands = vec![Vector::new(); player_count];
    let mut cards = deck.into_iter();
    for _ in 0..hand_size {
        for hand in hands.iter_mut() {
            if let Some(card) = cards.next() {
                hand.push_back(card);
            }
        }
    }

    let mut draw_pile: Vector<Card> = cards.collect();
    let mut discard_pile = Vector::new();
    if start_discard {
        if let Some(card) = draw_pile.pop_front() {
            discard_pile.push_back(card);
        }
    }

    debug!(
        players = player_count,
        hand_size,
        draw = draw_pile.len(),
        discard = discard_pile.len(),
        "dealt round"
    );

    Ok(Deal {
        hands,
        draw_pile,
        discard_pile,
    })
}

/// Remove and return the top of the draw pile.
pub fn draw_one(draw_pile: &mut Vector<Card>) -> Result<Card, EngineError> {
    draw_pile.pop_front().ok_or(EngineError::EmptyDrawPile)
}

/// Remove and return the top of the discard pile.
pub fn take_discard_top(discard_pile: &mut Vector<Card>) -> Result<Card, EngineError> {
    discard_pile.pop_back().ok_or(EngineError::EmptyDiscardPile)
}

/// Place a card on top of the discard pile.
pub fn discard_one(discard_pile: &mut Vector<Card>, card: Card) {
    discard_pile.push_back(card);
}

/// Refill an empty draw pile from the discards.
///
/// No-op unless the draw pile is empty and the discard pile holds at least
/// two cards. The top discard stays where it is; the rest are shuffled into
/// the new draw pile.
pub fn recycle_discard_into_draw<R: RandomSource + ?Sized>(
    draw_pile: &mut Vector<Card>,
    discard_pile: &mut Vector<Card>,
    rng: &mut R,
) {
    if !draw_pile.is_empty() || discard_pile.len() <= 1 {
        return;
    }
    let Some(top) = discard_pile.pop_back() else {
        return;
    };

    let mut rest: Vec<Card> = std::mem::take(discard_pile).into_iter().collect();
    shuffle(&mut rest, rng);

    debug!(recycled = rest.len(), "recycled discards into draw pile");

    *draw_pile = rest.into_iter().collect();
    discard_pile.push_back(top);
}
