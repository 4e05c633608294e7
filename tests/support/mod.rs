//! Shared helpers for integration tests.

#![allow(dead_code)]

use crowns_engine::{discard, draw_from_deck, GameState, GameStatus};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Draw, then tuck every card but the first under the discard pile and
/// discard the last one. Cards only change zones, so conservation holds.
pub fn go_out(state: &GameState) -> GameState {
    let mut state = draw_from_deck(state).unwrap();
    let index = state.current_player_index;
    let mut hand = state.players[index].hand.clone();
    let keep = hand.pop_front().unwrap();
    for card in hand {
        state.discard_pile.push_front(card);
    }
    state.players[index].hand = im::vector![keep];
    discard(&state, &[keep.id]).unwrap()
}

/// Draw and discard the first card in hand until the round is over.
pub fn play_out_round(mut state: GameState) -> GameState {
    while state.status == GameStatus::Playing {
        state = draw_from_deck(&state).unwrap();
        let card = state.current_player().unwrap().hand[0].id;
        state = discard(&state, &[card]).unwrap();
    }
    state
}
