//! Go-out and final-turn tests.
//!
//! Hands are replaced directly to reach the interesting positions fast;
//! these tests do not check card conservation.

mod support;

use crowns_engine::core::{Card, CardId, Suit};
use crowns_engine::{discard, draw_from_deck, new_game, GameState, GameStatus, PlayerId};
use support::{go_out, init_logging};

fn give_single_card(state: &mut GameState, id: u16) -> CardId {
    let index = state.current_player_index;
    let card = Card::new(CardId::new(id), Suit::Hearts, 9, 0);
    state.players[index].hand = im::vector![card];
    card.id
}

/// Test that the out-trigger is write-once for the round.
#[test]
fn test_out_trigger_is_write_once() {
    init_logging();
    let state = new_game(&["A", "B", "C"], Some(31), true).unwrap();

    let state = go_out(&state);
    assert_eq!(state.out_triggered_by, Some(PlayerId::new(0)));
    assert_eq!(state.turns_remaining_after_out, Some(2));

    // B also empties their hand on the final turn
    let mut state = draw_from_deck(&state).unwrap();
    let last = give_single_card(&mut state, 2001);
    let state = discard(&state, &[last]).unwrap();

    assert_eq!(state.out_triggered_by, Some(PlayerId::new(0)));
    assert_eq!(state.turns_remaining_after_out, Some(1));
    assert!(state.players[1].hand.is_empty());
}

/// Test that each final turn consumes exactly one from the counter.
#[test]
fn test_final_turns_count_down() {
    let state = new_game(&["A", "B", "C", "D"], Some(9), true).unwrap();
    let mut state = go_out(&state);

    for expected in [2u8, 1] {
        state = draw_from_deck(&state).unwrap();
        let card = state.current_player().unwrap().hand[0].id;
        state = discard(&state, &[card]).unwrap();
        assert_eq!(state.turns_remaining_after_out, Some(expected));
        assert_eq!(state.status, GameStatus::Playing);
    }

    state = draw_from_deck(&state).unwrap();
    let card = state.current_player().unwrap().hand[0].id;
    state = discard(&state, &[card]).unwrap();

    assert_eq!(state.status, GameStatus::RoundEnd);
    assert_eq!(state.out_triggered_by, None);
    assert_eq!(state.turns_remaining_after_out, None);
    // Round ended on the last final turn, no rotation back to the player who went out
    assert_eq!(state.current_player_index, 3);
}

/// Test that an emptied hand on the last final turn still ends the round.
#[test]
fn test_last_final_turn_going_out() {
    let state = new_game(&["A", "B"], Some(12), true).unwrap();
    let mut state = draw_from_deck(&go_out(&state)).unwrap();
    let last = give_single_card(&mut state, 2002);

    let state = discard(&state, &[last]).unwrap();

    assert_eq!(state.status, GameStatus::RoundEnd);
    assert!(state.players.iter().all(|p| p.score == 0));
}

/// Test that no action is accepted once the round has ended.
#[test]
fn test_round_end_blocks_actions() {
    let state = new_game(&["A", "B"], Some(12), true).unwrap();
    let mut state = go_out(&state);
    state = draw_from_deck(&state).unwrap();
    let card = state.current_player().unwrap().hand[0].id;
    state = discard(&state, &[card]).unwrap();
    assert_eq!(state.status, GameStatus::RoundEnd);

    let err = draw_from_deck(&state).unwrap_err();
    assert!(err.is_rejection());
    assert!(err.reason().contains("not in play"));
}
