//! Full-game lifecycle tests.
//!
//! These tests drive games from the first deal through `GAME_OVER` and
//! check the round table, score accumulation and card conservation along
//! the way.

mod support;

use crowns_engine::core::RuleViolation;
use crowns_engine::{
    game_result, new_game, new_game_with_config, next_round, score_hand, ActionError, GameConfig,
    GameResult, GameStatus, PlayerId, TurnPhase,
};
use support::{go_out, init_logging, play_out_round};

/// Test that a complete eleven-round game deals the right hands each round.
#[test]
fn test_full_game_round_table() {
    init_logging();
    let mut state = new_game(&["Ada", "Grace", "Linus"], Some(2024), true).unwrap();
    let mut previous_scores = vec![0u32; 3];

    for round in 1..=11u8 {
        assert_eq!(state.round, round);
        assert_eq!(state.rule.wild_rank, round + 2);
        assert!(state
            .players
            .iter()
            .all(|p| p.hand.len() == usize::from(round) + 2));
        assert!(state.verify_conservation().is_ok());

        state = play_out_round(go_out(&state));
        assert!(state.verify_conservation().is_ok());

        let scores: Vec<u32> = state.players.iter().map(|p| p.score).collect();
        for (now, before) in scores.iter().zip(&previous_scores) {
            assert!(now >= before);
        }
        previous_scores = scores;

        if round < 11 {
            assert_eq!(state.status, GameStatus::RoundEnd);
            state = next_round(&state).unwrap();
        }
    }

    assert_eq!(state.status, GameStatus::GameOver);
    assert!(game_result(&state).is_some());
    assert_eq!(
        next_round(&state),
        Err(ActionError::Rule(RuleViolation::GameAlreadyOver))
    );
}

/// Test that round scores are the hand penalties left at the end.
#[test]
fn test_round_scores_match_hands() {
    let state = new_game(&["A", "B"], Some(8), true).unwrap();
    let ended = play_out_round(go_out(&state));

    assert_eq!(ended.status, GameStatus::RoundEnd);
    for player in ended.players.iter() {
        assert_eq!(player.score, score_hand(player.hand.iter(), &ended.rule));
    }
    assert_eq!(ended.players[0].score, 0);
}

/// Test that nextRound on the final round ends the game.
#[test]
fn test_next_round_on_final_round() {
    let mut state = new_game(&["A", "B"], Some(8), true).unwrap();
    state.round = 11;
    state.rule = crowns_engine::round_rule(11).unwrap();
    state.status = GameStatus::RoundEnd;

    let next = next_round(&state).unwrap();
    assert_eq!(next.status, GameStatus::GameOver);
    assert_eq!(next.round, 11);
}

/// Test that a shortened game ends after the configured round count.
#[test]
fn test_short_game() {
    let config = GameConfig::new().with_seed(5).with_total_rounds(2);
    let mut state = new_game_with_config(&["A", "B", "C", "D"], config).unwrap();

    state = play_out_round(go_out(&state));
    assert_eq!(state.status, GameStatus::RoundEnd);

    state = next_round(&state).unwrap();
    assert_eq!(state.round, 2);
    assert_eq!(state.turn_phase, TurnPhase::NeedDraw);

    state = play_out_round(go_out(&state));
    assert_eq!(state.status, GameStatus::GameOver);
}

/// Test that tied minimum scores are reported as a set.
#[test]
fn test_tied_winners() {
    let mut state = new_game(&["A", "B", "C"], Some(1), true).unwrap();
    state.status = GameStatus::GameOver;
    state.players[0].score = 30;
    state.players[1].score = 12;
    state.players[2].score = 12;

    let result = game_result(&state).unwrap();
    assert_eq!(result, GameResult::Tied(vec![PlayerId::new(1), PlayerId::new(2)]));
    assert!(!result.is_winner(PlayerId::new(0)));

    state.players[2].score = 13;
    assert_eq!(game_result(&state), Some(GameResult::Winner(PlayerId::new(1))));
}

/// Test that no result is reported while the game is running.
#[test]
fn test_no_result_mid_game() {
    let state = new_game(&["A", "B"], Some(1), true).unwrap();
    assert_eq!(game_result(&state), None);
}

/// Test that identical seeds replay identical games.
#[test]
fn test_seeded_games_replay() {
    let play = || {
        let state = new_game(&["A", "B", "C"], Some(77), true).unwrap();
        let state = next_round(&play_out_round(go_out(&state))).unwrap();
        play_out_round(go_out(&state))
    };
    assert_eq!(play(), play());
}
