//! Rules: the round table and the turn state machine.
//!
//! - `round`: hand size and wild rank per round
//! - `engine`: game construction, turn actions and round lifecycle
//!
//! Every action is a function from `&GameState` to a new `GameState`.

pub mod engine;
pub mod round;

pub use engine::{
    apply_action, available_actions, discard, draw_from_deck, draw_from_discard, lay_off,
    new_game, new_game_with_config, next_round, next_round_with, sort_hand, submit_meld,
    ActionResult, HandOrder, RoundOptions,
};
pub use round::{round_rule, RoundRule, MAX_ROUNDS};
