//! Scoring: hand penalties, round totals and the final result.
//!
//! ## Key Types
//!
//! - `GameResult`: single winner or a tied set

pub mod scorer;

pub use scorer::{
    apply_round_scoring, game_result, score_hand, score_hand_with, winners, GameResult,
    JOKER_PENALTY, WILD_PENALTY,
};
