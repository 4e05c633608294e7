//! # crowns-engine
//!
//! A deterministic rules engine for Five Crowns style rummy games.
//!
//! ## Design Principles
//!
//! 1. **Pure Actions**: Every action maps `&GameState` to a new
//!    `GameState` or a typed rejection. The input is never modified.
//!
//! 2. **Injected Randomness**: The only randomness is a seeded
//!    `Mulberry32` carried in the state. Same seed, same game.
//!
//! 3. **Configuration Over Convention**: Deck composition, round count,
//!    penalties and house rules come from `GameConfig`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`, so
//!   keeping every snapshot for undo or replay is cheap.
//!
//! - **Rejections vs. Bugs**: `RuleViolation` is an expected, displayable
//!   rejection; `EngineError` is a caller bug that fails the operation.
//!
//! ## Modules
//!
//! - `core`: Cards, players, state, actions, RNG, configuration, errors
//! - `zones`: Deck construction, shuffle, deal and pile movement
//! - `melds`: Wild-aware BOOK/RUN and lay-off validation
//! - `rules`: Round rule table and turn state machine
//! - `scoring`: Hand penalties, round scoring and winners
//! - `snapshot`: Binary and JSON persistence
//!
//! ## Example
//!
//! ```
//! use crowns_engine::{apply_action, new_game, Action, TurnPhase};
//!
//! let state = new_game(&["Ada", "Grace"], Some(42), true).unwrap();
//! let state = apply_action(&state, &Action::DrawFromDeck).unwrap();
//! assert_eq!(state.turn_phase, TurnPhase::NeedDiscard);
//!
//! let card = state.players[0].hand[0].id;
//! let state = apply_action(&state, &Action::discard(card)).unwrap();
//! assert_eq!(state.current_player_index, 1);
//! ```

pub mod core;
pub mod melds;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ActionKind, Card, CardId, DeckConfig, EngineError, GameConfig,
    GameState, GameStatus, MeldPolicy, Mulberry32, Player, PlayerId, PublicView, RandomSource,
    RuleViolation, ScoringConfig, Suit, TurnPhase,
};

pub use crate::melds::{Meld, MeldError, MeldId, MeldType};

pub use crate::rules::{
    apply_action, available_actions, discard, draw_from_deck, draw_from_discard, lay_off,
    new_game, new_game_with_config, next_round, next_round_with, round_rule, sort_hand,
    submit_meld, ActionResult, HandOrder, RoundOptions, RoundRule,
};

pub use crate::scoring::{game_result, score_hand, winners, GameResult};
